//! Pre-flight validation of raw input paths.
//!
//! The engine does not police its input; it degrades gracefully instead.
//! Callers that would rather fail fast can run this check first.

use crate::error::PathError;

/// Checks the structural constraints the engine expects its caller to
/// uphold: every path splits into (x, y) pairs and carries enough
/// vertices to bound area.
///
/// Returns the first problem found, in path order. Geometric constraints
/// (paths must not cross each other except at shared vertices) are not
/// checked here; verifying them costs more than triangulating.
///
/// # Example
///
/// ```
/// use tessera::{validate_paths, PathError};
///
/// assert!(validate_paths(&[&[0, 0, 10, 0, 10, 10]]).is_ok());
///
/// let odd = validate_paths(&[&[0, 0, 10]]);
/// assert_eq!(
///     odd,
///     Err(PathError::OddCoordinateCount { path: 0, count: 3 })
/// );
/// ```
pub fn validate_paths(paths: &[&[i16]]) -> Result<(), PathError> {
    for (i, path) in paths.iter().enumerate() {
        if path.len() % 2 != 0 {
            return Err(PathError::OddCoordinateCount {
                path: i,
                count: path.len(),
            });
        }
        if path.len() < 6 {
            return Err(PathError::TooFewVertices {
                path: i,
                vertices: path.len() / 2,
            });
        }
    }
    Ok(())
}
