//! Error types for input validation.

use thiserror::Error;

/// Problems a raw input path can have.
///
/// The triangulation engine itself never returns errors; it produces a
/// best-effort result for whatever it is given. These are reported by
/// [`validate_paths`](crate::validate_paths) for callers that want to
/// reject questionable input up front.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A path has an odd number of values and cannot be split into
    /// (x, y) pairs. The engine would silently drop the trailing value.
    #[error("path {path} has an odd coordinate count ({count})")]
    OddCoordinateCount {
        /// Index of the offending path.
        path: usize,
        /// Its raw value count.
        count: usize,
    },

    /// A path has fewer than three vertices and so bounds no area. The
    /// engine accepts these and emits nothing for them.
    #[error("path {path} has only {vertices} vertices")]
    TooFewVertices {
        /// Index of the offending path.
        path: usize,
        /// Its vertex count.
        vertices: usize,
    },
}
