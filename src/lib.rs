//! tessera - constrained polygon triangulation on an integer grid
//!
//! Turns closed polygonal paths with 16-bit integer coordinates into a
//! triangle list that covers their interior and honors every input edge.
//! Robustness comes from exact 64-bit integer predicates rather than
//! epsilon tuning, so coincident and collinear vertices are handled
//! without any input cleanup.

pub mod error;
pub mod predicates;
pub mod primitives;
mod ring;
pub mod spatial;
pub mod triangulate;
pub mod validate;

pub use error::PathError;
pub use predicates::{
    determinant, in_cone, point_in_triangle, segment_vs_line, turn, LineCross, Orientation,
};
pub use primitives::{Aabb2, Point2};
pub use triangulate::{triangulate, triangulate_traced};
pub use validate::validate_paths;
