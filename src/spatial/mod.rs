//! Uniform grid spatial indices.
//!
//! Both indices share the same frame: a fixed grid sized once from the
//! final bounding box and an element-count estimate, targeting a small
//! constant occupancy per cell. Queries are conservative; they yield
//! everything stored under the cells a rectangle touches and the caller
//! re-tests exact geometry.
//!
//! - [`PointGrid`] - payload-free point locations (the reflex-vertex index)
//! - [`BoxGrid`] - boxes tagged with a diagonal sign (the active-edge index)

mod box_grid;
mod grid;
mod point_grid;

pub use box_grid::{BoxEntry, BoxGrid};
pub use grid::GridFrame;
pub use point_grid::PointGrid;
