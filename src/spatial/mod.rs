//! Spatial indexing

pub mod quadtree;

pub use quadtree::{Positioned, Quadtree, SpatialEntry};
