//! Render driver
//!
//! Translates shapes into backend-neutral fill paths. The platform layer
//! replays them onto a canvas in collection order, one fill per shape.

pub mod path;

pub use path::{FillPath, fill_path, polygon_points, star_points, triangle_points};
