//! Derived statistics over the shape collection
//!
//! Recomputed every frame, never stored as source-of-truth state. Triangle
//! and star reuse the square's area formula, and both polygon side counts
//! use the regular-hexagon formula; both approximations are intentional.

use super::shape::{Shape, ShapeKind};

/// Snapshot of the display stats
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    pub count: usize,
    pub total_area: f64,
}

/// Area of one shape in px². Accumulation happens in f64 so the sum doesn't
/// drift with insertion order.
pub fn shape_area(shape: &Shape) -> f64 {
    use std::f64::consts::PI;
    let size = shape.size as f64;
    match shape.kind {
        ShapeKind::Circle => PI * (size / 2.0).powi(2),
        ShapeKind::Ellipse { height } => PI * (size / 2.0) * (height as f64 / 2.0),
        ShapeKind::Square | ShapeKind::Triangle | ShapeKind::Star => size * size,
        ShapeKind::Polygon { .. } => 3.0 * 3.0f64.sqrt() * size * size / 2.0,
    }
}

/// Count and total area of the collection.
pub fn compute(shapes: &[Shape]) -> Metrics {
    Metrics {
        count: shapes.len(),
        total_area: shapes.iter().map(shape_area).sum(),
    }
}
