//! Per-frame physics and lifecycle
//!
//! Gravity is a uniform downward translation; shapes that fall past the
//! canvas floor are culled in the same pass.

use super::shape::Shape;

/// Advance every shape by `gravity` pixels and drop the ones whose y is now
/// strictly below `floor_y`. Removal is predicate-driven, so several shapes
/// (including identical duplicates) can cull in one tick without index
/// shifting. Returns the number culled.
pub fn fall(shapes: &mut Vec<Shape>, gravity: u32, floor_y: f32) -> usize {
    let before = shapes.len();
    shapes.retain_mut(|shape| {
        shape.pos.y += gravity as f32;
        shape.pos.y <= floor_y
    });
    before - shapes.len()
}
