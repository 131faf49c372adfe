//! Click hit testing
//!
//! Scan order is collection order, which is also draw order; the first match
//! wins.

use glam::Vec2;

use super::shape::{Shape, ShapeKind};

/// Index of the first shape containing `point`, scanning in collection order.
pub fn hit_test(shapes: &[Shape], point: Vec2) -> Option<usize> {
    shapes.iter().position(|shape| contains(shape, point))
}

/// Point-in-shape predicate, per kind:
/// - circle/ellipse: distance-to-center vs radius (true elliptical test)
/// - square/triangle/star: bounding box over [x, x+size] x [y, y+size]
/// - polygon: never a hit (pentagons and hexagons do not register clicks)
pub fn contains(shape: &Shape, point: Vec2) -> bool {
    match shape.kind {
        ShapeKind::Circle => {
            let radius = shape.size / 2.0;
            let center = shape.pos + Vec2::splat(radius);
            center.distance_squared(point) <= radius * radius
        }
        ShapeKind::Ellipse { height } => {
            let radii = Vec2::new(shape.size / 2.0, height / 2.0);
            let center = shape.pos + radii;
            ((point - center) / radii).length_squared() <= 1.0
        }
        ShapeKind::Square | ShapeKind::Triangle | ShapeKind::Star => {
            point.x >= shape.pos.x
                && point.x <= shape.pos.x + shape.size
                && point.y >= shape.pos.y
                && point.y <= shape.pos.y + shape.size
        }
        ShapeKind::Polygon { .. } => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::shape::Color;

    fn shape(kind: ShapeKind, x: f32, y: f32, size: f32) -> Shape {
        Shape {
            kind,
            pos: Vec2::new(x, y),
            size,
            color: Color(0x123456),
        }
    }

    #[test]
    fn test_circle_hit_at_center() {
        // Circle at origin, size 40: center (20, 20), radius 20.
        let shapes = [shape(ShapeKind::Circle, 0.0, 0.0, 40.0)];
        assert_eq!(hit_test(&shapes, Vec2::new(20.0, 20.0)), Some(0));
    }

    #[test]
    fn test_circle_miss_at_box_corner() {
        // The box corner is outside the inscribed circle.
        let shapes = [shape(ShapeKind::Circle, 0.0, 0.0, 40.0)];
        assert_eq!(hit_test(&shapes, Vec2::new(1.0, 1.0)), None);
    }

    #[test]
    fn test_square_bounding_box() {
        let shapes = [shape(ShapeKind::Square, 10.0, 10.0, 30.0)];
        assert_eq!(hit_test(&shapes, Vec2::new(15.0, 35.0)), Some(0));
        assert_eq!(hit_test(&shapes, Vec2::new(41.0, 15.0)), None);
    }

    #[test]
    fn test_triangle_and_star_use_bounding_box() {
        let shapes = [
            shape(ShapeKind::Triangle, 0.0, 0.0, 20.0),
            shape(ShapeKind::Star, 100.0, 0.0, 20.0),
        ];
        // Box corners count even where the drawn outline doesn't reach.
        assert_eq!(hit_test(&shapes, Vec2::new(0.5, 0.5)), Some(0));
        assert_eq!(hit_test(&shapes, Vec2::new(100.5, 0.5)), Some(1));
    }

    #[test]
    fn test_polygon_never_hit() {
        let shapes = [shape(ShapeKind::Polygon { sides: 5 }, 10.0, 10.0, 30.0)];
        assert_eq!(hit_test(&shapes, Vec2::new(15.0, 15.0)), None);
        assert_eq!(hit_test(&shapes, Vec2::new(10.0, 10.0)), None);
        let shapes = [shape(ShapeKind::Polygon { sides: 6 }, 10.0, 10.0, 30.0)];
        assert_eq!(hit_test(&shapes, Vec2::new(15.0, 15.0)), None);
    }

    #[test]
    fn test_ellipse_uses_both_radii() {
        // Size 40, height 24: center (20, 12), radii (20, 12).
        let shapes = [shape(ShapeKind::Ellipse { height: 24.0 }, 0.0, 0.0, 40.0)];
        assert_eq!(hit_test(&shapes, Vec2::new(20.0, 12.0)), Some(0));
        assert_eq!(hit_test(&shapes, Vec2::new(38.0, 12.0)), Some(0));
        // Inside the width radius but past the height radius.
        assert_eq!(hit_test(&shapes, Vec2::new(20.0, 25.0)), None);
    }

    #[test]
    fn test_first_match_in_collection_order_wins() {
        let shapes = [
            shape(ShapeKind::Square, 0.0, 0.0, 50.0),
            shape(ShapeKind::Square, 0.0, 0.0, 50.0),
        ];
        assert_eq!(hit_test(&shapes, Vec2::new(25.0, 25.0)), Some(0));
    }

    #[test]
    fn test_miss_outside_everything() {
        let shapes = [
            shape(ShapeKind::Circle, 0.0, 0.0, 40.0),
            shape(ShapeKind::Square, 100.0, 100.0, 30.0),
        ];
        assert_eq!(hit_test(&shapes, Vec2::new(700.0, 500.0)), None);
    }
}
