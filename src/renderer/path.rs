//! Path generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use crate::consts::{STAR_INNER_RATIO, STAR_SPIKES};
use crate::sim::{Shape, ShapeKind};

/// One fill operation, ready for a 2D canvas backend
#[derive(Debug, Clone, PartialEq)]
pub enum FillPath {
    /// Axis-aligned filled rectangle
    Rect { pos: Vec2, extent: Vec2 },
    /// Closed polygon through `points` in order
    Polygon { points: Vec<Vec2> },
    /// Axis-aligned ellipse (equal radii for circles)
    Ellipse { center: Vec2, radii: Vec2 },
}

/// Vertices of the isoceles triangle inscribed in the size x size box:
/// apex at the top-center, base along the bottom edge.
pub fn triangle_points(pos: Vec2, size: f32) -> [Vec2; 3] {
    [
        pos + Vec2::new(size / 2.0, 0.0),
        pos + Vec2::new(0.0, size),
        pos + Vec2::new(size, size),
    ]
}

/// Vertices of a regular N-gon centered at `center` with the given
/// circumradius, first vertex at angle 0.
pub fn polygon_points(center: Vec2, circumradius: f32, sides: u32) -> Vec<Vec2> {
    (0..sides)
        .map(|i| {
            let theta = i as f32 * 2.0 * PI / sides as f32;
            center + Vec2::new(theta.cos(), theta.sin()) * circumradius
        })
        .collect()
}

/// Vertices of a star, alternating outer and inner radius, starting from the
/// topmost outer point and sweeping clockwise in canvas coordinates.
pub fn star_points(center: Vec2, outer_radius: f32, spikes: u32, inner_radius: f32) -> Vec<Vec2> {
    let step = PI / spikes as f32;
    let mut rot = PI / 2.0 * 3.0;
    let mut points = Vec::with_capacity((spikes * 2) as usize);
    for _ in 0..spikes {
        points.push(center + Vec2::new(rot.cos(), rot.sin()) * outer_radius);
        rot += step;
        points.push(center + Vec2::new(rot.cos(), rot.sin()) * inner_radius);
        rot += step;
    }
    points
}

/// The fill path for one shape:
/// - triangle: isoceles triangle inscribed in [x, y, size, size]
/// - square: the size x size rectangle at pos
/// - polygon: regular N-gon centered at pos with circumradius size
/// - circle/ellipse: centered in their box, radii from size (and height)
/// - star: 5 points, outer radius size/2, inner radius 0.25 x size,
///   centered in the size x size box
pub fn fill_path(shape: &Shape) -> FillPath {
    match shape.kind {
        ShapeKind::Triangle => FillPath::Polygon {
            points: triangle_points(shape.pos, shape.size).to_vec(),
        },
        ShapeKind::Square => FillPath::Rect {
            pos: shape.pos,
            extent: Vec2::splat(shape.size),
        },
        ShapeKind::Polygon { sides } => FillPath::Polygon {
            points: polygon_points(shape.pos, shape.size, sides),
        },
        ShapeKind::Circle => {
            let radius = shape.size / 2.0;
            FillPath::Ellipse {
                center: shape.pos + Vec2::splat(radius),
                radii: Vec2::splat(radius),
            }
        }
        ShapeKind::Ellipse { height } => {
            let radii = Vec2::new(shape.size / 2.0, height / 2.0);
            FillPath::Ellipse {
                center: shape.pos + radii,
                radii,
            }
        }
        ShapeKind::Star => {
            let outer = shape.size / 2.0;
            FillPath::Polygon {
                points: star_points(
                    shape.pos + Vec2::splat(outer),
                    outer,
                    STAR_SPIKES,
                    outer * STAR_INNER_RATIO,
                ),
            }
        }
    }
}
