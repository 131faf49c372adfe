//! Random shape generation
//!
//! One factory serves both spawn paths (the interval timer and click misses),
//! so every shape draws kind, size, and color from the same distribution.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::shape::{Color, Shape, ShapeKind};
use crate::consts::{ELLIPSE_ASPECT, MIN_SHAPE_SIZE, SHAPE_SIZE_SPREAD};

/// Entries in the spawn pool. Pentagon and hexagon are separate rolls that
/// both land on the polygon kind.
const KIND_POOL_LEN: u32 = 7;

fn kind_for_roll(roll: u32, size: f32) -> ShapeKind {
    match roll {
        0 => ShapeKind::Triangle,
        1 => ShapeKind::Square,
        2 => ShapeKind::Polygon { sides: 5 },
        3 => ShapeKind::Polygon { sides: 6 },
        4 => ShapeKind::Circle,
        5 => ShapeKind::Ellipse {
            height: size * ELLIPSE_ASPECT,
        },
        _ => ShapeKind::Star,
    }
}

/// Build a random shape at `pos`: uniform kind from the 7-entry pool, size
/// uniform in [20, 70), uniform RGB color.
pub fn spawn(rng: &mut Pcg32, pos: Vec2) -> Shape {
    let size = rng.random_range(MIN_SHAPE_SIZE..MIN_SHAPE_SIZE + SHAPE_SIZE_SPREAD);
    let roll = rng.random_range(0..KIND_POOL_LEN);
    Shape {
        kind: kind_for_roll(roll, size),
        pos,
        size,
        color: Color::random(rng),
    }
}
