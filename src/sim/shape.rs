//! Shape model: the variants that fall down the canvas

use glam::Vec2;
use std::fmt;

/// A 24-bit RGB fill color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    /// Pick a uniformly random color
    pub fn random(rng: &mut impl rand::Rng) -> Self {
        Self(rng.random_range(0..0x100_0000))
    }
}

impl fmt::Display for Color {
    /// CSS hex form, e.g. `#1fa3c7`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0xFF_FFFF)
    }
}

/// Shape variant. Each kind carries only the fields it needs; a kind that
/// doesn't exist here can't reach draw/hit-test/metrics logic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    /// Isoceles triangle inscribed in the size x size box
    Triangle,
    Square,
    /// Regular N-gon, `sides` is 5 (pentagon) or 6 (hexagon)
    Polygon { sides: u32 },
    Circle,
    /// The common `size` field is the width; the height rides in the variant
    Ellipse { height: f32 },
    /// 5-pointed star inscribed in the size x size box
    Star,
}

/// A single falling shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    /// Top-left reference point (not the center)
    pub pos: Vec2,
    /// Size scalar: edge, diameter, or circumradius depending on kind
    pub size: f32,
    pub color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_css_hex_is_padded() {
        assert_eq!(Color(0x00_00_07).to_string(), "#000007");
        assert_eq!(Color(0xff_ff_ff).to_string(), "#ffffff");
        assert_eq!(Color(0x1f_a3_c7).to_string(), "#1fa3c7");
    }
}
