use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Fixed-point scale for chromaticity coordinates.
const SCALE: f64 = 10000.0;

/// The brightest a light can be.
pub const BRIGHT: u8 = 255;

/// The dimmest a light can be.
pub const DIM: u8 = 0;

/// A chromaticity in the CIE xy space, quantized to 1/10000.
///
/// Colors are plain values: store and pass them by copy. Equality is
/// coordinate-wise on the quantized representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    x: u16,
    y: u16,
}

impl Color {
    /// Quantizes `x` and `y` to 1/10000, rounding to nearest.
    /// Coordinates are expected in [0, 1].
    pub fn new(x: f64, y: f64) -> Color {
        Color {
            x: (x * SCALE + 0.5) as u16,
            y: (y * SCALE + 0.5) as u16,
        }
    }

    /// The x coordinate of this color.
    pub fn x(&self) -> f64 {
        f64::from(self.x) / SCALE
    }

    /// The y coordinate of this color.
    pub fn y(&self) -> f64 {
        f64::from(self.y) / SCALE
    }

    /// Linear blend towards `other`: ratio 0 keeps `self`, ratio 1 lands on
    /// `other`. Ratios outside [0, 1] extrapolate; callers guarantee range.
    pub fn blend(self, other: Color, ratio: f64) -> Color {
        let inv = 1.0 - ratio;
        Color::new(
            self.x() * inv + other.x() * ratio,
            self.y() * inv + other.y() * ratio,
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x(), self.y())
    }
}

lazy_static! {
    pub static ref RED: Color = Color::new(0.675, 0.322);
    pub static ref GREEN: Color = Color::new(0.4077, 0.5154);
    pub static ref BLUE: Color = Color::new(0.167, 0.04);
    pub static ref YELLOW: Color = RED.blend(*GREEN, 0.5);
    pub static ref MAGENTA: Color = BLUE.blend(*RED, 0.5);
    pub static ref CYAN: Color = BLUE.blend(*GREEN, 0.5);
    pub static ref PURPLE: Color = Color::new(0.2522, 0.0882);
    pub static ref WHITE: Color = Color::new(0.3848, 0.3629);
    pub static ref PINK: Color = Color::new(0.55, 0.3394);
    pub static ref ORANGE: Color = RED.blend(*YELLOW, 0.5);
}

/// Blends two optional colors. The blend is genuine only when both sides are
/// present; otherwise the first operand is carried forward unchanged, so a
/// keyframe that leaves color unspecified holds the last explicit value.
pub fn blend_color(first: Option<Color>, second: Option<Color>, ratio: f64) -> Option<Color> {
    match (first, second) {
        (Some(a), Some(b)) => Some(a.blend(b, ratio)),
        _ => first,
    }
}

/// Optional brightness blend, rounded to nearest, with the same
/// carry-forward rule as [`blend_color`].
pub fn blend_brightness(first: Option<u8>, second: Option<u8>, ratio: f64) -> Option<u8> {
    match (first, second) {
        (Some(a), Some(b)) => {
            Some(((1.0 - ratio) * f64::from(a) + ratio * f64::from(b) + 0.5) as u8)
        }
        _ => first,
    }
}
