use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// One checkpoint on a gradient curve: the color and/or brightness the
/// lights should reach `offset` into the curve. An unspecified attribute
/// holds its last explicit value while the curve plays.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyframe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u8>,
    /// Offset into the curve. Offsets must be non-decreasing across a curve
    /// and the first keyframe sits at zero; equal offsets collapse to an
    /// instantaneous jump.
    pub offset: Duration,
}

/// A piecewise-linear color/brightness trajectory over elapsed time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    pub keyframes: Vec<Keyframe>,
    /// Lights are refreshed this often while the curve plays.
    pub refresh: Duration,
}
