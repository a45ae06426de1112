use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Identifies a single light on the bridge.
pub type LightId = u32;

/// Broadcast sentinel: a dispatch to id 0 addresses every light.
pub const ALL_LIGHTS: LightId = 0;

/// A partial description of desired light state.
///
/// Every field is independent; `None` leaves that attribute untouched on the
/// bridge. Absent fields are skipped when serializing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on: Option<bool>,
    /// Transition time in multiples of 100ms, as understood by the bridge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_time: Option<u16>,
}
