use thiserror::Error;

use crate::patch::LightId;

/// A malformed specification, reported when a tree is compiled. Execution
/// never raises this.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("gradient curve has no keyframes")]
    EmptyGradient,
    #[error("gradient curve must start at offset zero")]
    FirstKeyframeNotAtZero,
}

/// A failed dispatch, reported during execution. The display of the
/// bridge-reported variants is the raw response text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The broadcast id 0 appeared inside an explicit target list. Raised
    /// locally, before the bridge is contacted.
    #[error("light id 0 is not a valid explicit target")]
    InvalidTarget,
    /// The bridge does not know the addressed light.
    #[error("{}", String::from_utf8_lossy(.raw_response))]
    UnknownLight {
        light: LightId,
        raw_response: Vec<u8>,
    },
    /// Any other dispatch failure, opaque to this crate.
    #[error("{}", String::from_utf8_lossy(.raw_response))]
    Bridge { raw_response: Vec<u8> },
}
