use crate::patch::{LightId, LightPatch};

/// How the bridge reported a failed apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyErrorKind {
    /// The bridge does not know the addressed light.
    NoSuchResource,
    /// Anything else: transport trouble or a bridge-side error.
    Other,
}

/// A failed [`Setter::apply`], keeping the raw bridge response so the error
/// reported upward can carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyFailure {
    pub kind: ApplyErrorKind,
    pub raw_response: Vec<u8>,
}

impl ApplyFailure {
    pub fn no_such_resource(raw_response: impl Into<Vec<u8>>) -> ApplyFailure {
        ApplyFailure {
            kind: ApplyErrorKind::NoSuchResource,
            raw_response: raw_response.into(),
        }
    }

    pub fn other(raw_response: impl Into<Vec<u8>>) -> ApplyFailure {
        ApplyFailure {
            kind: ApplyErrorKind::Other,
            raw_response: raw_response.into(),
        }
    }
}

/// Capability to change the state of a light. Id 0 broadcasts to every
/// light.
///
/// Implementations wrap the actual bridge transport, which lives outside
/// this crate. On success the raw bridge response is returned for callers
/// that want to inspect it; the engine discards it.
pub trait Setter: Send + Sync {
    fn apply(&self, light: LightId, patch: &LightPatch) -> Result<Vec<u8>, ApplyFailure>;
}
