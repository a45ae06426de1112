use tracing::{debug, warn};

use crate::bridge::{ApplyErrorKind, ApplyFailure, Setter};
use crate::error::DispatchError;
use crate::patch::{LightId, LightPatch, ALL_LIGHTS};

/// Applies `patch` to every resolved target, in list order, on the current
/// logical thread.
///
/// An empty list broadcasts once via the sentinel id. Inside an explicit
/// list the sentinel is rejected before the bridge is contacted, and the
/// first failure aborts the remainder of the list.
pub fn set_each<S: Setter + ?Sized>(
    setter: &S,
    lights: &[LightId],
    patch: &LightPatch,
) -> Result<(), DispatchError> {
    if lights.is_empty() {
        return apply_one(setter, ALL_LIGHTS, patch);
    }
    for &light in lights {
        if light == ALL_LIGHTS {
            warn!("explicit target list contains the broadcast id");
            return Err(DispatchError::InvalidTarget);
        }
        apply_one(setter, light, patch)?;
    }
    Ok(())
}

fn apply_one<S: Setter + ?Sized>(
    setter: &S,
    light: LightId,
    patch: &LightPatch,
) -> Result<(), DispatchError> {
    debug!(light, ?patch, "apply");
    match setter.apply(light, patch) {
        Ok(_) => Ok(()),
        Err(failure) => {
            warn!(light, "apply failed");
            Err(classify(light, failure))
        }
    }
}

/// Sorts a bridge failure into the crate taxonomy, keeping the raw response
/// for the caller.
fn classify(light: LightId, failure: ApplyFailure) -> DispatchError {
    match failure.kind {
        ApplyErrorKind::NoSuchResource => DispatchError::UnknownLight {
            light,
            raw_response: failure.raw_response,
        },
        ApplyErrorKind::Other => DispatchError::Bridge {
            raw_response: failure.raw_response,
        },
    }
}
