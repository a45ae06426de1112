//! Timed lighting actions for networked light fixtures.
//!
//! Build an [`Action`] tree describing what the lights should do over time,
//! compile it into a [`Plan`], then run the plan against a bridge [`Setter`]
//! and a [`Clock`].

pub mod action;
pub mod bridge;
pub mod clock;
pub mod color;
pub mod compiler;
pub mod dispatch;
pub mod error;
pub mod gradient;
pub mod patch;
pub mod schedule;

pub use action::{Action, ActionKind};
pub use bridge::{ApplyErrorKind, ApplyFailure, Setter};
pub use clock::{Clock, ManualClock, SyncTime, TokioClock};
pub use color::Color;
pub use compiler::Plan;
pub use error::{ConfigError, DispatchError};
pub use gradient::{Gradient, Keyframe};
pub use patch::{LightId, LightPatch, ALL_LIGHTS};
