use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::gradient::Gradient;
use crate::patch::{LightId, LightPatch};

/// What a single node does. Exactly one payload per variant, so a node
/// cannot mix behaviors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Apply one patch immediately.
    Set(LightPatch),
    /// Play a gradient curve. `turn_on` additionally switches the lights on
    /// with the curve's first emission.
    Fade { gradient: Gradient, turn_on: bool },
    /// Do nothing for a while.
    Sleep(Duration),
    /// Children run strictly in order; the first failure aborts the rest.
    Series(Vec<Action>),
    /// Children run concurrently; the composite fails if any child fails.
    Parallel(Vec<Action>),
}

/// One node of a lighting behavior tree.
///
/// Trees are immutable specifications: build once, compile and run as many
/// times as needed. Children are owned by their parent; there are no
/// back-references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Explicit target lights. Empty means inherit the ambient set from the
    /// parent, or for the root the default set handed to
    /// [`Action::compile`](crate::compiler).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lights: Vec<LightId>,
    /// Run this node's body this many times in sequence. Below 2 means once.
    #[serde(default)]
    pub repeat: u32,
    pub kind: ActionKind,
}

impl Action {
    pub fn new(kind: ActionKind) -> Action {
        Action {
            lights: Vec::new(),
            repeat: 0,
            kind,
        }
    }

    /// Restricts this node, and by inheritance its children, to `lights`.
    pub fn with_lights(mut self, lights: impl IntoIterator<Item = LightId>) -> Action {
        self.lights = lights.into_iter().collect();
        self
    }

    /// See [`Action::repeat`].
    pub fn repeated(mut self, times: u32) -> Action {
        self.repeat = times;
        self
    }
}

impl From<ActionKind> for Action {
    fn from(kind: ActionKind) -> Action {
        Action::new(kind)
    }
}
