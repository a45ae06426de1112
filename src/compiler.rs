use std::time::Duration;

use crate::action::{Action, ActionKind};
use crate::error::ConfigError;
use crate::gradient::Gradient;
use crate::patch::{LightId, LightPatch};

#[cfg(test)]
mod tests;

/// A compiled action tree: targets resolved, curves validated, ready to run
/// any number of times against a `Setter` and a `Clock`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub(crate) root: Step,
}

/// One lowered unit of work. Target inheritance is already resolved; an
/// empty light list here means broadcast.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Step {
    Apply {
        lights: Vec<LightId>,
        patch: LightPatch,
    },
    Fade {
        lights: Vec<LightId>,
        gradient: Gradient,
        turn_on: bool,
    },
    Wait(Duration),
    Sequence(Vec<Step>),
    Concurrent(Vec<Step>),
    Cycle {
        body: Box<Step>,
        times: u32,
    },
}

impl Action {
    /// Lowers this tree into a runnable [`Plan`].
    ///
    /// `default_lights` is the ambient target set for nodes without an
    /// explicit override; empty means broadcast. Each node's effective set
    /// is resolved exactly once, here.
    pub fn compile(&self, default_lights: &[LightId]) -> Result<Plan, ConfigError> {
        Ok(Plan {
            root: self.lower(default_lights)?,
        })
    }

    fn lower(&self, ambient: &[LightId]) -> Result<Step, ConfigError> {
        let step = self.lower_once(ambient)?;
        if self.repeat >= 2 {
            Ok(Step::Cycle {
                body: Box::new(step),
                times: self.repeat,
            })
        } else {
            Ok(step)
        }
    }

    fn lower_once(&self, ambient: &[LightId]) -> Result<Step, ConfigError> {
        let lights = if self.lights.is_empty() {
            ambient
        } else {
            &self.lights
        };
        match &self.kind {
            ActionKind::Set(patch) => Ok(Step::Apply {
                lights: lights.to_vec(),
                patch: *patch,
            }),
            ActionKind::Fade { gradient, turn_on } => {
                validate_curve(gradient)?;
                Ok(Step::Fade {
                    lights: lights.to_vec(),
                    gradient: gradient.clone(),
                    turn_on: *turn_on,
                })
            }
            ActionKind::Sleep(duration) => Ok(Step::Wait(*duration)),
            ActionKind::Series(children) => Ok(Step::Sequence(
                children
                    .iter()
                    .map(|child| child.lower(lights))
                    .collect::<Result<_, _>>()?,
            )),
            ActionKind::Parallel(children) => Ok(Step::Concurrent(
                children
                    .iter()
                    .map(|child| child.lower(lights))
                    .collect::<Result<_, _>>()?,
            )),
        }
    }
}

fn validate_curve(gradient: &Gradient) -> Result<(), ConfigError> {
    let Some(first) = gradient.keyframes.first() else {
        return Err(ConfigError::EmptyGradient);
    };
    if !first.offset.is_zero() {
        return Err(ConfigError::FirstKeyframeNotAtZero);
    }
    Ok(())
}
