use std::time::Duration;

use super::{Plan, Step};
use crate::action::{Action, ActionKind};
use crate::error::ConfigError;
use crate::gradient::{Gradient, Keyframe};
use crate::patch::LightPatch;

fn on_patch() -> LightPatch {
    LightPatch {
        on: Some(true),
        ..Default::default()
    }
}

fn curve(keyframes: Vec<Keyframe>) -> ActionKind {
    ActionKind::Fade {
        gradient: Gradient {
            keyframes,
            refresh: Duration::from_millis(100),
        },
        turn_on: false,
    }
}

#[test]
fn empty_curve_is_rejected() {
    let action = Action::new(curve(vec![]));
    assert_eq!(action.compile(&[]), Err(ConfigError::EmptyGradient));
}

#[test]
fn curve_must_start_at_zero() {
    let action = Action::new(curve(vec![Keyframe {
        offset: Duration::from_millis(10),
        ..Default::default()
    }]));
    assert_eq!(action.compile(&[]), Err(ConfigError::FirstKeyframeNotAtZero));
}

#[test]
fn nested_curves_are_validated() {
    let action = Action::new(ActionKind::Series(vec![
        Action::new(ActionKind::Set(on_patch())),
        Action::new(curve(vec![])),
    ]));
    assert_eq!(action.compile(&[]), Err(ConfigError::EmptyGradient));
}

#[test]
fn overrides_replace_ambient_targets() {
    let action = Action::new(ActionKind::Series(vec![
        Action::new(ActionKind::Set(on_patch())).with_lights([2, 3]),
        Action::new(ActionKind::Set(on_patch())),
    ]))
    .with_lights([9]);
    // The caller's default is shadowed by the root override, which in turn
    // is shadowed by the first child's own list.
    assert_eq!(
        action.compile(&[1]),
        Ok(Plan {
            root: Step::Sequence(vec![
                Step::Apply {
                    lights: vec![2, 3],
                    patch: on_patch(),
                },
                Step::Apply {
                    lights: vec![9],
                    patch: on_patch(),
                },
            ]),
        })
    );
}

#[test]
fn repeat_wraps_the_resolved_body() {
    let action = Action::new(ActionKind::Set(on_patch()))
        .with_lights([4])
        .repeated(3);
    assert_eq!(
        action.compile(&[]),
        Ok(Plan {
            root: Step::Cycle {
                body: Box::new(Step::Apply {
                    lights: vec![4],
                    patch: on_patch(),
                }),
                times: 3,
            },
        })
    );
}

#[test]
fn repeat_below_two_means_once() {
    let action = Action::new(ActionKind::Set(on_patch())).repeated(1);
    assert_eq!(
        action.compile(&[]),
        Ok(Plan {
            root: Step::Apply {
                lights: vec![],
                patch: on_patch(),
            },
        })
    );
}
