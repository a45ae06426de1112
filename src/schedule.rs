use std::time::Duration;

use futures_util::future::BoxFuture;
use futures_util::stream::{FuturesUnordered, StreamExt};
use futures_util::FutureExt;
use tracing::{debug, trace};

use crate::bridge::Setter;
use crate::clock::Clock;
use crate::color::{blend_brightness, blend_color};
use crate::compiler::{Plan, Step};
use crate::dispatch::set_each;
use crate::error::DispatchError;
use crate::gradient::Gradient;
use crate::patch::{LightId, LightPatch};


impl Plan {
    /// Runs the plan once. Every run gets fresh timing state, so one plan
    /// can be executed any number of times.
    ///
    /// A cancelled run stops at its next suspension point and returns Ok;
    /// cancellation is not a failure.
    pub async fn run<S, C>(&self, setter: &S, clock: &C) -> Result<(), DispatchError>
    where
        S: Setter,
        C: Clock,
    {
        debug!("running plan");
        run_step(&self.root, setter, clock).await
    }
}

fn run_step<'a, S, C>(
    step: &'a Step,
    setter: &'a S,
    clock: &'a C,
) -> BoxFuture<'a, Result<(), DispatchError>>
where
    S: Setter,
    C: Clock,
{
    async move {
        match step {
            Step::Apply { lights, patch } => set_each(setter, lights, patch),
            Step::Fade {
                lights,
                gradient,
                turn_on,
            } => run_gradient(setter, clock, lights, gradient, *turn_on).await,
            Step::Wait(duration) => {
                clock.sleep(*duration).await;
                Ok(())
            }
            Step::Sequence(steps) => {
                for step in steps {
                    run_step(step, setter, clock).await?;
                }
                Ok(())
            }
            Step::Concurrent(steps) => {
                let mut children: FuturesUnordered<_> = steps
                    .iter()
                    .map(|step| run_step(step, setter, clock))
                    .collect();
                while let Some(result) = children.next().await {
                    result?;
                }
                Ok(())
            }
            Step::Cycle { body, times } => {
                for _ in 0..*times {
                    run_step(body, setter, clock).await?;
                }
                Ok(())
            }
        }
    }
    .boxed()
}

/// Plays one gradient curve: ticks every `refresh`, interpolating between
/// the keyframes that bracket the elapsed time, then lands exactly on the
/// last keyframe whatever the timing drift was.
///
/// The `turn_on` flag rides only on the curve's very first emission.
async fn run_gradient<S, C>(
    setter: &S,
    clock: &C,
    lights: &[LightId],
    gradient: &Gradient,
    turn_on: bool,
) -> Result<(), DispatchError>
where
    S: Setter,
    C: Clock,
{
    let start = clock.now();
    let mut elapsed = Duration::ZERO;
    let mut emitted = false;
    let frames = &gradient.keyframes;
    let mut idx = 1;
    while idx < frames.len() {
        // Satisfied and zero-length segments are skipped without emitting.
        if elapsed >= frames[idx].offset {
            idx += 1;
            continue;
        }
        let from = &frames[idx - 1];
        let to = &frames[idx];
        let ratio =
            (elapsed - from.offset).as_secs_f64() / (to.offset - from.offset).as_secs_f64();
        let patch = LightPatch {
            color: blend_color(from.color, to.color, ratio),
            brightness: blend_brightness(from.brightness, to.brightness, ratio),
            on: (turn_on && !emitted).then_some(true),
            transition_time: None,
        };
        trace!(?elapsed, ratio, "gradient tick");
        set_each(setter, lights, &patch)?;
        emitted = true;
        if !clock.sleep(gradient.refresh).await {
            return Ok(());
        }
        elapsed = Duration::from_micros(clock.now().saturating_sub(start));
    }
    let last = &frames[frames.len() - 1];
    let patch = LightPatch {
        color: last.color,
        brightness: last.brightness,
        on: (turn_on && !emitted).then_some(true),
        transition_time: None,
    };
    set_each(setter, lights, &patch)
}
