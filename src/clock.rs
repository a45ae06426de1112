use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

/// Timestamps in microseconds on the executing clock's own timeline.
pub type SyncTime = u64;

/// Time source and suspension point for the executor.
///
/// `sleep` doubles as the cancellation channel: a false return means the run
/// was cancelled while waiting and the caller must stop without dispatching
/// again. Injecting the clock keeps execution deterministic under test.
pub trait Clock: Send + Sync {
    /// Current time on this clock's timeline.
    fn now(&self) -> SyncTime;

    /// Suspends for `duration`. Returns false if cancelled while waiting.
    fn sleep(&self, duration: Duration) -> impl Future<Output = bool> + Send;
}

/// Wall clock backed by the tokio timer, anchored at construction.
pub struct TokioClock {
    origin: Instant,
    cancel: CancellationToken,
}

impl TokioClock {
    pub fn new() -> TokioClock {
        TokioClock {
            origin: Instant::now(),
            cancel: CancellationToken::new(),
        }
    }

    /// Token interrupting sleeps on this clock; cancel it to stop a running
    /// plan at its next suspension point.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        TokioClock::new()
    }
}

impl Clock for TokioClock {
    fn now(&self) -> SyncTime {
        self.origin.elapsed().as_micros() as SyncTime
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = bool> + Send {
        async move {
            tokio::select! {
                _ = tokio::time::sleep(duration) => true,
                _ = self.cancel.cancelled() => false,
            }
        }
    }
}

/// Deterministic clock for tests and simulation: `sleep` advances the
/// virtual time by exactly the requested duration and completes immediately.
pub struct ManualClock {
    now: Mutex<SyncTime>,
    cancelled: AtomicBool,
}

impl ManualClock {
    pub fn new() -> ManualClock {
        ManualClock::starting_at(0)
    }

    pub fn starting_at(now: SyncTime) -> ManualClock {
        ManualClock {
            now: Mutex::new(now),
            cancelled: AtomicBool::new(false),
        }
    }

    /// Makes every subsequent sleep report cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Moves the virtual time forward without a sleep.
    pub fn advance(&self, duration: Duration) {
        *self.now.lock().unwrap() += duration.as_micros() as SyncTime;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        ManualClock::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> SyncTime {
        *self.now.lock().unwrap()
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = bool> + Send {
        async move {
            if self.cancelled.load(Ordering::Relaxed) {
                return false;
            }
            *self.now.lock().unwrap() += duration.as_micros() as SyncTime;
            true
        }
    }
}
