#[cfg(test)]
#[path = "../../tests/unit/utils/quota_test.rs"]
mod quota_test;

use crate::utils::Timer;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

/// Specifies a computational quota for a heuristic run.
/// The main purpose is to allow to stop algorithm in reaction to external events such
/// as user cancellation, timer, etc.
pub trait Quota {
    /// Returns true when computation should be stopped.
    fn is_reached(&self) -> bool;
}

/// A time quota.
pub struct TimeQuota {
    start: Timer,
    limit_in_secs: f64,
}

impl TimeQuota {
    /// Creates a new instance of `TimeQuota`.
    pub fn new(limit_in_secs: f64) -> Self {
        Self { start: Timer::start(), limit_in_secs }
    }
}

impl Quota for TimeQuota {
    fn is_reached(&self) -> bool {
        self.start.elapsed_secs_as_f64() > self.limit_in_secs
    }
}

#[derive(Default)]
struct Signals {
    stopped: bool,
    paused: bool,
}

/// Keeps stop and pause signals shared between a running heuristic and its controller.
///
/// The worker checks the signals only at its suspension points: a stop request is honored at
/// the top of the next outer iteration, a pause request blocks the worker in
/// [`RunControl::wait_while_paused`] until it is lifted or the run is stopped.
#[derive(Default)]
pub struct RunControl {
    signals: Mutex<Signals>,
    resumed: Condvar,
}

impl RunControl {
    /// Requests the run to stop. Wakes up the worker if it is paused.
    pub fn request_stop(&self) {
        self.signals().stopped = true;
        self.resumed.notify_all();
    }

    /// Requests the run to pause or resume.
    pub fn request_pause(&self, paused: bool) {
        self.signals().paused = paused;
        if !paused {
            self.resumed.notify_all();
        }
    }

    /// Returns true if stop was requested.
    pub fn is_stopped(&self) -> bool {
        self.signals().stopped
    }

    /// Returns true if pause was requested and not lifted yet.
    pub fn is_paused(&self) -> bool {
        self.signals().paused
    }

    /// Blocks the calling thread while the run is paused and not stopped.
    pub fn wait_while_paused(&self) {
        let mut signals = self.signals();
        while signals.paused && !signals.stopped {
            signals = self.resumed.wait(signals).unwrap_or_else(PoisonError::into_inner);
        }
    }

    fn signals(&self) -> MutexGuard<'_, Signals> {
        self.signals.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Quota for RunControl {
    fn is_reached(&self) -> bool {
        self.is_stopped()
    }
}
