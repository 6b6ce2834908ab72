use crate::models::InstanceState;
use crate::solver::{AnimationPort, Settings};
use crate::utils::{Environment, RunControl};
use std::thread;
use std::time::Duration;

/// Keeps everything a heuristic needs during a single run.
pub struct HeuristicContext<'a> {
    /// The state modified by the run.
    pub state: &'a mut InstanceState,
    /// An environment.
    pub environment: &'a Environment,
    /// Stop and pause signals of the run.
    pub control: &'a RunControl,
    /// A sink for animation events.
    pub animation: &'a dyn AnimationPort,
    /// Run settings.
    pub settings: &'a Settings,
}

impl HeuristicContext<'_> {
    /// Returns true when the run should stop: either it is requested or the environment quota
    /// is reached.
    pub fn is_stopped(&self) -> bool {
        self.control.is_stopped() || self.environment.is_quota_reached()
    }

    /// Passes the animation port to the action only when animation is enabled.
    pub fn animate(&self, action: impl FnOnce(&dyn AnimationPort)) {
        if self.settings.animated {
            action(self.animation);
        }
    }

    /// A suspension point after a step: sleeps for the step time when animated and blocks while
    /// the run is paused.
    pub fn pause_point(&self) {
        if self.settings.animated && self.settings.step_time > 0 {
            thread::sleep(Duration::from_millis(self.settings.step_time));
        }

        self.control.wait_while_paused();
    }
}
