//! This module contains the solver which runs heuristics either in place or on a dedicated
//! worker thread, together with the types shared by all heuristics.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

mod animation;
pub use self::animation::{AnimationPort, NoAnimation};

mod context;
pub use self::context::HeuristicContext;

mod edit;
pub use self::edit::EditJob;

mod heuristic;
pub use self::heuristic::*;

mod settings;
pub use self::settings::*;

use crate::improvement::ImprovementKind;
use crate::models::InstanceState;
use crate::utils::{Environment, GenericResult, RunControl, Timer};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Runs heuristics over the instance state.
#[derive(Clone)]
pub struct Solver {
    environment: Arc<Environment>,
    settings: Settings,
    animation: Arc<dyn AnimationPort>,
}

impl Solver {
    /// Creates a new instance of `Solver`.
    pub fn new(environment: Arc<Environment>, settings: Settings, animation: Arc<dyn AnimationPort>) -> Self {
        Self { environment, settings, animation }
    }

    /// Runs the heuristic on the current thread until it finishes or the environment quota is
    /// reached.
    pub fn run(&self, state: &mut InstanceState, kind: HeuristicKind) -> GenericResult<RunOutcome> {
        self.run_with_control(state, kind, &RunControl::default())
    }

    /// Runs the heuristic on the current thread using given control signals.
    pub fn run_with_control(
        &self,
        state: &mut InstanceState,
        kind: HeuristicKind,
        control: &RunControl,
    ) -> GenericResult<RunOutcome> {
        execute(state, kind, control, &self.environment, &self.settings, self.animation.as_ref())
    }

    /// Starts the heuristic on a dedicated worker thread. The state is moved to the worker and
    /// given back by [`TaskHandle::join`].
    pub fn start(&self, state: InstanceState, kind: HeuristicKind) -> TaskHandle {
        self.start_with_control(state, kind, Arc::new(RunControl::default()))
    }

    /// Starts the heuristic on a dedicated worker thread using given control signals, so the run
    /// can be paused before it does any work.
    pub fn start_with_control(&self, state: InstanceState, kind: HeuristicKind, control: Arc<RunControl>) -> TaskHandle {
        let solver = self.clone();
        let worker_control = control.clone();

        let handle = thread::spawn(move || {
            let mut state = state;
            let outcome = solver.run_with_control(&mut state, kind, worker_control.as_ref());

            (state, outcome)
        });

        TaskHandle { control, handle }
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(Arc::new(Environment::default()), Settings::default(), Arc::new(NoAnimation))
    }
}

/// A handle of the heuristic running on a worker thread.
pub struct TaskHandle {
    control: Arc<RunControl>,
    handle: JoinHandle<(InstanceState, GenericResult<RunOutcome>)>,
}

impl TaskHandle {
    /// Requests the run to stop at its next suspension point.
    pub fn request_stop(&self) {
        self.control.request_stop();
    }

    /// Requests the run to pause or resume.
    pub fn request_pause(&self, paused: bool) {
        self.control.request_pause(paused);
    }

    /// Returns true while the worker is running.
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Returns control signals of the run.
    pub fn control(&self) -> Arc<RunControl> {
        self.control.clone()
    }

    /// Waits for the worker and returns the state together with the run result.
    pub fn join(self) -> GenericResult<(InstanceState, GenericResult<RunOutcome>)> {
        self.handle.join().map_err(|_| "heuristic worker thread has panicked".into())
    }
}

fn execute(
    state: &mut InstanceState,
    kind: HeuristicKind,
    control: &RunControl,
    environment: &Environment,
    settings: &Settings,
    animation: &dyn AnimationPort,
) -> GenericResult<RunOutcome> {
    let is_lower_bound = kind == HeuristicKind::Improvement(ImprovementKind::HeldKarp);
    let heuristic = create_heuristic(kind);
    let logger = environment.logger.as_ref();

    logger(&format!("{} started on {} cities", heuristic.name(), state.city_count()));
    animation.status(heuristic.name());

    let timer = Timer::start();
    let mut context = HeuristicContext { state: &mut *state, environment, control, animation, settings };
    let result = heuristic.run(&mut context);
    let elapsed = timer.elapsed_millis();

    match &result {
        Ok(outcome) => {
            let outcome_name = if outcome.is_cancelled() { "cancelled" } else { "completed" };
            let bound =
                if is_lower_bound { format!(", lower bound: {:.3}", state.lower_bound()) } else { String::default() };

            logger(&format!(
                "{} {outcome_name} in {elapsed}ms, tour length: {:.3}{bound}",
                heuristic.name(),
                state.tour_length()
            ));
        }
        Err(err) => logger(&format!("{} failed in {elapsed}ms: {err}", heuristic.name())),
    }

    result
}
