//! Contains the solve pipeline: a construction run followed by optional improvement runs and the
//! lower bound, summarized as json.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/solve_test.rs"]
mod solve_test;

pub mod config;
pub mod interruption;

use serde::Serialize;
use std::io::Write;
use std::sync::Mutex;
use tsp_core::prelude::*;
use tsp_core::utils::Timer;

/// Specifies the instance and the heuristics to run on it.
#[derive(Clone, Debug)]
pub struct SolveRequest {
    /// City coordinates.
    pub points: Vec<Point>,
    /// A tour construction heuristic.
    pub construction: ConstructionKind,
    /// Improvement heuristics applied in given order.
    pub improvements: Vec<ImprovementKind>,
    /// Whether the Held-Karp lower bound is computed at the end.
    pub lower_bound: bool,
    /// A start city index.
    pub start_city: usize,
}

/// A summary of one heuristic run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepSummary {
    /// Heuristic name.
    pub heuristic: String,
    /// Either `completed` or `cancelled`.
    pub outcome: String,
    /// Tour length after the run.
    pub tour_length: f64,
    /// Run duration.
    pub elapsed_millis: u128,
}

/// A summary of the whole pipeline.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveSummary {
    /// Amount of cities.
    pub cities: usize,
    /// Final tour length.
    pub tour_length: f64,
    /// Held-Karp lower bound, if computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<f64>,
    /// Excess of the tour length over the lower bound in percents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
    /// Runs in execution order.
    pub steps: Vec<StepSummary>,
    /// Final tour as city indices.
    pub tour: Vec<usize>,
}

/// Runs the pipeline described by the request. The pipeline ends early when a run is cancelled.
pub fn solve(request: &SolveRequest, solver: &Solver) -> Result<SolveSummary, String> {
    let mut state = InstanceState::default();
    state.set_instance(&request.points, None, EdgeWeightKind::Euc2D).map_err(|err| err.to_string())?;
    if request.start_city != 0 {
        state.set_start_city(request.start_city).map_err(|err| err.to_string())?;
    }

    let kinds = std::iter::once(HeuristicKind::Construction(request.construction))
        .chain(request.improvements.iter().map(|&kind| HeuristicKind::Improvement(kind)))
        .chain(request.lower_bound.then_some(HeuristicKind::Improvement(ImprovementKind::HeldKarp)));

    let mut steps = Vec::new();
    for kind in kinds {
        let heuristic = heuristic_name(&kind);
        let timer = Timer::start();
        let outcome = solver.run(&mut state, kind).map_err(|err| format!("{heuristic} has failed: '{err}'"))?;

        steps.push(StepSummary {
            heuristic: heuristic.to_string(),
            outcome: if outcome.is_cancelled() { "cancelled" } else { "completed" }.to_string(),
            tour_length: state.tour_length(),
            elapsed_millis: timer.elapsed_millis(),
        });

        if outcome.is_cancelled() {
            break;
        }
    }

    let lower_bound = Some(state.lower_bound()).filter(|&bound| bound > 0.);

    Ok(SolveSummary {
        cities: state.city_count(),
        tour_length: state.tour_length(),
        lower_bound,
        gap: lower_bound.map(|bound| (state.tour_length() - bound) / bound * 100.),
        steps,
        tour: state.tour().to_vec(),
    })
}

/// Writes the summary as pretty json.
pub fn write_summary<W: Write>(writer: W, summary: &SolveSummary) -> Result<(), String> {
    serde_json::to_writer_pretty(writer, summary).map_err(|err| format!("cannot write summary: '{err}'"))
}

fn heuristic_name(kind: &HeuristicKind) -> &'static str {
    match kind {
        HeuristicKind::Construction(kind) => kind.name(),
        HeuristicKind::Improvement(kind) => kind.name(),
        HeuristicKind::Edit(_) => "edit",
    }
}

/// An animation port which sends status and progress messages to the logger.
pub struct LoggingAnimation {
    logger: InfoLogger,
    last_progress: Mutex<Option<u8>>,
}

impl LoggingAnimation {
    /// Creates a new instance of `LoggingAnimation`.
    pub fn new(logger: InfoLogger) -> Self {
        Self { logger, last_progress: Mutex::new(None) }
    }
}

impl AnimationPort for LoggingAnimation {
    fn progress(&self, percent: u8) {
        let Ok(mut last_progress) = self.last_progress.lock() else { return };

        let is_new_decile = last_progress.is_none_or(|last| percent / 10 != last / 10 || percent < last);
        if is_new_decile {
            *last_progress = Some(percent);
            (self.logger)(&format!("progress: {percent}%"));
        }
    }

    fn status(&self, text: &str) {
        if let Ok(mut last_progress) = self.last_progress.lock() {
            *last_progress = None;
        }
        (self.logger)(&format!("status: {text}"));
    }
}
