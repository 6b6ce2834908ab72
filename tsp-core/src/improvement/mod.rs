//! This module contains local search heuristics which improve a complete tour and the Held-Karp
//! lower bound of the optimal tour length.

#[cfg(test)]
#[path = "../../tests/unit/improvement/improvement_test.rs"]
mod improvement_test;

mod held_karp;
pub use self::held_karp::*;

mod three_opt;
mod two_opt;

use crate::solver::{Heuristic, HeuristicContext, RunOutcome};
use crate::utils::GenericResult;
use serde::{Deserialize, Serialize};

/// An epsilon used to accept only moves which decrease tour length.
const IMPROVEMENT_EPSILON: f64 = 1E-9;

/// Specifies an improvement algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImprovementKind {
    /// Replaces two tour edges.
    #[serde(rename = "2-opt")]
    TwoOpt,
    /// Replaces three tour edges.
    #[serde(rename = "3-opt")]
    ThreeOpt,
    /// Computes the Held-Karp lower bound, the tour is not changed.
    HeldKarp,
}

impl ImprovementKind {
    /// Returns all improvement kinds.
    pub fn all() -> &'static [ImprovementKind] {
        &[ImprovementKind::TwoOpt, ImprovementKind::ThreeOpt, ImprovementKind::HeldKarp]
    }

    /// Returns a human readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ImprovementKind::TwoOpt => "2-opt",
            ImprovementKind::ThreeOpt => "3-opt",
            ImprovementKind::HeldKarp => "held-karp lower bound",
        }
    }
}

/// Applies local search moves to the current tour until a local optimum is reached.
pub struct ImprovementHeuristic {
    kind: ImprovementKind,
}

impl ImprovementHeuristic {
    /// Creates a new instance of `ImprovementHeuristic`.
    pub fn new(kind: ImprovementKind) -> Self {
        Self { kind }
    }
}

impl Heuristic for ImprovementHeuristic {
    fn name(&self) -> &str {
        self.kind.name()
    }

    fn run(&self, context: &mut HeuristicContext<'_>) -> GenericResult<RunOutcome> {
        let improve = match self.kind {
            ImprovementKind::TwoOpt => two_opt::improve,
            ImprovementKind::ThreeOpt => three_opt::improve,
            ImprovementKind::HeldKarp => return HeldKarpBound::default().run(context),
        };

        let state = &context.state;
        if state.city_count() < 4 {
            return Ok(RunOutcome::Completed);
        }

        if !state.is_tour_complete() {
            return Err(format!(
                "{} requires a complete tour: {} of {} cities are visited",
                self.kind.name(),
                state.tour_size(),
                state.city_count()
            )
            .into());
        }

        Ok(improve(context))
    }
}

/// Shows replaced edges as provisional ones and notifies about the changed tour.
fn show_move(context: &HeuristicContext<'_>, edges: &[(usize, usize)]) {
    context.animate(|port| {
        port.set_provisional_edges(true);
        edges.iter().for_each(|&(from, to)| port.provisional_edge_added(from, to));
    });
    context.pause_point();
    context.animate(|port| port.tour_changed());
    context.pause_point();
    context.animate(|port| port.set_provisional_edges(false));
}
