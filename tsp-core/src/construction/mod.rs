//! This module contains heuristics which build a tour from scratch.

#[cfg(test)]
#[path = "../../tests/unit/construction/construction_test.rs"]
mod construction_test;

mod greedy;
mod insertion;
mod mst_preorder;
mod nearest_neighbor;

use crate::solver::{Heuristic, HeuristicContext, RunOutcome};
use crate::utils::GenericResult;
use serde::{Deserialize, Serialize};

/// Specifies a tour construction algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstructionKind {
    /// Adds the shortest edges which keep the partial solution a set of paths.
    Greedy,
    /// Always goes to the nearest unvisited city.
    NearestNeighbor,
    /// Inserts the city which increases the tour length the least.
    CheapestInsertion,
    /// Inserts the city which is the farthest from the tour.
    FarthestInsertion,
    /// Inserts a random city.
    RandomInsertion,
    /// Visits a minimum spanning tree in pre-order.
    MstPreorder,
}

impl ConstructionKind {
    /// Returns all construction kinds.
    pub fn all() -> &'static [ConstructionKind] {
        &[
            ConstructionKind::Greedy,
            ConstructionKind::NearestNeighbor,
            ConstructionKind::CheapestInsertion,
            ConstructionKind::FarthestInsertion,
            ConstructionKind::RandomInsertion,
            ConstructionKind::MstPreorder,
        ]
    }

    /// Returns a human readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ConstructionKind::Greedy => "greedy",
            ConstructionKind::NearestNeighbor => "nearest neighbor",
            ConstructionKind::CheapestInsertion => "cheapest insertion",
            ConstructionKind::FarthestInsertion => "farthest insertion",
            ConstructionKind::RandomInsertion => "random insertion",
            ConstructionKind::MstPreorder => "mst preorder",
        }
    }
}

/// Builds a new tour replacing the current one. When the run is cancelled or fails, the previous
/// tour is restored.
pub struct ConstructionHeuristic {
    kind: ConstructionKind,
}

impl ConstructionHeuristic {
    /// Creates a new instance of `ConstructionHeuristic`.
    pub fn new(kind: ConstructionKind) -> Self {
        Self { kind }
    }
}

impl Heuristic for ConstructionHeuristic {
    fn name(&self) -> &str {
        self.kind.name()
    }

    fn run(&self, context: &mut HeuristicContext<'_>) -> GenericResult<RunOutcome> {
        let snapshot = context.state.snapshot_tour();
        context.state.clear_tour();

        let result = if context.state.city_count() < 3 {
            (0..context.state.city_count()).for_each(|city| context.state.push_tour_node(city));
            Ok(RunOutcome::Completed)
        } else {
            match self.kind {
                ConstructionKind::Greedy => greedy::build(context),
                ConstructionKind::NearestNeighbor => Ok(nearest_neighbor::build(context)),
                ConstructionKind::CheapestInsertion => Ok(insertion::build_cheapest(context)),
                ConstructionKind::FarthestInsertion => Ok(insertion::build_farthest(context)),
                ConstructionKind::RandomInsertion => Ok(insertion::build_random(context)),
                ConstructionKind::MstPreorder => Ok(mst_preorder::build(context)),
            }
        };

        match result {
            Ok(RunOutcome::Completed) => {}
            _ => context.state.restore_tour(snapshot)?,
        }

        result
    }
}

/// Shows the committed edge and waits at the suspension point.
fn commit_edge(context: &HeuristicContext<'_>, from: usize, to: usize) {
    context.animate(|port| port.edge_added(from, to));
    context.pause_point();
}
