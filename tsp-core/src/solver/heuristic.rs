use crate::construction::{ConstructionHeuristic, ConstructionKind};
use crate::improvement::{HeldKarpBound, ImprovementHeuristic, ImprovementKind};
use crate::models::{Point, RemovedCity};
use crate::solver::{EditJob, HeuristicContext};
use crate::utils::GenericResult;

/// Specifies an edit of the instance executed as a job.
#[derive(Clone, Debug, PartialEq)]
pub enum EditKind {
    /// Adds a city at given location.
    AddCity(Point),
    /// Moves the city with given index to a new location.
    MoveCity(usize, Point),
    /// Deletes the city with given index.
    DeleteCity(usize),
    /// Puts back a deleted city.
    RestoreCity(RemovedCity),
    /// Replaces the instance with a random one.
    Generate {
        /// Width of the area.
        width: i32,
        /// Height of the area.
        height: i32,
        /// Amount of cities.
        count: usize,
    },
}

/// Specifies what a run does.
#[derive(Clone, Debug, PartialEq)]
pub enum HeuristicKind {
    /// Builds a new tour.
    Construction(ConstructionKind),
    /// Improves the current tour or computes the lower bound.
    Improvement(ImprovementKind),
    /// Edits the instance.
    Edit(EditKind),
}

/// Specifies how a run has finished.
#[derive(Clone, Debug, PartialEq)]
pub enum RunOutcome {
    /// The run has finished its work.
    Completed,
    /// The run was stopped before finishing its work.
    Cancelled,
    /// A city was deleted, the record allows to restore it.
    Deleted(RemovedCity),
}

impl RunOutcome {
    /// Returns true if the run was stopped.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RunOutcome::Cancelled)
    }
}

/// A cancellable unit of work over the instance state.
pub trait Heuristic: Send + Sync {
    /// Returns a human readable name.
    fn name(&self) -> &str;

    /// Runs the heuristic.
    fn run(&self, context: &mut HeuristicContext<'_>) -> GenericResult<RunOutcome>;
}

/// Creates the heuristic for the given kind.
pub fn create_heuristic(kind: HeuristicKind) -> Box<dyn Heuristic> {
    match kind {
        HeuristicKind::Construction(kind) => Box::new(ConstructionHeuristic::new(kind)),
        HeuristicKind::Improvement(ImprovementKind::HeldKarp) => Box::new(HeldKarpBound::default()),
        HeuristicKind::Improvement(kind) => Box::new(ImprovementHeuristic::new(kind)),
        HeuristicKind::Edit(kind) => Box::new(EditJob::new(kind)),
    }
}
