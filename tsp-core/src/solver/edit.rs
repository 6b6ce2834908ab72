use crate::solver::{EditKind, Heuristic, HeuristicContext, RunOutcome};
use crate::utils::GenericResult;

/// Runs an instance edit as a job.
pub struct EditJob {
    kind: EditKind,
}

impl EditJob {
    /// Creates a new instance of `EditJob`.
    pub fn new(kind: EditKind) -> Self {
        Self { kind }
    }
}

impl Heuristic for EditJob {
    fn name(&self) -> &str {
        match &self.kind {
            EditKind::AddCity(_) => "add city",
            EditKind::MoveCity(..) => "move city",
            EditKind::DeleteCity(_) => "delete city",
            EditKind::RestoreCity(_) => "restore city",
            EditKind::Generate { .. } => "random instance",
        }
    }

    fn run(&self, context: &mut HeuristicContext<'_>) -> GenericResult<RunOutcome> {
        match &self.kind {
            EditKind::AddCity(location) => context.state.add_city(*location).map(|_| RunOutcome::Completed),
            EditKind::MoveCity(index, location) => {
                context.state.move_city(*index, *location).map(|_| RunOutcome::Completed)
            }
            EditKind::DeleteCity(index) => context.state.delete_city(*index).map(RunOutcome::Deleted),
            EditKind::RestoreCity(removed) => {
                context.state.restore_city(removed.clone()).map(|_| RunOutcome::Completed)
            }
            EditKind::Generate { width, height, count } => {
                let animation = context.animation;
                context.animation.status("generating random instance");
                context.state.generate(*width, *height, *count, context.environment.random.as_ref(), &mut |percent| {
                    animation.progress(percent)
                })?;

                Ok(RunOutcome::Completed)
            }
        }
    }
}
