use super::commit_edge;
use crate::solver::{HeuristicContext, RunOutcome};
use crate::utils::compare_floats;

/// Builds the tour going from the start city to the nearest unvisited city each time.
pub(super) fn build(context: &mut HeuristicContext<'_>) -> RunOutcome {
    let start = context.state.start_city();
    let mut pool = (0..context.state.city_count()).filter(|&city| city != start).collect::<Vec<_>>();

    context.state.push_tour_node(start);
    let mut current = start;

    while !pool.is_empty() {
        if context.is_stopped() {
            return RunOutcome::Cancelled;
        }

        let distances = context.state.matrix().row(current);
        let position = (0..pool.len())
            .min_by(|&a, &b| compare_floats(distances[pool[a]], distances[pool[b]]))
            .unwrap_or_default();
        let next = pool.swap_remove(position);

        context.state.push_tour_node(next);
        commit_edge(context, current, next);
        current = next;
    }

    commit_edge(context, current, start);

    RunOutcome::Completed
}
