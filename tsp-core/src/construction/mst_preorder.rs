use super::commit_edge;
use crate::algorithms::SpanningTreeBuilder;
use crate::solver::{HeuristicContext, RunOutcome};

/// Builds the tour visiting a minimum spanning tree rooted at the start city in pre-order.
pub(super) fn build(context: &mut HeuristicContext<'_>) -> RunOutcome {
    let (size, start) = (context.state.city_count(), context.state.start_city());

    context.animate(|port| port.set_provisional_edges(true));
    let tree = {
        let context = &*context;
        SpanningTreeBuilder::new(size, start).build(
            |from, to| context.state.distance(from, to),
            &mut |child, parent| {
                context.animate(|port| port.provisional_edge_added(child, parent));
                context.pause_point();
                !context.is_stopped()
            },
        )
    };
    context.animate(|port| port.set_provisional_edges(false));

    let Some(tree) = tree else { return RunOutcome::Cancelled };

    let mut previous = None;
    for city in tree.preorder() {
        if context.is_stopped() {
            return RunOutcome::Cancelled;
        }

        context.state.push_tour_node(city);
        if let Some(previous) = previous {
            commit_edge(context, previous, city);
        }
        previous = Some(city);
    }

    if let Some(last) = previous {
        commit_edge(context, last, start);
    }

    RunOutcome::Completed
}
