use crate::algorithms::DisjointSetForest;
use crate::solver::{HeuristicContext, RunOutcome};
use crate::utils::GenericResult;

/// Builds the tour with greedy edge matching.
///
/// Every row `i` of the upper triangle of the matrix keeps a lower bound of its remaining
/// candidate edges, so only rows which can contain an edge shorter than the current minimum are
/// scanned. The last candidate taken from a row is excluded from the next scans of that row.
pub(super) fn build(context: &mut HeuristicContext<'_>) -> GenericResult<RunOutcome> {
    let size = context.state.city_count();
    let last = size - 1;
    let matrix = context.state.matrix();

    let mut forest = DisjointSetForest::new(size);
    let mut bounds = (0..size)
        .map(|city| if city < last { context.state.neighbours(city).first().map_or(f64::MAX, |n| n.distance) } else { f64::MAX })
        .collect::<Vec<_>>();
    let mut last_candidates = vec![None; size];
    let mut accepted = 0;

    while accepted < size {
        if context.is_stopped() {
            return Ok(RunOutcome::Cancelled);
        }

        let mut min = f64::MAX;
        let mut candidate = None;

        for row in 0..last {
            if min > bounds[row] {
                let distances = matrix.row(row);
                for column in row + 1..size {
                    if min > distances[column]
                        && forest.degree(column) < 2
                        && last_candidates[row] != Some(column)
                    {
                        min = distances[column];
                        candidate = Some((row, column));
                    }
                }

                bounds[row] = min;
            }
        }

        let Some((from, to)) = candidate else {
            return Err(format!("greedy matching has no candidate edge after {accepted} edges").into());
        };

        // a rejected edge closes a sub cycle, so the previous candidate of the row is saturated
        last_candidates[from] = Some(to);

        if forest.merge(from, to) || accepted == last {
            accepted += 1;
            forest.link(from, to);
            [from, to].into_iter().filter(|&city| forest.degree(city) == 2).for_each(|city| bounds[city] = f64::MAX);

            context.animate(|port| {
                port.set_provisional_edges(true);
                port.provisional_edge_added(from, to);
            });
            context.pause_point();
            context.animate(|port| {
                port.set_provisional_edges(false);
                port.edge_added(from, to);
            });
        }
    }

    let path = forest.walk(0);
    if path.len() != size {
        return Err(format!("greedy matching produced a path of {} cities instead of {size}", path.len()).into());
    }

    path.into_iter().for_each(|city| context.state.push_tour_node(city));

    Ok(RunOutcome::Completed)
}
