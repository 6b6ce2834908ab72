//! Insertion heuristics start from the convex hull of all cities and insert remaining cities one
//! by one into the edge which increases the tour length the least.

use super::commit_edge;
use crate::algorithms::ConvexHullList;
use crate::models::InstanceState;
use crate::solver::{HeuristicContext, RunOutcome};

/// Builds the tour inserting each time the city with the cheapest insertion.
pub(super) fn build_cheapest(context: &mut HeuristicContext<'_>) -> RunOutcome {
    let size = context.state.city_count();
    // the cheapest free city for the edge which starts at the indexed tour city
    let mut edge_cache: Vec<Option<(f64, usize)>> = vec![None; size];

    build_with(context, |state, hull| {
        let mut best: Option<(f64, usize, usize)> = None;

        for from in hull.tour_nodes() {
            let (delta, city) = match edge_cache[from] {
                Some(cached) => cached,
                None => {
                    let to = hull.next(from);
                    let Some(cached) = hull
                        .free_nodes()
                        .map(|city| (insertion_delta(state, from, to, city), city))
                        .fold(None, |best: Option<(f64, usize)>, current| match best {
                            Some(best) if best.0 <= current.0 => Some(best),
                            _ => Some(current),
                        })
                    else {
                        continue;
                    };
                    edge_cache[from] = Some(cached);
                    cached
                }
            };

            if best.is_none_or(|(best_delta, ..)| delta < best_delta) {
                best = Some((delta, from, city));
            }
        }

        let (_, from, city) = best?;
        edge_cache.iter_mut().filter(|cached| cached.is_some_and(|(_, target)| target == city)).for_each(|cached| {
            *cached = None;
        });

        Some((from, city))
    })
}

/// Builds the tour inserting each time the free city which is the farthest from the tour.
pub(super) fn build_farthest(context: &mut HeuristicContext<'_>) -> RunOutcome {
    let size = context.state.city_count();
    // a distance from the indexed free city to the closest tour city, lazily initialized
    let mut gaps: Vec<Option<f64>> = vec![None; size];

    build_with(context, |state, hull| {
        let mut farthest: Option<(f64, usize)> = None;

        for city in hull.free_nodes() {
            let gap = *gaps[city].get_or_insert_with(|| {
                hull.tour_nodes().map(|placed| state.distance(city, placed)).fold(f64::MAX, f64::min)
            });

            if farthest.is_none_or(|(max_gap, _)| gap > max_gap) {
                farthest = Some((gap, city));
            }
        }

        let (_, city) = farthest?;
        hull.free_nodes().for_each(|free| {
            if let Some(gap) = gaps[free].as_mut() {
                *gap = gap.min(state.distance(free, city));
            }
        });

        Some((cheapest_edge(state, hull, city), city))
    })
}

/// Builds the tour inserting each time a random free city.
pub(super) fn build_random(context: &mut HeuristicContext<'_>) -> RunOutcome {
    let random = context.environment.random.clone();

    build_with(context, |state, hull| {
        let position = random.uniform_int(0, hull.free_len() as i32 - 1) as usize;
        let city = hull.nth_free(position)?;

        Some((cheapest_edge(state, hull, city), city))
    })
}

/// Builds the hull, then repeatedly asks `select` for the tour city and the free city to insert
/// after it until no free cities left.
fn build_with<F>(context: &mut HeuristicContext<'_>, mut select: F) -> RunOutcome
where
    F: FnMut(&InstanceState, &ConvexHullList) -> Option<(usize, usize)>,
{
    let mut hull = ConvexHullList::new(context.state.city_count());

    let is_completed = {
        let context = &*context;
        hull.build_hull(context.state.cities(), &mut |from, to| {
            commit_edge(context, from, to);
            !context.is_stopped()
        })
    };
    if !is_completed {
        return RunOutcome::Cancelled;
    }

    while hull.free_len() > 0 {
        if context.is_stopped() {
            return RunOutcome::Cancelled;
        }

        let Some((from, city)) = select(context.state, &hull) else { break };
        let to = hull.next(from);

        context.animate(|port| {
            port.set_provisional_edges(true);
            port.provisional_edge_added(city, from);
            port.provisional_edge_added(city, to);
        });
        context.pause_point();
        context.animate(|port| port.edge_removed(from, to));
        context.pause_point();
        context.animate(|port| {
            port.set_provisional_edges(false);
            port.edge_added(city, from);
            port.edge_added(city, to);
        });

        hull.insert_after(from, city);
    }

    hull.tour_nodes().for_each(|city| context.state.push_tour_node(city));

    RunOutcome::Completed
}

/// Returns the tour city which starts the edge with the cheapest insertion of given city.
fn cheapest_edge(state: &InstanceState, hull: &ConvexHullList, city: usize) -> usize {
    hull.tour_nodes()
        .map(|from| (insertion_delta(state, from, hull.next(from), city), from))
        .fold(None, |best: Option<(f64, usize)>, current| match best {
            Some(best) if best.0 <= current.0 => Some(best),
            _ => Some(current),
        })
        .map_or(city, |(_, from)| from)
}

#[inline]
fn insertion_delta(state: &InstanceState, from: usize, to: usize, city: usize) -> f64 {
    state.distance(from, city) + state.distance(city, to) - state.distance(from, to)
}
