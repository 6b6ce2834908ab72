use crate::algorithms::SpanningTreeBuilder;
use crate::models::InstanceState;
use crate::solver::{Heuristic, HeuristicContext, RunOutcome};
use crate::utils::GenericResult;

/// Default amount of subgradient rounds.
pub const HELD_KARP_MAX_ROUNDS: usize = 300;

const STEP_DECAY: f64 = 0.98;
const CURRENT_DEGREE_WEIGHT: f64 = 0.7;
const PREVIOUS_DEGREE_WEIGHT: f64 = 0.3;

/// Computes the Held-Karp lower bound of the optimal tour length with the 1-tree Lagrangian
/// relaxation and stores it in the state. The tour itself is not changed.
pub struct HeldKarpBound {
    max_rounds: usize,
}

impl HeldKarpBound {
    /// Creates a new instance of `HeldKarpBound` with given max amount of rounds.
    pub fn new(max_rounds: usize) -> Self {
        Self { max_rounds: max_rounds.max(1) }
    }
}

impl Default for HeldKarpBound {
    fn default() -> Self {
        Self::new(HELD_KARP_MAX_ROUNDS)
    }
}

impl Heuristic for HeldKarpBound {
    fn name(&self) -> &str {
        "held-karp lower bound"
    }

    fn run(&self, context: &mut HeuristicContext<'_>) -> GenericResult<RunOutcome> {
        if context.state.city_count() < 3 {
            return Ok(RunOutcome::Completed);
        }

        let mut is_cancelled = false;
        let bound = {
            let context = &*context;
            held_karp_bound(context.state, self.max_rounds, &mut |round, _, _| {
                context.animation.progress((round * 100 / self.max_rounds) as u8);
                is_cancelled = context.is_stopped();
                !is_cancelled
            })
        };

        context.state.set_lower_bound(bound);
        context.animation.progress(100);

        Ok(if is_cancelled { RunOutcome::Cancelled } else { RunOutcome::Completed })
    }
}

/// Runs subgradient optimization of 1-trees rooted at city `0` and returns the best bound found.
///
/// Only leaves of the spanning tree are considered as the special node of a 1-tree. The callback
/// receives the round number, the bound of the round and the best bound so far; returning false
/// stops the optimization. The initial step size is derived from the current tour length, or from
/// the doubled weight of the first spanning tree when the tour is not complete.
pub fn held_karp_bound(
    state: &InstanceState,
    max_rounds: usize,
    on_round: &mut dyn FnMut(usize, f64, f64) -> bool,
) -> f64 {
    let size = state.city_count();
    if size < 3 {
        return 0.;
    }

    let mut penalties = vec![0.; size];
    let mut previous_degrees = vec![0.; size];
    let mut step = 0.;
    let mut best_bound = 0_f64;
    let builder = SpanningTreeBuilder::new(size, 0);

    for round in 0..max_rounds {
        let Some(tree) = builder
            .build(|from, to| state.distance(from, to) + penalties[from] + penalties[to], &mut |_, _| true)
        else {
            break;
        };

        let (special, closest, extra) = tree
            .leaves()
            .filter_map(|leaf| {
                let excluded = tree.parent(leaf).or(tree.first_child(leaf));
                (0..size)
                    .filter(|&other| other != leaf && Some(other) != excluded)
                    .map(|other| (other, state.distance(leaf, other) + penalties[other]))
                    .reduce(|best, current| if current.1 < best.1 { current } else { best })
                    .map(|(other, weight)| (leaf, other, weight + penalties[leaf]))
            })
            .reduce(|best, current| if current.2 > best.2 { current } else { best })
            .unwrap_or((0, 0, 0.));

        let bound = tree.weight() + extra - 2. * penalties.iter().sum::<f64>();
        best_bound = best_bound.max(bound);

        if !on_round(round, bound, best_bound) || round + 1 == max_rounds {
            break;
        }

        let mut degrees = (0..size).map(|node| tree.degree(node) as f64 - 2.).collect::<Vec<_>>();
        degrees[special] += 1.;
        degrees[closest] += 1.;

        if round == 0 {
            let upper = if state.is_tour_complete() { state.tour_length() } else { 2. * tree.weight() };
            step = 10. * (upper - bound) / size as f64;
        } else {
            penalties.iter_mut().zip(degrees.iter().zip(previous_degrees.iter())).for_each(
                |(penalty, (&current, &previous))| {
                    *penalty += step * (CURRENT_DEGREE_WEIGHT * current + PREVIOUS_DEGREE_WEIGHT * previous)
                },
            );
            step *= STEP_DECAY;
        }

        previous_degrees = degrees;
    }

    best_bound
}
