use super::{IMPROVEMENT_EPSILON, show_move};
use crate::models::InstanceState;
use crate::solver::{HeuristicContext, RunOutcome};

/// A move which replaces edges `(t1, t2)`, `(t3, t4)` and `(t5, t6)`.
struct ThreeOptMove {
    t1: usize,
    t2: usize,
    t3: usize,
    t4: usize,
    t5: usize,
    t6: usize,
    /// True when `t5` lies strictly between `t2` and `t3`.
    is_between: bool,
    delta: f64,
}

/// Applies 3-opt moves sweeping the tour from the start city until a sweep makes no change.
pub(super) fn improve(context: &mut HeuristicContext<'_>) -> RunOutcome {
    let size = context.state.tour_size();
    let start = context.state.position(context.state.start_city());

    loop {
        let mut is_changed = false;
        let mut position = start;

        loop {
            if context.is_stopped() {
                return RunOutcome::Cancelled;
            }

            match find_move(context.state, position) {
                Some(three_opt) => {
                    apply_move(context.state, &three_opt);
                    is_changed = true;

                    let ThreeOptMove { t1, t2, t3, t4, t5, t6, .. } = three_opt;
                    let edges = if three_opt.is_between {
                        [(t1, t6), (t2, t4), (t3, t5)]
                    } else {
                        [(t1, t5), (t4, t2), (t3, t6)]
                    };
                    show_move(context, &edges);
                }
                None => {
                    position = (position + 1) % size;
                    if position == start {
                        break;
                    }
                }
            }
        }

        if !is_changed {
            return RunOutcome::Completed;
        }
    }
}

fn find_move(state: &InstanceState, position: usize) -> Option<ThreeOptMove> {
    let t1 = state.tour()[position];
    let t2 = state.successor(t1);
    let d12 = state.distance(t1, t2);

    state
        .neighbours(t2)
        .iter()
        .take_while(|neighbour| neighbour.distance < d12)
        .filter(|neighbour| state.predecessor(neighbour.city) != t2)
        .find_map(|neighbour| {
            let (t4, t3) = (neighbour.city, state.predecessor(neighbour.city));
            let (d34, d24) = (state.distance(t3, t4), state.distance(t2, t4));
            let (p2, p3) = (state.position(t2), state.position(t3));

            state
                .neighbours(t3)
                .iter()
                .take_while(|candidate| candidate.distance + d24 < d12 + d34)
                .find_map(|candidate| {
                    let pc = state.position(candidate.city);
                    let is_between = if p2 < p3 { pc > p2 && pc < p3 } else { pc > p2 || pc < p3 };

                    let (t5, t6, closing, is_adjacent) = if is_between {
                        let (t5, t6) = (candidate.city, state.successor(candidate.city));
                        (t5, t6, state.distance(t6, t1), t6 == t3)
                    } else {
                        let (t5, t6) = (state.predecessor(candidate.city), candidate.city);
                        (t5, t6, state.distance(t5, t1), t5 == t4 || t6 == t1 || t6 == t4 || t6 == t2)
                    };

                    if is_adjacent {
                        return None;
                    }

                    let delta = d24 + candidate.distance + closing - (d12 + d34 + state.distance(t5, t6));

                    (delta < -IMPROVEMENT_EPSILON).then_some(ThreeOptMove { t1, t2, t3, t4, t5, t6, is_between, delta })
                })
        })
}

fn apply_move(state: &mut InstanceState, three_opt: &ThreeOptMove) {
    let ThreeOptMove { t2, t3, t5, t6, is_between, delta, .. } = *three_opt;

    if is_between {
        state.reverse_segment(state.position(t2), state.position(t3));
        state.reverse_segment(state.position(t3), state.position(t6));
    } else {
        state.reverse_segment(state.position(t2), state.position(t5));
        state.reverse_segment(state.position(t3), state.position(t2));
    }

    state.add_tour_length(delta);
}
