use super::{IMPROVEMENT_EPSILON, show_move};
use crate::models::InstanceState;
use crate::solver::{HeuristicContext, RunOutcome};

struct TwoOptMove {
    t1: usize,
    t2: usize,
    t3: usize,
    t4: usize,
    delta: f64,
}

/// Applies 2-opt moves sweeping the tour from the start city. Forward sweeps look for `t4` among
/// neighbours of `t2` with `t3` as its predecessor, backward sweeps look for `t3` among neighbours
/// of `t2` with `t4` as its successor. The direction is switched after a sweep without moves and
/// the search stops when sweeps in both directions make no change.
pub(super) fn improve(context: &mut HeuristicContext<'_>) -> RunOutcome {
    let size = context.state.tour_size();
    let start = context.state.position(context.state.start_city());
    let mut is_backward = false;
    let mut idle_sweeps = 0;

    while idle_sweeps < 2 {
        let mut is_changed = false;
        let mut position = start;

        loop {
            if context.is_stopped() {
                return RunOutcome::Cancelled;
            }

            match find_move(context.state, position, is_backward) {
                Some(TwoOptMove { t1, t2, t3, t4, delta }) => {
                    let state = &mut *context.state;
                    state.reverse_segment(state.position(t2), state.position(t3));
                    state.add_tour_length(delta);
                    is_changed = true;

                    show_move(context, &[(t1, t3), (t2, t4)]);
                }
                None => {
                    position = (position + 1) % size;
                    if position == start {
                        break;
                    }
                }
            }
        }

        if is_changed {
            idle_sweeps = 0;
        } else {
            idle_sweeps += 1;
            is_backward = !is_backward;
        }
    }

    RunOutcome::Completed
}

fn find_move(state: &InstanceState, position: usize, is_backward: bool) -> Option<TwoOptMove> {
    let t1 = state.tour()[position];
    let t2 = state.successor(t1);
    let d12 = state.distance(t1, t2);

    state.neighbours(t2).iter().take_while(|neighbour| neighbour.distance < d12).find_map(|neighbour| {
        let (t3, t4) = if is_backward {
            (neighbour.city, state.successor(neighbour.city))
        } else {
            (state.predecessor(neighbour.city), neighbour.city)
        };

        if t4 == t1 || t3 == t2 {
            return None;
        }

        let delta = state.distance(t2, t4) + state.distance(t1, t3) - d12 - state.distance(t3, t4);

        (delta < -IMPROVEMENT_EPSILON).then_some(TwoOptMove { t1, t2, t3, t4, delta })
    })
}
