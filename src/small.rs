//! Fixed sequences for stacks of at most five nodes.

use crate::state::State;

pub fn sort_small(state: &mut State) {
    match state.a.len() {
        0 | 1 => {}
        2 => sort_two(state),
        3 => sort_three(state),
        4 => sort_four(state),
        _ => sort_five(state),
    }
}

fn top_two_inverted(state: &State) -> bool {
    match (state.a.get(0), state.a.get(1)) {
        (Some(first), Some(second)) => first.rank > second.rank,
        _ => false,
    }
}

pub fn sort_two(state: &mut State) {
    if top_two_inverted(state) {
        state.sa();
    }
}

/// Sorts exactly three nodes of A: the largest goes to the bottom, then the
/// remaining two are ordered.
pub fn sort_three(state: &mut State) {
    if state.a.len() != 3 {
        return;
    }
    match state.a.position_of_max() {
        Some(0) => state.ra(),
        Some(1) => state.rra(),
        _ => {}
    }
    sort_two(state);
}

/// Brings the minimum of A to the top with the fewest moves for a stack of
/// four or five nodes.
fn min_to_top(state: &mut State) {
    let len = state.a.len();
    match (state.a.position_of_min(), len) {
        (Some(1), _) => state.sa(),
        (Some(2), 5) => {
            state.ra();
            state.ra();
        }
        (Some(2), 4) | (Some(3), 5) => {
            state.rra();
            state.rra();
        }
        (Some(3), 4) | (Some(4), 5) => state.rra(),
        _ => {}
    }
}

pub fn sort_four(state: &mut State) {
    if state.a.len() != 4 {
        return;
    }
    min_to_top(state);
    state.pb();
    sort_three(state);
    state.pa();
}

pub fn sort_five(state: &mut State) {
    if state.a.len() != 5 {
        return;
    }
    min_to_top(state);
    state.pb();
    min_to_top(state);
    state.pb();
    sort_three(state);
    state.pa();
    state.pa();
}
