//! Cost driven solver for more than five nodes.
//!
//! Nodes leave A for B one rank band at a time until only the three largest
//! remain. Those are sorted, then B is drained back by always pushing the
//! node that is cheapest to put in place. A last rotation brings the minimum
//! of A to the top.

use itertools::Itertools;

use crate::config::SolverConfig;
use crate::rotation::{Plan, Rotates, Side};
use crate::small::sort_three;
use crate::state::State;

/// Nodes that never leave A.
const KEEP_IN_A: usize = 3;

/// Where a node of B would go and what it costs to get it there.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Placement {
    pub position: usize,
    pub target_position: usize,
    pub cost_to_a: usize,
    pub cost_to_b: usize,
    pub plan: Plan,
}

impl Placement {
    fn key(&self) -> (usize, usize) {
        (self.plan.cost(), self.cost_to_a + self.cost_to_b)
    }
}

pub fn sort_large(state: &mut State, config: &SolverConfig) {
    let len = state.a.len();
    if len <= KEEP_IN_A {
        return;
    }
    let bands = config.band_count(len);
    push_bands(state, bands);
    tracing::debug!(
        bands,
        pushed = state.b.len(),
        count = state.count(),
        "bands moved to b"
    );

    sort_three(state);
    drain(state);
    tracing::debug!(count = state.count(), "b drained");

    align(state);
}

/// Moves every rank below `len - 3` to B, lowest band first.
fn push_bands(state: &mut State, bands: usize) {
    let to_push = state.a.len().saturating_sub(KEEP_IN_A);
    let band = to_push.div_ceil(bands.max(1)).max(1);
    let mut limit = band.min(to_push);
    let mut pushed = 0;
    while pushed < to_push {
        let Some(top) = state.a.top() else {
            break;
        };
        if top.rank < limit {
            state.pb();
            pushed += 1;
            if pushed == limit {
                limit = (limit + band).min(to_push);
            }
        } else {
            state.ra();
        }
    }
}

fn drain(state: &mut State) {
    while let Some(cheapest) = cheapest(state) {
        tracing::trace!(
            position = cheapest.position,
            target = cheapest.target_position,
            cost = cheapest.plan.cost(),
            "placing"
        );
        cheapest.plan.execute(state);
        state.pa();
    }
}

/// Placements of every node of B against the current A, which must hold
/// a rotated ascending sequence.
pub fn placements(state: &State) -> Vec<Placement> {
    let (len_a, len_b) = (state.a.len(), state.b.len());
    if len_a == 0 {
        return Vec::new();
    }
    let by_rank = state
        .a
        .iter()
        .enumerate()
        .map(|(position, node)| (node.rank, position))
        .sorted_unstable()
        .collect::<Vec<_>>();

    state
        .b
        .iter()
        .enumerate()
        .map(|(position, node)| {
            let smaller = by_rank.partition_point(|&(rank, _)| rank < node.rank);
            let target_position = by_rank[smaller % len_a].1;
            Placement {
                position,
                target_position,
                cost_to_a: Rotates::shortest(target_position, len_a).count(),
                cost_to_b: Rotates::shortest(position, len_b).count(),
                plan: Plan::cheapest(target_position, len_a, position, len_b),
            }
        })
        .collect()
}

pub fn cheapest(state: &State) -> Option<Placement> {
    placements(state).into_iter().min_by_key(Placement::key)
}

fn align(state: &mut State) {
    if let Some(position) = state.a.position_of_min() {
        Rotates::shortest(position, state.a.len()).action(state, Side::A);
    }
}
