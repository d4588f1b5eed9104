use crate::state::State;

#[derive(Clone, Debug, Eq, PartialEq, Hash, Copy)]
pub enum Rotates {
    /// `n` times `ra`/`rb`: the node at position `n` reaches the top.
    Forward(usize),
    /// `n` times `rra`/`rrb`: the node at position `len - n` reaches the top.
    Reverse(usize),
}

impl std::cmp::PartialOrd for Rotates {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for Rotates {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.count().cmp(&other.count())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    A,
    B,
}

impl Rotates {
    pub fn count(self) -> usize {
        let (Self::Forward(n) | Self::Reverse(n)) = self;
        n
    }

    /// The same end state reached by turning the other way round.
    pub fn flip(self, len: usize) -> Self {
        match self {
            Self::Reverse(r) => Self::Forward((len - r) % len.max(1)),
            Self::Forward(f) => Self::Reverse((len - f) % len.max(1)),
        }
    }

    /// Cheapest way to bring `position` to the top of a stack of `len` nodes.
    pub fn shortest(position: usize, len: usize) -> Self {
        let forward = Self::Forward(position);
        forward.min(forward.flip(len))
    }

    fn same_direction(self, other: Self) -> bool {
        std::mem::discriminant(&self) == std::mem::discriminant(&other)
    }

    pub fn action(self, state: &mut State, side: Side) {
        let func = match (self, side) {
            (Self::Forward(_), Side::A) => State::ra,
            (Self::Forward(_), Side::B) => State::rb,
            (Self::Reverse(_), Side::A) => State::rra,
            (Self::Reverse(_), Side::B) => State::rrb,
        };
        for _ in 0..self.count() {
            func(state);
        }
    }
}

/// Rotations of both stacks that bring a pair of positions to their tops.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Plan {
    pub a: Rotates,
    pub b: Rotates,
}

impl Plan {
    /// Cheapest of the four direction combinations. Shared directions come
    /// first so they win ties.
    pub fn cheapest(position_a: usize, len_a: usize, position_b: usize, len_b: usize) -> Self {
        let fa = Rotates::Forward(position_a);
        let fb = Rotates::Forward(position_b);
        let (ra, rb) = (fa.flip(len_a), fb.flip(len_b));
        [
            Plan { a: fa, b: fb },
            Plan { a: ra, b: rb },
            Plan { a: fa, b: rb },
            Plan { a: ra, b: fb },
        ]
        .into_iter()
        .min_by_key(Plan::cost)
        .unwrap_or(Plan { a: fa, b: fb })
    }

    /// Instructions needed, counting each `rr`/`rrr` once.
    pub fn cost(&self) -> usize {
        if self.a.same_direction(self.b) {
            self.a.count().max(self.b.count())
        } else {
            self.a.count() + self.b.count()
        }
    }

    pub fn execute(self, state: &mut State) {
        let (a, b) = (self.a.count(), self.b.count());
        if self.a.same_direction(self.b) {
            let both = match self.a {
                Rotates::Forward(_) => State::rr,
                Rotates::Reverse(_) => State::rrr,
            };
            for _ in 0..(a.min(b)) {
                both(state);
            }
            if a < b {
                with_count(self.b, b - a).action(state, Side::B);
            } else {
                with_count(self.a, a - b).action(state, Side::A);
            }
        } else {
            self.a.action(state, Side::A);
            self.b.action(state, Side::B);
        }
    }
}

fn with_count(r: Rotates, n: usize) -> Rotates {
    match r {
        Rotates::Forward(_) => Rotates::Forward(n),
        Rotates::Reverse(_) => Rotates::Reverse(n),
    }
}
