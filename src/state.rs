use crate::moves::Move;
use crate::stack::Stack;

/// The two stacks and everything executed on them so far.
#[derive(Debug, Clone)]
pub struct State {
    pub a: Stack,
    pub b: Stack,
    counts: usize,
    record: bool,
    moves: Vec<Move>,
}

impl State {
    pub fn new(a: Stack) -> Self {
        let capacity = a.len();
        Self {
            a,
            b: Stack::with_capacity(capacity),
            counts: 0,
            record: true,
            moves: Vec::new(),
        }
    }

    /// Whether executed moves are kept. Counting happens either way.
    pub fn recording(mut self, record: bool) -> Self {
        self.record = record;
        self
    }

    pub fn count(&self) -> usize {
        self.counts
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn into_moves(self) -> Vec<Move> {
        self.moves
    }

    pub fn is_solved(&self) -> bool {
        self.b.is_empty() && self.a.is_sorted()
    }

    fn emit(&mut self, changed: bool, m: Move) {
        if !changed {
            return;
        }
        tracing::trace!(%m, a = self.a.len(), b = self.b.len());
        self.counts += 1;
        if self.record {
            self.moves.push(m);
        }
    }

    pub fn apply(&mut self, m: Move) {
        match m {
            Move::PushA => self.pa(),
            Move::PushB => self.pb(),
            Move::RotateA => self.ra(),
            Move::RotateB => self.rb(),
            Move::RotateBoth => self.rr(),
            Move::RevRotateA => self.rra(),
            Move::RevRotateB => self.rrb(),
            Move::RevRotateBoth => self.rrr(),
            Move::SwapA => self.sa(),
            Move::SwapB => self.sb(),
            Move::SwapBoth => self.ss(),
        }
    }

    pub fn sa(&mut self) {
        let changed = self.a.swap_top();
        self.emit(changed, Move::SwapA);
    }

    pub fn sb(&mut self) {
        let changed = self.b.swap_top();
        self.emit(changed, Move::SwapB);
    }

    pub fn ss(&mut self) {
        let changed = self.a.swap_top() | self.b.swap_top();
        self.emit(changed, Move::SwapBoth);
    }

    pub fn pa(&mut self) {
        let node = self.b.pop_front();
        if let Some(node) = node {
            self.a.push_front(node);
        }
        self.emit(node.is_some(), Move::PushA);
    }

    pub fn pb(&mut self) {
        let node = self.a.pop_front();
        if let Some(node) = node {
            self.b.push_front(node);
        }
        self.emit(node.is_some(), Move::PushB);
    }

    pub fn ra(&mut self) {
        let changed = self.a.rotate();
        self.emit(changed, Move::RotateA);
    }

    pub fn rb(&mut self) {
        let changed = self.b.rotate();
        self.emit(changed, Move::RotateB);
    }

    pub fn rr(&mut self) {
        let changed = self.a.rotate() | self.b.rotate();
        self.emit(changed, Move::RotateBoth);
    }

    pub fn rra(&mut self) {
        let changed = self.a.reverse_rotate();
        self.emit(changed, Move::RevRotateA);
    }

    pub fn rrb(&mut self) {
        let changed = self.b.reverse_rotate();
        self.emit(changed, Move::RevRotateB);
    }

    pub fn rrr(&mut self) {
        let changed = self.a.reverse_rotate() | self.b.reverse_rotate();
        self.emit(changed, Move::RevRotateBoth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(values: &[i32]) -> State {
        State::new(Stack::from_values(values).unwrap())
    }

    fn a(state: &State) -> Vec<i32> {
        state.a.values().collect()
    }

    fn b(state: &State) -> Vec<i32> {
        state.b.values().collect()
    }

    #[test]
    fn push_moves_tops_between_stacks() {
        let mut s = state(&[1, 2, 3]);
        s.pb();
        s.pb();
        assert_eq!(a(&s), [3]);
        assert_eq!(b(&s), [2, 1]);
        s.pa();
        assert_eq!(a(&s), [2, 3]);
        assert_eq!(b(&s), [1]);
        assert_eq!(s.moves(), [Move::PushB, Move::PushB, Move::PushA]);
    }

    #[test]
    fn noops_are_not_traced() {
        let mut s = state(&[1]);
        s.pa();
        s.sa();
        s.ra();
        s.rra();
        s.sb();
        s.rr();
        s.rrr();
        s.ss();
        assert_eq!(s.count(), 0);
        assert!(s.moves().is_empty());
    }

    #[test]
    fn combinators_emit_one_entry() {
        let mut s = state(&[1, 2, 3, 4, 5]);
        s.pb();
        s.pb();
        s.rr();
        assert_eq!(a(&s), [4, 5, 3]);
        assert_eq!(b(&s), [1, 2]);
        s.rrr();
        assert_eq!(a(&s), [3, 4, 5]);
        assert_eq!(b(&s), [2, 1]);
        s.ss();
        assert_eq!(a(&s), [4, 3, 5]);
        assert_eq!(b(&s), [1, 2]);
        assert_eq!(
            s.moves(),
            [
                Move::PushB,
                Move::PushB,
                Move::RotateBoth,
                Move::RevRotateBoth,
                Move::SwapBoth
            ]
        );
    }

    #[test]
    fn combinator_with_one_active_side_still_counts() {
        let mut s = state(&[1, 2, 3]);
        s.pb();
        s.rr();
        assert_eq!(a(&s), [3, 2]);
        assert_eq!(s.moves().last(), Some(&Move::RotateBoth));
    }

    #[test]
    fn apply_matches_named_methods() {
        let mut by_name = state(&[4, 2, 9, 1, 7]);
        by_name.pb();
        by_name.ra();
        by_name.sa();
        by_name.rrr();
        let mut replayed = state(&[4, 2, 9, 1, 7]);
        for m in by_name.moves().to_vec() {
            replayed.apply(m);
        }
        assert_eq!(a(&replayed), a(&by_name));
        assert_eq!(b(&replayed), b(&by_name));
    }

    #[test]
    fn counting_without_recording() {
        let mut s = state(&[2, 1]).recording(false);
        s.sa();
        assert!(s.is_solved());
        assert_eq!(s.count(), 1);
        assert!(s.moves().is_empty());
    }
}
