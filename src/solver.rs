use crate::config::SolverConfig;
use crate::error::Result;
use crate::large::sort_large;
use crate::moves::Move;
use crate::small::sort_small;
use crate::stack::Stack;
use crate::state::State;

/// Inputs up to this size use the fixed small-case sequences.
const SMALL_LIMIT: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Sorts `values` and returns the final state. Nothing is executed when
    /// the values repeat.
    pub fn run(&self, values: &[i32]) -> Result<State> {
        let mut state = State::new(Stack::from_values(values)?).recording(self.config.record);
        if state.a.is_sorted() {
            tracing::debug!(len = values.len(), "already sorted");
            return Ok(state);
        }

        if values.len() <= SMALL_LIMIT {
            tracing::debug!(len = values.len(), "small case");
            sort_small(&mut state);
        } else {
            tracing::debug!(len = values.len(), "large case");
            sort_large(&mut state, &self.config);
        }
        debug_assert!(state.is_solved());
        tracing::debug!(count = state.count(), "solved");
        Ok(state)
    }

    pub fn solve(&self, values: &[i32]) -> Result<Vec<Move>> {
        self.run(values).map(State::into_moves)
    }
}

/// Instructions sorting `values` with the default configuration.
pub fn solve(values: &[i32]) -> Result<Vec<Move>> {
    Solver::default().solve(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_and_single_need_nothing() {
        assert_eq!(solve(&[]), Ok(vec![]));
        assert_eq!(solve(&[42]), Ok(vec![]));
    }

    #[test]
    fn sorted_needs_nothing() {
        assert_eq!(solve(&[1, 2, 3, 4]), Ok(vec![]));
        assert_eq!(solve(&(0..300).collect::<Vec<_>>()), Ok(vec![]));
    }

    #[test]
    fn duplicates_are_refused() {
        assert_eq!(solve(&[1, 2, 2]), Err(Error::Duplicate { value: 2 }));
    }

    #[test]
    fn counting_only() {
        let solver = Solver::new(SolverConfig::default().with_record(false));
        let state = solver.run(&[9, 8, 7, 6, 5, 4, 3, 2, 1, 0]).unwrap();
        assert!(state.is_solved());
        assert!(state.count() > 0);
        assert!(state.moves().is_empty());
    }
}
