//! Sorting integers with two stacks and the push_swap instruction set.
//!
//! ```
//! use push_swap::{solve, Move};
//!
//! assert_eq!(solve(&[2, 1, 3]).unwrap(), [Move::SwapA]);
//! ```

pub mod checker;
pub mod config;
pub mod error;
pub mod input;
pub mod large;
pub mod moves;
pub mod rank;
pub mod rotation;
pub mod small;
pub mod solver;
pub mod stack;
pub mod state;

pub use config::SolverConfig;
pub use error::{Error, Result};
pub use moves::Move;
pub use solver::{solve, Solver};
pub use stack::{Node, Stack};
pub use state::State;

/// Installs the stderr log subscriber shared by the binaries. `RUST_LOG`
/// overrides the default filter.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "push_swap=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
