use std::collections::HashSet;
use std::num::NonZeroUsize;

use clap::Parser;
use push_swap::{checker, Solver, SolverConfig};
use rand::prelude::*;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use statrs::statistics::{Distribution, *};

/// Solves many random inputs and prints instruction count statistics.
#[derive(Parser, Debug)]
#[command(name = "bench")]
struct Args {
    /// Number of integers per input
    #[arg(default_value_t = 64, value_parser = clap::value_parser!(u32).range(2..))]
    size: u32,
    /// Number of inputs to solve
    #[arg(default_value_t = 1024, value_parser = clap::value_parser!(u32).range(1..))]
    iterations: u32,
    /// Rank bands used while moving nodes to stack b
    #[arg(long)]
    bands: Option<NonZeroUsize>,
}

fn random_items(size: usize) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    let mut items = HashSet::with_capacity(size);
    while items.len() < size {
        items.insert(rng.gen::<i32>());
    }
    items.into_iter().collect()
}

fn run_with_items(solver: &Solver, items: &[i32]) -> anyhow::Result<usize> {
    let state = solver.run(items)?;
    let moves = state.moves().iter().copied();
    anyhow::ensure!(
        checker::check(items, moves)?,
        "sequence left {items:?} unsorted"
    );
    Ok(state.count())
}

fn main() -> anyhow::Result<()> {
    push_swap::init_logging();
    let args = Args::parse();
    let solver = Solver::new(SolverConfig::default().with_bands(args.bands));

    let results = (0..args.iterations)
        .into_par_iter()
        .map(|_| run_with_items(&solver, &random_items(args.size as usize)))
        .collect::<Vec<_>>();

    if let Some(Err(e)) = results.iter().find(|r| r.is_err()) {
        println!("There has been a sequence that didn't sort correctly !");
        return Err(anyhow::anyhow!("{e}"));
    }

    let data = Data::new(
        results
            .into_iter()
            .flatten()
            .map(|count| count as f64)
            .collect::<Vec<_>>(),
    );
    println!(
        "Ran {} test with {} sized inputs",
        args.iterations, args.size
    );
    println!("========================================");
    println!("Mean   \t=> {}", data.mean().unwrap_or_default());
    println!("Median \t=> {}", data.median());
    println!("StdDev \t=> {}", data.std_dev().unwrap_or_default());
    println!("Min    \t=> {}", data.min());
    println!("Max    \t=> {}", data.max());
    Ok(())
}
