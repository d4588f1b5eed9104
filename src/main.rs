use std::io::{BufWriter, Write};
use std::num::NonZeroUsize;

use clap::Parser;
use push_swap::{input, Solver, SolverConfig};

/// Prints the instructions that sort the given integers with two stacks.
#[derive(Parser, Debug)]
#[command(name = "push_swap", version)]
struct Args {
    /// Rank bands used while moving nodes to stack b
    #[arg(long)]
    bands: Option<NonZeroUsize>,
    /// Integers, either as separate arguments or space separated
    #[arg(allow_hyphen_values = true)]
    numbers: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    push_swap::init_logging();
    let args = Args::parse();

    let values = match input::parse_arguments(&args.numbers) {
        Ok(values) => values,
        Err(e) => {
            tracing::debug!(%e, "rejected input");
            eprintln!("Error");
            std::process::exit(1);
        }
    };

    let solver = Solver::new(SolverConfig::default().with_bands(args.bands));
    let moves = solver.solve(&values)?;

    let mut out = BufWriter::new(std::io::stdout().lock());
    for m in &moves {
        writeln!(out, "{m}")?;
    }
    out.flush()?;
    Ok(())
}
