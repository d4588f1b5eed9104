use clap::Parser;
use push_swap::{checker, input};

/// Reads instructions from stdin and tells whether they sort the integers.
#[derive(Parser, Debug)]
#[command(name = "checker", version)]
struct Args {
    #[arg(allow_hyphen_values = true)]
    numbers: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    push_swap::init_logging();
    let args = Args::parse();
    if args.numbers.is_empty() {
        return Ok(());
    }

    let verdict = input::parse_arguments(&args.numbers).and_then(|values| {
        let moves = checker::parse_moves(std::io::stdin().lock())?;
        tracing::debug!(count = moves.len(), "instructions read");
        checker::check(&values, moves)
    });

    match verdict {
        Ok(true) => println!("OK"),
        Ok(false) => println!("KO"),
        Err(e) => {
            tracing::debug!(%e, "rejected input");
            eprintln!("Error");
            std::process::exit(1);
        }
    }
    Ok(())
}
