use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use tile_slider::{input, Outcome, SolverError, Solver, Variant};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run(env::args().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> Result<(), SolverError> {
    let [board_path, variant_name] = args.as_slice() else {
        return Err(SolverError::InvalidArgumentCount(args.len()));
    };

    let board = input::read_board(board_path)?;
    let variant: Variant = variant_name
        .parse()
        .map_err(|_| SolverError::UnknownVariant(variant_name.clone()))?;

    print!("Start state: \n{}", board);
    println!("Solving...");

    match Solver::new(variant).solve(&board)? {
        Outcome::Solved(solution) => {
            println!("Solution found in {} moves:\n{}", solution.len(), solution.path);
        }
        Outcome::Unsolvable => println!("Inf"),
        Outcome::Aborted { reason, expanded } => {
            println!("Search aborted after {} states: {}", expanded, reason);
        }
    }
    Ok(())
}
