use clap::Parser;
use eight_puzzle::board::Board;
use eight_puzzle::heuristics::Strategy;
use eight_puzzle::solver::{run_timed_search, trace_line};
use eight_puzzle::utils::{board_from_str, init_logging};
use std::process::ExitCode;
use tracing::warn;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Solve an 8-puzzle with uniform-cost or A* search", long_about = None)]
struct Args {
    /// Initial board, left to right, top to bottom, 0 for the blank
    #[clap(short, long, default_value = "0 7 2 4 6 1 3 5 8")]
    board: String,

    /// Evaluation strategy
    #[clap(short, long, value_enum, default_value_t = Strategy::Manhattan)]
    strategy: Strategy,

    /// Run every strategy on the same board (overrides --strategy)
    #[clap(short, long)]
    all: bool,

    /// Print each state as it is expanded
    #[clap(short, long)]
    trace: bool,
}

fn solve_and_report(board: Board, strategy: Strategy, trace: bool) {
    println!("Algorithm: {}", strategy.label());
    println!("Using initial board: {}", board);

    let mut print_trace = |b: &Board, g: u32, h: u32| println!("{}", trace_line(b, g, h));
    let sink = if trace {
        Some(&mut print_trace as &mut dyn FnMut(&Board, u32, u32))
    } else {
        None
    };

    let outcome = run_timed_search(board, strategy, sink);
    println!("{}\n", outcome);
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    let board = match board_from_str(&args.board) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Invalid board '{}': {}", args.board, e);
            return ExitCode::from(2);
        }
    };

    if !board.is_solvable() {
        warn!(%board, "board has odd inversion parity; the search will exhaust its component");
    }

    let strategies: Vec<Strategy> = if args.all {
        Strategy::ALL.to_vec()
    } else {
        vec![args.strategy]
    };

    for strategy in strategies {
        solve_and_report(board, strategy, args.trace);
    }
    ExitCode::SUCCESS
}
