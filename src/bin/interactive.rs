use eight_puzzle::board::Board;
use eight_puzzle::heuristics::Strategy;
use eight_puzzle::solver::{run_timed_search, trace_line};
use eight_puzzle::utils::{board_from_str, init_logging};
use std::io::{self, BufRead, Write};
use tracing::warn;

const DEFAULT_PUZZLE: Board = Board::new([0, 7, 2, 4, 6, 1, 3, 5, 8]);

/// Prints `message` and reads one trimmed line. `None` on end of input.
fn prompt(input: &mut impl BufRead, message: &str) -> Option<String> {
    println!("{}", message);
    let _ = io::stdout().flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(e) => {
            warn!(error = %e, "failed to read input");
            None
        }
    }
}

fn read_board(input: &mut impl BufRead) -> Option<Board> {
    loop {
        let choice = prompt(
            input,
            "Type \"1\" to use a default puzzle or \"2\" to enter your own puzzle.",
        )?;
        match choice.as_str() {
            "1" => return Some(DEFAULT_PUZZLE),
            "2" => loop {
                let line = prompt(
                    input,
                    "Enter a puzzle from left to right, top to bottom, using 0 for the blank tile \
                     and including spaces in between tiles. Ex: \"1 2 3 4 5 6 7 8 0\".",
                )?;
                match board_from_str(&line) {
                    Ok(board) => return Some(board),
                    Err(e) => println!("Invalid puzzle: {}. Please try again.", e),
                }
            },
            _ => println!("Invalid choice. Please type \"1\" or \"2\"."),
        }
    }
}

fn read_strategy(input: &mut impl BufRead) -> Option<Strategy> {
    loop {
        let choice = prompt(
            input,
            "Enter your choice of algorithm: \"1\" for Uniform Cost, \"2\" for A* - Misplaced Tile, \
             or \"3\" for A* - Manhattan.",
        )?;
        match Strategy::from_menu_choice(&choice) {
            Some(strategy) => return Some(strategy),
            None => println!("Invalid choice. Please type \"1\", \"2\" or \"3\"."),
        }
    }
}

fn read_trace(input: &mut impl BufRead) -> Option<bool> {
    loop {
        let choice = prompt(
            input,
            "Would you like to display a trace of the algorithm? \"1\" for YES and \"2\" for NO",
        )?;
        match choice.as_str() {
            "1" => return Some(true),
            "2" => return Some(false),
            _ => println!("Invalid choice. Please type \"1\" or \"2\"."),
        }
    }
}

fn main() {
    init_logging();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let Some(board) = read_board(&mut input) else {
        return;
    };
    let Some(strategy) = read_strategy(&mut input) else {
        return;
    };
    let Some(trace) = read_trace(&mut input) else {
        return;
    };

    if !board.is_solvable() {
        warn!(%board, "board has odd inversion parity; the search will exhaust its component");
    }

    println!("Using initial board: {}", board);
    let mut print_trace = |b: &Board, g: u32, h: u32| println!("{}", trace_line(b, g, h));
    let sink = if trace {
        Some(&mut print_trace as &mut dyn FnMut(&Board, u32, u32))
    } else {
        None
    };
    let outcome = run_timed_search(board, strategy, sink);
    println!("{}", outcome);
}
