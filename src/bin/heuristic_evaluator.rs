use clap::Parser;
use eight_puzzle::board::Board;
use eight_puzzle::heuristics::Strategy;
use eight_puzzle::solver::{run_timed_search, SearchResult};
use eight_puzzle::utils::init_logging;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compare search strategies over seeded random boards", long_about = None)]
struct Args {
    /// Number of random boards to evaluate
    #[clap(short, long, default_value_t = 20)]
    boards: usize,

    /// Seed of the first board; board i uses seed + i
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Build each board with this many random moves from the goal instead of a full shuffle
    #[clap(long)]
    scramble: Option<usize>,
}

/// Per-strategy totals across all evaluated boards.
#[derive(Default)]
struct Totals {
    expanded: usize,
    max_frontier: usize,
    elapsed: Duration,
    solved: usize,
}

fn main() {
    init_logging();
    let args = Args::parse();

    let mut all_totals: HashMap<Strategy, Totals> = HashMap::new();
    println!("Starting heuristic evaluation for {} boards...", args.boards);

    for board_idx in 0..args.boards {
        let current_seed = args.seed + board_idx as u64;
        let initial_board = match args.scramble {
            Some(steps) => Board::scrambled(current_seed, steps),
            None => Board::random_with_seed(current_seed),
        };

        println!(
            "\nEvaluating Board {} (Seed: {}): {}",
            board_idx, current_seed, initial_board
        );

        let mut depths = Vec::new();
        for strategy in Strategy::ALL {
            let outcome = run_timed_search(initial_board, strategy, None);
            let result = outcome.result;
            let totals = all_totals.entry(strategy).or_default();
            totals.expanded += result.expanded_count();
            totals.elapsed += outcome.elapsed;
            if let SearchResult::Succeeded {
                max_frontier_size, ..
            } = result
            {
                totals.max_frontier += max_frontier_size;
                totals.solved += 1;
            }
            depths.push(result.depth());

            println!(
                "  Strategy: {:<20}, Depth: {:<4}, Expanded: {:<8}, Time: {:.3}s",
                strategy.label(),
                result
                    .depth()
                    .map_or_else(|| "-".to_string(), |d| d.to_string()),
                result.expanded_count(),
                outcome.elapsed.as_secs_f64()
            );
        }

        if depths.windows(2).any(|w| w[0] != w[1]) {
            error!(board = %initial_board, ?depths, "strategies disagree on solution depth");
        } else {
            info!(board_idx, depth = ?depths.first(), "strategies agree");
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of boards evaluated: {}", args.boards);
    println!("\n--- Average Expansions ---");

    let mut sorted_averages: Vec<(Strategy, f64, f64, f64)> = Vec::new();
    for strategy in Strategy::ALL {
        let Some(totals) = all_totals.get(&strategy) else {
            println!("Strategy {}: No results recorded.", strategy.label());
            continue;
        };
        let runs = args.boards.max(1) as f64;
        let avg_frontier = if totals.solved == 0 {
            0.0
        } else {
            totals.max_frontier as f64 / totals.solved as f64
        };
        sorted_averages.push((
            strategy,
            totals.expanded as f64 / runs,
            avg_frontier,
            totals.elapsed.as_secs_f64() / runs,
        ));
    }

    // Fewest expansions first
    sorted_averages.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    for (strategy, avg_expanded, avg_frontier, avg_secs) in sorted_averages {
        println!(
            "Strategy {:<20}: Expanded = {:.1}, Max Queue = {:.1}, Time = {:.4}s",
            strategy.label(),
            avg_expanded,
            avg_frontier,
            avg_secs
        );
    }
}
