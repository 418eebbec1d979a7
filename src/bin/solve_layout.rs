//! Headless solver for text layouts
//!
//! Reads a layout file (see `astar_viz::layout`), runs A* from `S` to `E`
//! and prints the solved grid. Exit code 0 when a path exists, 1 when it
//! does not, 2 on usage or input errors.

use astar_viz::{grid_to_string, parse_layout, AppState, SearchOutcome, Step};
use std::env;
use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <layout.txt> [--trace]", args[0]);
        eprintln!("Solves a grid layout with A* and prints the result");
        return ExitCode::from(2);
    }
    let trace = args.iter().skip(2).any(|arg| arg == "--trace");

    match solve(&args[1], trace) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn solve(path: &str, trace: bool) -> Result<bool, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    let layout = parse_layout(&text)?;
    let size = layout.grid.size();

    println!("=== Layout: {} ({}x{}) ===", path, size, size);
    let mut state = AppState::from_layout(layout);
    if !state.begin_search()? {
        return Err("layout needs exactly one S and one E cell".into());
    }

    let mut pops = 0;
    let outcome = state.run_to_completion(|_, step| {
        if let Step::Expanded { cell, f_score } = step {
            pops += 1;
            if trace {
                println!("[{:5}] expand ({},{}) f={}", pops, cell.row, cell.col, f_score);
            }
        }
    })?;

    print!("\n{}", grid_to_string(&state.grid));
    println!("\n=== Summary ===");
    println!("Cells expanded: {}", pops);

    match outcome {
        Some(SearchOutcome::Found(path)) => {
            println!("Path length: {}", path.len());
            let cells: Vec<String> = path
                .iter()
                .map(|coord| format!("({},{})", coord.row, coord.col))
                .collect();
            println!("Path: {}", cells.join(" -> "));
            Ok(true)
        }
        Some(SearchOutcome::NotFound) | None => {
            println!("No path");
            Ok(false)
        }
    }
}
