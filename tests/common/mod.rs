#![allow(dead_code)]

use astar_viz::{parse_layout, run, CellState, Coord, Grid, Layout, Step};
use std::fs;
use std::path::Path;

/// Parse an inline layout, panicking on malformed test input
pub fn layout(text: &str) -> Layout {
    parse_layout(text).unwrap_or_else(|e| panic!("bad test layout: {}", e))
}

/// Load a layout fixture from disk
pub fn load_layout(path: &Path) -> Result<Layout, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    Ok(parse_layout(&contents)?)
}

/// Result of a complete run
pub struct Solved {
    pub found: bool,
    pub path: Vec<Coord>,
    pub popped_scores: Vec<u32>,
    pub grid: Grid,
}

/// Compute neighbors and run A* on `grid` from `start` to `end`
pub fn solve(mut grid: Grid, start: Coord, end: Coord) -> Solved {
    grid.compute_neighbors();

    let mut popped_scores = Vec::new();
    let mut path = Vec::new();
    let found = run(&mut grid, start, end, |_, step| match step {
        Step::Expanded { f_score, .. } => popped_scores.push(*f_score),
        Step::Finished(outcome) => {
            if let astar_viz::SearchOutcome::Found(cells) = outcome {
                path = cells.clone();
            }
        }
    })
    .expect("endpoints inside grid");

    Solved {
        found,
        path,
        popped_scores,
        grid,
    }
}

/// Solve a parsed layout that contains both S and E
pub fn solve_layout(layout: Layout) -> Solved {
    let start = layout.start.expect("layout has a start");
    let end = layout.end.expect("layout has an end");
    solve(layout.grid, start, end)
}

/// Assert the path is a chain of adjacent, non-barrier cells from start to end
pub fn assert_path_valid(solved: &Solved, start: Coord, end: Coord) {
    assert_eq!(solved.path.last(), Some(&end), "path must finish at end");
    assert!(!solved.path.contains(&start), "path must exclude start");

    let mut previous = start;
    for &coord in &solved.path {
        assert!(
            previous.is_adjacent(&coord),
            "({},{}) -> ({},{}) is not a single orthogonal move",
            previous.row,
            previous.col,
            coord.row,
            coord.col
        );
        assert_ne!(solved.grid.state(coord).unwrap(), CellState::Barrier);
        previous = coord;
    }
}

/// Mirror a layout left-right
pub fn flip_horizontal(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.trim().chars().rev().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Mirror a layout top-bottom
pub fn flip_vertical(text: &str) -> String {
    let mut rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    rows.reverse();
    rows.join("\n")
}
