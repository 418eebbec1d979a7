//! Plain-text grid layouts.
//!
//! One line per row, one symbol per cell:
//! - `.` empty
//! - `#` barrier
//! - `S` start
//! - `E` end
//! - `o` open
//! - `x` closed
//! - `*` path
//!
//! Blank lines are ignored, as is whitespace around each row.

use crate::cell::{CellState, Coord};
use crate::error::LayoutError;
use crate::grid::Grid;

/// A parsed layout: the grid plus its role cells
#[derive(Debug, Clone)]
pub struct Layout {
    pub grid: Grid,
    pub start: Option<Coord>,
    pub end: Option<Coord>,
}

pub fn symbol_for(state: CellState) -> char {
    match state {
        CellState::Empty => '.',
        CellState::Barrier => '#',
        CellState::Start => 'S',
        CellState::End => 'E',
        CellState::Open => 'o',
        CellState::Closed => 'x',
        CellState::Path => '*',
    }
}

pub fn state_for(symbol: char) -> Option<CellState> {
    match symbol {
        '.' => Some(CellState::Empty),
        '#' => Some(CellState::Barrier),
        'S' => Some(CellState::Start),
        'E' => Some(CellState::End),
        'o' => Some(CellState::Open),
        'x' => Some(CellState::Closed),
        '*' => Some(CellState::Path),
        _ => None,
    }
}

/// Render the grid, one line per row
pub fn grid_to_string(grid: &Grid) -> String {
    if grid.size() == 0 {
        return String::new();
    }

    let mut result = String::with_capacity(grid.size() * (grid.size() + 1));
    for (id, cell) in grid.cells().enumerate() {
        result.push(symbol_for(cell.state));
        if (id + 1) % grid.size() == 0 {
            result.push('\n');
        }
    }
    result
}

/// Parse a square layout
pub fn parse_layout(text: &str) -> Result<Layout, LayoutError> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if rows.is_empty() {
        return Err(LayoutError::Empty);
    }

    let size = rows.len();
    let mut grid = Grid::new(size);
    let mut start = None;
    let mut end = None;

    for (row, line) in rows.iter().enumerate() {
        let found = line.chars().count();
        if found != size {
            return Err(LayoutError::NotSquare {
                row,
                expected: size,
                found,
            });
        }

        for (col, symbol) in line.chars().enumerate() {
            let state = state_for(symbol).ok_or(LayoutError::UnknownSymbol { symbol, row, col })?;
            let coord = Coord::new(row, col);

            let (slot, role) = match state {
                CellState::Start => (&mut start, "start"),
                CellState::End => (&mut end, "end"),
                _ => {
                    grid.set_state(coord, state)?;
                    continue;
                }
            };
            if slot.replace(coord).is_some() {
                return Err(LayoutError::DuplicateRole { role });
            }

            grid.set_state(coord, state)?;
        }
    }

    Ok(Layout { grid, start, end })
}
