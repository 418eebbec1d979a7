pub mod action_log;
pub mod app;
pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod layout;
pub mod search;

pub use app::AppState;
pub use cell::{Cell, CellState, Coord};
pub use error::{ConfigError, GridError, LayoutError};
pub use grid::Grid;
pub use layout::{grid_to_string, parse_layout, Layout};
pub use search::{heuristic, run, Search, SearchOutcome, Step};
