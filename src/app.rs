//! Interaction state: translates clicks and key presses into grid edits and
//! drives one search run at a time.

use crate::action_log::{Action, ActionLog};
use crate::cell::{CellState, Coord};
use crate::error::GridError;
use crate::grid::Grid;
use crate::layout::Layout;
use crate::search::{Search, SearchOutcome, Step};
use log::{debug, info};

/// Application state threaded through the input handler and renderer
pub struct AppState {
    pub grid: Grid,
    start: Option<Coord>,
    end: Option<Coord>,
    search: Option<Search>,
    last_outcome: Option<SearchOutcome>,
    action_log: ActionLog,
}

impl AppState {
    pub fn new(size: usize) -> Self {
        AppState {
            grid: Grid::new(size),
            start: None,
            end: None,
            search: None,
            last_outcome: None,
            action_log: ActionLog::new(),
        }
    }

    /// Build state from a parsed layout, keeping its start and end roles
    pub fn from_layout(layout: Layout) -> Self {
        let mut state = Self::new(layout.grid.size());
        state.grid = layout.grid;
        state.start = layout.start;
        state.end = layout.end;
        state
    }

    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    pub fn end(&self) -> Option<Coord> {
        self.end
    }

    pub fn is_searching(&self) -> bool {
        self.search.is_some()
    }

    /// Outcome of the most recent completed run
    pub fn last_outcome(&self) -> Option<&SearchOutcome> {
        self.last_outcome.as_ref()
    }

    /// Expansions performed by the running search
    pub fn expanded(&self) -> usize {
        self.search.as_ref().map_or(0, Search::expanded)
    }

    /// Progress line shown over the grid while a run is in flight
    pub fn status_text(&self) -> Option<String> {
        self.is_searching()
            .then(|| format!("Searching... {} cells expanded", self.expanded()))
    }

    pub fn action_log(&self) -> &ActionLog {
        &self.action_log
    }

    /// Left click: assign start, then end, then paint barriers.
    ///
    /// Ignored while a search is running.
    pub fn primary_click(&mut self, coord: Coord) -> Result<(), GridError> {
        if self.is_searching() {
            return Ok(());
        }
        self.grid.cell_at(coord)?;

        let is_start = self.start == Some(coord);
        let is_end = self.end == Some(coord);

        if self.start.is_none() && !is_end {
            self.grid.make_start(coord)?;
            self.start = Some(coord);
            self.action_log.log_instant(Action::PlaceStart {
                row: coord.row,
                col: coord.col,
            });
        } else if self.end.is_none() && !is_start {
            self.grid.make_end(coord)?;
            self.end = Some(coord);
            self.action_log.log_instant(Action::PlaceEnd {
                row: coord.row,
                col: coord.col,
            });
        } else if !is_start && !is_end && self.grid.state(coord)? != CellState::Barrier {
            self.grid.make_barrier(coord)?;
            self.action_log.log_instant(Action::PlaceBarrier {
                row: coord.row,
                col: coord.col,
            });
        }
        Ok(())
    }

    /// Right click: erase a cell. Erasing start promotes the end cell.
    ///
    /// Ignored while a search is running.
    pub fn secondary_click(&mut self, coord: Coord) -> Result<(), GridError> {
        if self.is_searching() {
            return Ok(());
        }
        if self.grid.state(coord)? == CellState::Empty {
            return Ok(());
        }

        self.grid.reset_cell(coord)?;
        self.action_log.log_instant(Action::EraseCell {
            row: coord.row,
            col: coord.col,
        });

        if self.start == Some(coord) {
            self.start = self.end.take();
            if let Some(promoted) = self.start {
                self.grid.make_start(promoted)?;
                self.action_log.log_instant(Action::PromoteEnd {
                    row: promoted.row,
                    col: promoted.col,
                });
            }
        } else if self.end == Some(coord) {
            self.end = None;
        }
        Ok(())
    }

    /// Drop every cell and role. Ignored while a search is running.
    pub fn clear(&mut self) {
        if self.is_searching() {
            return;
        }
        self.grid.reset();
        self.start = None;
        self.end = None;
        self.last_outcome = None;
        self.action_log.log_instant(Action::ClearGrid {
            size: self.grid.size(),
        });
        info!("Grid cleared");
    }

    /// Replace the grid with a pasted layout. Ignored while a search is running.
    pub fn load_layout(&mut self, layout: Layout) {
        if self.is_searching() {
            return;
        }
        let size = layout.grid.size();
        self.grid = layout.grid;
        self.start = layout.start;
        self.end = layout.end;
        self.last_outcome = None;
        self.action_log.log_instant(Action::PasteLayout { size });
    }

    /// Record that the layout was copied out
    pub fn note_layout_copied(&mut self) {
        self.action_log.log_instant(Action::CopyLayout {
            size: self.grid.size(),
        });
    }

    /// Launch a run when both endpoints exist and none is in progress.
    ///
    /// Returns whether a run was started.
    pub fn begin_search(&mut self) -> Result<bool, GridError> {
        if self.is_searching() {
            return Ok(false);
        }
        let (Some(start), Some(end)) = (self.start, self.end) else {
            debug!("Search requested without both start and end, ignoring");
            return Ok(false);
        };

        self.grid.clear_search_marks();
        self.grid.compute_neighbors();
        let search = Search::new(&self.grid, start, end)?;

        self.action_log.log_start(run_action(&search, None));
        info!(
            "Searching from ({},{}) to ({},{})",
            start.row, start.col, end.row, end.col
        );
        self.last_outcome = None;
        self.search = Some(search);
        Ok(true)
    }

    /// Advance the running search by at most `max_steps` pops.
    ///
    /// Returns the outcome once the run has finished.
    pub fn advance(&mut self, max_steps: usize) -> Result<Option<SearchOutcome>, GridError> {
        let Some(search) = self.search.as_mut() else {
            return Ok(None);
        };

        for _ in 0..max_steps {
            if let Step::Finished(outcome) = search.step(&mut self.grid)? {
                self.finish_search(outcome.clone());
                return Ok(Some(outcome));
            }
        }
        Ok(None)
    }

    /// Drive the running search to completion, calling `on_step` after each pop
    pub fn run_to_completion<F>(&mut self, mut on_step: F) -> Result<Option<SearchOutcome>, GridError>
    where
        F: FnMut(&Grid, &Step),
    {
        let Some(search) = self.search.as_mut() else {
            return Ok(None);
        };

        loop {
            let step = search.step(&mut self.grid)?;
            on_step(&self.grid, &step);
            if let Step::Finished(outcome) = step {
                self.finish_search(outcome.clone());
                return Ok(Some(outcome));
            }
        }
    }

    fn finish_search(&mut self, outcome: SearchOutcome) {
        if let Some(search) = self.search.take() {
            self.action_log.log_finish(run_action(&search, Some(&outcome)));
            info!(
                "Search finished: found={} path_length={} expanded={}",
                outcome.is_found(),
                outcome.path_length(),
                search.expanded()
            );
        }
        self.last_outcome = Some(outcome);
    }
}

fn run_action(search: &Search, outcome: Option<&SearchOutcome>) -> Action {
    Action::RunSearch {
        start_row: search.start().row,
        start_col: search.start().col,
        end_row: search.end().row,
        end_col: search.end().col,
        found: outcome.is_some_and(SearchOutcome::is_found),
        path_length: outcome.map_or(0, SearchOutcome::path_length),
        expanded: search.expanded(),
    }
}
