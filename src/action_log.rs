use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Action phase - whether the action is starting or finishing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionPhase {
    Start,
    Finish,
}

/// User actions and search runs that change the grid
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Designate the start cell (row, col)
    PlaceStart { row: usize, col: usize },
    /// Designate the end cell (row, col)
    PlaceEnd { row: usize, col: usize },
    /// Paint a barrier (row, col)
    PlaceBarrier { row: usize, col: usize },
    /// Erase a cell back to empty (row, col)
    EraseCell { row: usize, col: usize },
    /// Start was erased and the end cell took its place (row, col of the new start)
    PromoteEnd { row: usize, col: usize },
    /// Full grid reset
    ClearGrid { size: usize },
    /// Grid layout copied to the clipboard
    CopyLayout { size: usize },
    /// Grid replaced from a clipboard layout
    PasteLayout { size: usize },
    /// One A* run; the finish entry carries the result
    RunSearch {
        start_row: usize,
        start_col: usize,
        end_row: usize,
        end_col: usize,
        found: bool,
        path_length: usize,
        expanded: usize,
    },
}

/// Logged action with timestamp and phase
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggedAction {
    /// Milliseconds since start
    pub timestamp_ms: u64,
    /// The action
    pub action: Action,
    /// Whether this is the start or finish of the action
    pub phase: ActionPhase,
}

/// Action logger
pub struct ActionLog {
    start_time: Instant,
    actions: Vec<LoggedAction>,
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionLog {
    pub fn new() -> Self {
        ActionLog {
            start_time: Instant::now(),
            actions: Vec::new(),
        }
    }

    /// Log an action with current timestamp and phase
    pub fn log(&mut self, action: Action, phase: ActionPhase) {
        let elapsed = self.start_time.elapsed();
        let timestamp_ms = elapsed.as_millis() as u64;

        log::debug!("[action] {:?} {:?}", phase, action);
        self.actions.push(LoggedAction {
            timestamp_ms,
            action,
            phase,
        });
    }

    /// Log an action that completes immediately
    pub fn log_instant(&mut self, action: Action) {
        self.log(action.clone(), ActionPhase::Start);
        self.log(action, ActionPhase::Finish);
    }

    /// Log the start of an action
    pub fn log_start(&mut self, action: Action) {
        self.log(action, ActionPhase::Start);
    }

    /// Log the finish of an action
    pub fn log_finish(&mut self, action: Action) {
        self.log(action, ActionPhase::Finish);
    }

    /// Get all logged actions
    pub fn get_actions(&self) -> &[LoggedAction] {
        &self.actions
    }

    /// Save log to JSON file
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(&self.actions)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Get summary statistics
    pub fn summary(&self) -> String {
        let mut barriers = 0;
        let mut erased = 0;
        let mut clears = 0;
        let mut searches = 0;
        let mut found = 0;
        let mut total_expanded = 0;

        // Only count finish events to get actual completed action counts
        for logged in &self.actions {
            if logged.phase != ActionPhase::Finish {
                continue;
            }
            match &logged.action {
                Action::PlaceBarrier { .. } => barriers += 1,
                Action::EraseCell { .. } => erased += 1,
                Action::ClearGrid { .. } => clears += 1,
                Action::RunSearch {
                    found: success,
                    expanded,
                    ..
                } => {
                    searches += 1;
                    total_expanded += expanded;
                    if *success {
                        found += 1;
                    }
                }
                _ => {}
            }
        }

        let duration = self.actions.last().map_or(0, |last| last.timestamp_ms);

        format!(
            "Session Duration: {}ms\n\
             Total Events: {}\n\
             Grid Edits: {} barriers, {} erased, {} clears\n\
             Searches: {} run, {} found a path ({} cells expanded)",
            duration,
            self.actions.len(),
            barriers,
            erased,
            clears,
            searches,
            found,
            total_expanded
        )
    }
}
