use crate::cell::Coord;
use crate::error::GridError;
use crate::grid::Grid;
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Manhattan distance, admissible and consistent on a 4-connected unit-cost grid
pub fn heuristic(from: Coord, to: Coord) -> u32 {
    from.manhattan(&to)
}

/// An entry in the open queue
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    f_score: u32,
    /// Insertion counter, breaks ties first-in first-out
    order: u64,
    coord: Coord,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f_score == other.f_score && self.order == other.order
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other
            .f_score
            .cmp(&self.f_score)
            .then_with(|| other.order.cmp(&self.order))
    }
}

/// Final result of a search run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Path cells from the first step after start up to and including end
    Found(Vec<Coord>),
    NotFound,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// Number of moves from start to end, zero when no path exists
    pub fn path_length(&self) -> usize {
        match self {
            SearchOutcome::Found(path) => path.len(),
            SearchOutcome::NotFound => 0,
        }
    }
}

/// What a single call to `Search::step` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A cell was popped, its neighbors relaxed and the cell closed
    Expanded { cell: Coord, f_score: u32 },
    /// The search is over; repeated calls keep returning this
    Finished(SearchOutcome),
}

/// Incremental A* run over a grid whose neighbors are already computed.
///
/// Each `step` pops one live queue entry so a caller can redraw between
/// steps. The grid is borrowed per step, which leaves the caller free to
/// render it in between.
pub struct Search {
    start: Coord,
    end: Coord,
    queue: BinaryHeap<QueueEntry>,
    counter: u64,
    g_scores: HashMap<Coord, u32>,
    came_from: HashMap<Coord, Coord>,
    queued: HashSet<Coord>,
    expanded: usize,
    outcome: Option<SearchOutcome>,
}

impl Search {
    /// Prepare a run from `start` to `end`. Both must lie inside `grid`.
    pub fn new(grid: &Grid, start: Coord, end: Coord) -> Result<Self, GridError> {
        grid.cell_at(start)?;
        grid.cell_at(end)?;

        let mut g_scores = HashMap::new();
        g_scores.insert(start, 0);

        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry {
            f_score: heuristic(start, end),
            order: 0,
            coord: start,
        });

        let mut queued = HashSet::new();
        queued.insert(start);

        debug!(
            "[search] start=({},{}) end=({},{}) h={}",
            start.row,
            start.col,
            end.row,
            end.col,
            heuristic(start, end)
        );

        Ok(Search {
            start,
            end,
            queue,
            counter: 0,
            g_scores,
            came_from: HashMap::new(),
            queued,
            expanded: 0,
            outcome: None,
        })
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    /// Number of cells expanded so far
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Best known cost from start, `None` meaning unreached
    pub fn g_score(&self, coord: Coord) -> Option<u32> {
        self.g_scores.get(&coord).copied()
    }

    /// Advance the search by one queue pop
    pub fn step(&mut self, grid: &mut Grid) -> Result<Step, GridError> {
        if let Some(outcome) = &self.outcome {
            return Ok(Step::Finished(outcome.clone()));
        }

        let Some(entry) = self.pop_live() else {
            debug!("[search] queue exhausted after {} expansions, no path", self.expanded);
            self.outcome = Some(SearchOutcome::NotFound);
            return Ok(Step::Finished(SearchOutcome::NotFound));
        };
        let current = entry.coord;

        if current == self.end {
            let path = self.reconstruct_path(grid)?;
            debug!(
                "[search] reached end after {} expansions, path length {}",
                self.expanded,
                path.len()
            );
            let outcome = SearchOutcome::Found(path);
            self.outcome = Some(outcome.clone());
            return Ok(Step::Finished(outcome));
        }

        let current_g = self.g_scores.get(&current).copied().unwrap_or(u32::MAX);
        let neighbors = grid.neighbors(current)?.to_vec();
        for neighbor in neighbors {
            let candidate = current_g.saturating_add(1);
            let known = self.g_scores.get(&neighbor).copied().unwrap_or(u32::MAX);
            if candidate >= known {
                continue;
            }

            self.g_scores.insert(neighbor, candidate);
            self.came_from.insert(neighbor, current);
            let f_score = candidate + heuristic(neighbor, self.end);

            let already_queued = self.queued.contains(&neighbor);
            // A queued cell with a better cost gets a fresh entry; the old one is dropped on pop
            self.push(neighbor, f_score);
            if !already_queued {
                self.queued.insert(neighbor);
                if !grid.state(neighbor)?.is_role() {
                    grid.make_open(neighbor)?;
                }
            }
        }

        if current != self.start {
            grid.make_closed(current)?;
        }
        self.expanded += 1;

        trace!(
            "[search] expanded ({},{}) g={} f={} queue={}",
            current.row,
            current.col,
            current_g,
            entry.f_score,
            self.queue.len()
        );

        Ok(Step::Expanded {
            cell: current,
            f_score: entry.f_score,
        })
    }

    fn push(&mut self, coord: Coord, f_score: u32) {
        self.counter += 1;
        self.queue.push(QueueEntry {
            f_score,
            order: self.counter,
            coord,
        });
    }

    /// Pop the next entry whose key still matches the cell's best cost
    fn pop_live(&mut self) -> Option<QueueEntry> {
        while let Some(entry) = self.queue.pop() {
            let g = self.g_scores.get(&entry.coord).copied().unwrap_or(u32::MAX);
            if entry.f_score != g.saturating_add(heuristic(entry.coord, self.end)) {
                continue;
            }
            self.queued.remove(&entry.coord);
            return Some(entry);
        }
        None
    }

    /// Walk predecessors from end back to start, marking path cells
    fn reconstruct_path(&self, grid: &mut Grid) -> Result<Vec<Coord>, GridError> {
        if self.end == self.start {
            grid.make_start(self.start)?;
            return Ok(Vec::new());
        }

        let mut path = vec![self.end];
        let mut current = self.end;
        while let Some(&previous) = self.came_from.get(&current) {
            if previous == self.start {
                break;
            }
            grid.make_path(previous)?;
            path.push(previous);
            current = previous;
        }
        path.reverse();

        grid.make_start(self.start)?;
        grid.make_end(self.end)?;
        Ok(path)
    }
}

/// Run a whole search, calling `on_step` after every expansion.
///
/// Returns `true` when a path was found. Pass a no-op closure for
/// non-visual use.
pub fn run<F>(grid: &mut Grid, start: Coord, end: Coord, mut on_step: F) -> Result<bool, GridError>
where
    F: FnMut(&Grid, &Step),
{
    let mut search = Search::new(grid, start, end)?;
    loop {
        let step = search.step(grid)?;
        on_step(grid, &step);
        if let Step::Finished(outcome) = step {
            return Ok(outcome.is_found());
        }
    }
}
