/// A position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Sum of absolute row and column differences
    pub fn manhattan(&self, other: &Coord) -> u32 {
        (self.row.abs_diff(other.row) + self.col.abs_diff(other.col)) as u32
    }

    /// True when the two positions differ by exactly one row or one column
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self.manhattan(other) == 1
    }
}

/// Display/search state of a cell. Exactly one tag applies at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    Barrier,
    Start,
    End,
    /// Discovered and queued, not yet settled
    Open,
    /// Settled by the search
    Closed,
    Path,
}

impl CellState {
    /// Start and End keep their appearance while a search runs
    pub fn is_role(&self) -> bool {
        matches!(self, CellState::Start | CellState::End)
    }

    /// Marks left behind by a search run
    pub fn is_search_mark(&self) -> bool {
        matches!(self, CellState::Open | CellState::Closed | CellState::Path)
    }
}

/// One square of the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub coord: Coord,
    pub state: CellState,
    /// Traversable orthogonal neighbors, filled by `Grid::compute_neighbors`
    pub neighbors: Vec<Coord>,
}

impl Cell {
    pub fn new(coord: Coord) -> Self {
        Cell {
            coord,
            state: CellState::Empty,
            neighbors: Vec::new(),
        }
    }

    pub fn is_barrier(&self) -> bool {
        self.state == CellState::Barrier
    }
}
