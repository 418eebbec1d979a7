use crate::cell::{Cell, CellState, Coord};
use crate::error::GridError;

/// Square grid of cells stored row-major
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new `size`x`size` grid with every cell empty
    pub fn new(size: usize) -> Self {
        let cells = (0..size * size)
            .map(|id| Cell::new(Coord::new(id / size, id % size)))
            .collect();

        Grid { size, cells }
    }

    /// Create a grid with specific barrier cells
    pub fn with_barriers(size: usize, barriers: &[Coord]) -> Result<Self, GridError> {
        let mut grid = Self::new(size);
        for &coord in barriers {
            grid.make_barrier(coord)?;
        }
        Ok(grid)
    }

    /// Reallocate every cell as empty, dropping neighbor lists and roles
    pub fn reset(&mut self) {
        *self = Self::new(self.size);
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    fn index(&self, coord: Coord) -> Result<usize, GridError> {
        if !self.contains(coord) {
            return Err(GridError::OutOfRange {
                row: coord.row,
                col: coord.col,
                size: self.size,
            });
        }
        Ok(coord.row * self.size + coord.col)
    }

    /// Bounds-checked lookup
    pub fn cell_at(&self, coord: Coord) -> Result<&Cell, GridError> {
        let id = self.index(coord)?;
        Ok(&self.cells[id])
    }

    pub fn state(&self, coord: Coord) -> Result<CellState, GridError> {
        self.cell_at(coord).map(|cell| cell.state)
    }

    /// Iterate cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Snapshot of every cell state in row-major order
    pub fn states(&self) -> Vec<CellState> {
        self.cells.iter().map(|cell| cell.state).collect()
    }

    /// Coordinates of every cell currently in `state`
    pub fn coords_in_state(&self, state: CellState) -> Vec<Coord> {
        self.cells
            .iter()
            .filter(|cell| cell.state == state)
            .map(|cell| cell.coord)
            .collect()
    }

    /// Pixel width of one cell for a square display `display_width` pixels wide
    pub fn cell_width(&self, display_width: u32) -> u32 {
        if self.size == 0 {
            return 0;
        }
        display_width / self.size as u32
    }

    /// False when the display is too narrow to give every cell a pixel
    pub fn fits_display(&self, display_width: u32) -> bool {
        self.cell_width(display_width) > 0
    }

    /// Translate a pixel position into the cell under it.
    ///
    /// Returns `None` for negative or non-finite positions and for the
    /// unrendered remainder strip at the right/bottom edge.
    pub fn pixel_to_cell(&self, x: f32, y: f32, display_width: u32) -> Option<Coord> {
        let cell_width = self.cell_width(display_width);
        if cell_width == 0 || !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
            return None;
        }

        let coord = Coord::new(y as usize / cell_width as usize, x as usize / cell_width as usize);
        if self.contains(coord) {
            Some(coord)
        } else {
            None
        }
    }

    /// Recompute the traversable neighbors of every cell.
    ///
    /// Order is up, down, left, right; barrier cells are never listed as neighbors.
    pub fn compute_neighbors(&mut self) {
        let size = self.size;
        for id in 0..self.cells.len() {
            let Coord { row, col } = self.cells[id].coord;
            let mut neighbors = Vec::with_capacity(4);

            let candidates = [
                (row > 0).then(|| Coord::new(row - 1, col)),
                (row + 1 < size).then(|| Coord::new(row + 1, col)),
                (col > 0).then(|| Coord::new(row, col - 1)),
                (col + 1 < size).then(|| Coord::new(row, col + 1)),
            ];
            for coord in candidates.into_iter().flatten() {
                if !self.cells[coord.row * size + coord.col].is_barrier() {
                    neighbors.push(coord);
                }
            }

            self.cells[id].neighbors = neighbors;
        }
    }

    /// Neighbors computed by the last `compute_neighbors` call
    pub fn neighbors(&self, coord: Coord) -> Result<&[Coord], GridError> {
        self.cell_at(coord).map(|cell| cell.neighbors.as_slice())
    }

    pub fn set_state(&mut self, coord: Coord, state: CellState) -> Result<(), GridError> {
        let id = self.index(coord)?;
        self.cells[id].state = state;
        Ok(())
    }

    pub fn make_barrier(&mut self, coord: Coord) -> Result<(), GridError> {
        self.set_state(coord, CellState::Barrier)
    }

    pub fn make_start(&mut self, coord: Coord) -> Result<(), GridError> {
        self.set_state(coord, CellState::Start)
    }

    pub fn make_end(&mut self, coord: Coord) -> Result<(), GridError> {
        self.set_state(coord, CellState::End)
    }

    pub fn make_open(&mut self, coord: Coord) -> Result<(), GridError> {
        self.set_state(coord, CellState::Open)
    }

    pub fn make_closed(&mut self, coord: Coord) -> Result<(), GridError> {
        self.set_state(coord, CellState::Closed)
    }

    pub fn make_path(&mut self, coord: Coord) -> Result<(), GridError> {
        self.set_state(coord, CellState::Path)
    }

    /// Return a single cell to empty
    pub fn reset_cell(&mut self, coord: Coord) -> Result<(), GridError> {
        self.set_state(coord, CellState::Empty)
    }

    /// Remove open/closed/path marks left by a previous search run
    pub fn clear_search_marks(&mut self) {
        for cell in &mut self.cells {
            if cell.state.is_search_mark() {
                cell.state = CellState::Empty;
            }
        }
    }
}
