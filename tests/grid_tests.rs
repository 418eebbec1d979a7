use astar_viz::{CellState, Coord, Grid, GridError};

#[test]
fn new_grid_is_empty_and_square() {
    let grid = Grid::new(4);
    assert_eq!(grid.size(), 4);
    assert_eq!(grid.cells().count(), 16);
    assert!(grid.cells().all(|cell| cell.state == CellState::Empty));

    // Row-major ordering
    let coords: Vec<Coord> = grid.cells().take(5).map(|cell| cell.coord).collect();
    assert_eq!(coords[3], Coord::new(0, 3));
    assert_eq!(coords[4], Coord::new(1, 0));
}

#[test]
fn cell_at_rejects_out_of_range() {
    let grid = Grid::new(3);
    assert!(grid.cell_at(Coord::new(2, 2)).is_ok());
    assert_eq!(
        grid.cell_at(Coord::new(3, 0)).unwrap_err(),
        GridError::OutOfRange { row: 3, col: 0, size: 3 }
    );
    assert!(grid.cell_at(Coord::new(0, 3)).is_err());
}

#[test]
fn setters_are_bounds_checked() {
    let mut grid = Grid::new(2);
    assert!(grid.make_barrier(Coord::new(2, 0)).is_err());
    assert!(grid.make_start(Coord::new(0, 5)).is_err());
    assert!(grid.cells().all(|cell| cell.state == CellState::Empty));
}

#[test]
fn reset_cell_returns_to_empty() {
    let mut grid = Grid::new(2);
    let at = Coord::new(1, 1);
    grid.make_barrier(at).unwrap();
    grid.make_barrier(at).unwrap();
    assert_eq!(grid.state(at).unwrap(), CellState::Barrier);

    grid.reset_cell(at).unwrap();
    assert_eq!(grid.state(at).unwrap(), CellState::Empty);
}

#[test]
fn with_barriers_rejects_out_of_range_entries() {
    let grid = Grid::with_barriers(3, &[Coord::new(0, 0), Coord::new(2, 1)]).unwrap();
    assert_eq!(
        grid.coords_in_state(CellState::Barrier),
        vec![Coord::new(0, 0), Coord::new(2, 1)]
    );

    assert_eq!(
        Grid::with_barriers(3, &[Coord::new(0, 0), Coord::new(9, 9)]).unwrap_err(),
        GridError::OutOfRange { row: 9, col: 9, size: 3 }
    );
}

#[test]
fn pixel_to_cell_uses_integer_cell_width() {
    let grid = Grid::new(50);
    assert_eq!(grid.cell_width(800), 16);

    assert_eq!(grid.pixel_to_cell(0.0, 0.0, 800), Some(Coord::new(0, 0)));
    // x selects the column, y the row
    assert_eq!(grid.pixel_to_cell(33.0, 15.9, 800), Some(Coord::new(0, 2)));
    assert_eq!(grid.pixel_to_cell(15.0, 799.0, 800), Some(Coord::new(49, 0)));
    assert_eq!(grid.pixel_to_cell(800.0, 10.0, 800), None);
    assert_eq!(grid.pixel_to_cell(-1.0, 10.0, 800), None);
}

#[test]
fn pixel_to_cell_ignores_remainder_strip() {
    // 810 / 50 = 16, so pixels 800..810 are not rendered
    let grid = Grid::new(50);
    assert_eq!(grid.pixel_to_cell(799.0, 799.0, 810), Some(Coord::new(49, 49)));
    assert_eq!(grid.pixel_to_cell(805.0, 0.0, 810), None);
}

#[test]
fn pixel_to_cell_rejects_non_finite_positions() {
    let grid = Grid::new(50);
    assert_eq!(grid.pixel_to_cell(f32::NAN, f32::NAN, 800), None);
    assert_eq!(grid.pixel_to_cell(10.0, f32::NAN, 800), None);
    assert_eq!(grid.pixel_to_cell(f32::INFINITY, 10.0, 800), None);
}

#[test]
fn grid_wider_than_display_does_not_fit() {
    assert!(Grid::new(50).fits_display(800));
    assert!(Grid::new(800).fits_display(800));

    let too_big = Grid::new(801);
    assert!(!too_big.fits_display(800));
    assert_eq!(too_big.pixel_to_cell(0.0, 0.0, 800), None);
}

#[test]
fn neighbors_skip_edges_and_barriers() {
    let mut grid = Grid::new(3);
    grid.make_barrier(Coord::new(0, 1)).unwrap();
    grid.compute_neighbors();

    assert_eq!(
        grid.neighbors(Coord::new(1, 1)).unwrap(),
        &[Coord::new(2, 1), Coord::new(1, 0), Coord::new(1, 2)]
    );
    assert_eq!(grid.neighbors(Coord::new(0, 0)).unwrap(), &[Coord::new(1, 0)]);
    // A barrier still lists its open neighbors; it is simply never reached
    assert_eq!(
        grid.neighbors(Coord::new(0, 1)).unwrap(),
        &[Coord::new(1, 1), Coord::new(0, 0), Coord::new(0, 2)]
    );
}

#[test]
fn neighbors_follow_barrier_changes_only_after_recompute() {
    let mut grid = Grid::new(2);
    grid.compute_neighbors();
    grid.make_barrier(Coord::new(0, 1)).unwrap();
    assert_eq!(grid.neighbors(Coord::new(0, 0)).unwrap().len(), 2);

    grid.compute_neighbors();
    assert_eq!(grid.neighbors(Coord::new(0, 0)).unwrap(), &[Coord::new(1, 0)]);
}

#[test]
fn clear_search_marks_keeps_layout() {
    let mut grid = Grid::new(3);
    grid.make_start(Coord::new(0, 0)).unwrap();
    grid.make_end(Coord::new(2, 2)).unwrap();
    grid.make_barrier(Coord::new(1, 1)).unwrap();
    grid.make_open(Coord::new(0, 1)).unwrap();
    grid.make_closed(Coord::new(1, 0)).unwrap();
    grid.make_path(Coord::new(2, 1)).unwrap();

    grid.clear_search_marks();

    assert_eq!(grid.state(Coord::new(0, 0)).unwrap(), CellState::Start);
    assert_eq!(grid.state(Coord::new(2, 2)).unwrap(), CellState::End);
    assert_eq!(grid.state(Coord::new(1, 1)).unwrap(), CellState::Barrier);
    assert!(grid.coords_in_state(CellState::Open).is_empty());
    assert!(grid.coords_in_state(CellState::Closed).is_empty());
    assert!(grid.coords_in_state(CellState::Path).is_empty());
}

#[test]
fn reset_empties_everything() {
    let mut grid = Grid::with_barriers(3, &[Coord::new(0, 0), Coord::new(2, 2)]).unwrap();
    grid.make_start(Coord::new(1, 1)).unwrap();
    grid.compute_neighbors();

    grid.reset();

    assert_eq!(grid.size(), 3);
    assert!(grid.cells().all(|cell| cell.state == CellState::Empty));
    assert!(grid.cells().all(|cell| cell.neighbors.is_empty()));
}
