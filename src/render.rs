use astar_viz::config::VisualConfig;
use astar_viz::{CellState, Grid};
use macroquad::prelude::*;

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::from_rgba(r, g, b, 255)
}

/// Cell colours resolved from the visual config
pub struct Palette {
    empty: Color,
    barrier: Color,
    start: Color,
    end: Color,
    open: Color,
    closed: Color,
    path: Color,
    grid_line: Color,
    show_grid_lines: bool,
}

impl Palette {
    pub fn from_config(visual: &VisualConfig) -> Self {
        Palette {
            empty: rgb(visual.empty),
            barrier: rgb(visual.barrier),
            start: rgb(visual.start),
            end: rgb(visual.end),
            open: rgb(visual.open),
            closed: rgb(visual.closed),
            path: rgb(visual.path),
            grid_line: rgb(visual.grid_line),
            show_grid_lines: visual.show_grid_lines,
        }
    }

    fn color(&self, state: CellState) -> Color {
        match state {
            CellState::Empty => self.empty,
            CellState::Barrier => self.barrier,
            CellState::Start => self.start,
            CellState::End => self.end,
            CellState::Open => self.open,
            CellState::Closed => self.closed,
            CellState::Path => self.path,
        }
    }
}

/// Draw every cell, then the grid lines. Remainder pixels past `size * cell_width` stay blank.
pub fn draw_grid(grid: &Grid, display_width: u32, palette: &Palette) {
    clear_background(palette.empty);

    let cell_width = grid.cell_width(display_width) as f32;
    for cell in grid.cells() {
        if cell.state == CellState::Empty {
            continue;
        }
        let x = cell.coord.col as f32 * cell_width;
        let y = cell.coord.row as f32 * cell_width;
        draw_rectangle(x, y, cell_width, cell_width, palette.color(cell.state));
    }

    if palette.show_grid_lines {
        let extent = grid.size() as f32 * cell_width;
        for i in 0..=grid.size() {
            let offset = i as f32 * cell_width;
            draw_line(0.0, offset, extent, offset, 1.0, palette.grid_line);
            draw_line(offset, 0.0, offset, extent, 1.0, palette.grid_line);
        }
    }
}

/// One line of status text in the top-left corner, drawn only during a run
pub fn draw_status(text: &str) {
    let dims = measure_text(text, None, 20, 1.0);
    draw_rectangle(4.0, 4.0, dims.width + 12.0, 26.0, Color::from_rgba(0, 0, 0, 160));
    draw_text(text, 10.0, 22.0, 20.0, WHITE);
}
