mod render;

use arboard::Clipboard;
use astar_viz::config::{Config, LoggingConfig, CONFIG_PATH};
use astar_viz::{grid_to_string, parse_layout, AppState, Coord};
use log::{error, info, warn};
use macroquad::prelude::*;
use render::Palette;
use std::fs;
use std::path::Path;

fn window_conf() -> Conf {
    let config = Config::load_quiet();
    Conf {
        window_title: config.window.title.clone(),
        window_width: config.window.width as i32,
        window_height: config.window.width as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Build the initial state, loading the configured layout when one is set
fn initial_state(config: &Config) -> AppState {
    let path = &config.default_layout.path;
    if path.is_empty() {
        return AppState::new(config.grid.size);
    }

    let loaded = fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|text| parse_layout(&text).map_err(|e| e.to_string()));
    match loaded {
        Ok(layout) if !layout.grid.fits_display(config.window.width) => {
            warn!(
                "Layout {} is {} cells wide, more than the {}px window",
                path,
                layout.grid.size(),
                config.window.width
            );
            AppState::new(config.grid.size)
        }
        Ok(layout) => {
            info!("Loaded layout {} ({}x{})", path, layout.grid.size(), layout.grid.size());
            AppState::from_layout(layout)
        }
        Err(e) => {
            warn!("Failed to load layout {}: {}", path, e);
            AppState::new(config.grid.size)
        }
    }
}

// Copied text is only served while the handle is alive, so one handle is held per session
fn copy_to_clipboard(state: &mut AppState, clipboard: Option<&mut Clipboard>) {
    let Some(clipboard) = clipboard else {
        warn!("Clipboard unavailable, layout not copied");
        return;
    };
    match clipboard.set_text(grid_to_string(&state.grid)) {
        Ok(()) => {
            info!("Grid layout copied to clipboard");
            state.note_layout_copied();
        }
        Err(e) => warn!("Failed to copy to clipboard: {}", e),
    }
}

fn paste_from_clipboard(state: &mut AppState, clipboard: Option<&mut Clipboard>, display_width: u32) {
    let Some(clipboard) = clipboard else {
        warn!("Clipboard unavailable, nothing pasted");
        return;
    };
    let text = match clipboard.get_text() {
        Ok(text) => text,
        Err(e) => {
            warn!("Failed to read clipboard: {}", e);
            return;
        }
    };
    match parse_layout(&text) {
        Ok(layout) if !layout.grid.fits_display(display_width) => warn!(
            "Pasted layout is {} cells wide, more than the {}px window",
            layout.grid.size(),
            display_width
        ),
        Ok(layout) => {
            info!("Pasted {}x{} layout", layout.grid.size(), layout.grid.size());
            state.load_layout(layout);
        }
        Err(e) => warn!("Clipboard does not hold a valid layout: {}", e),
    }
}

fn handle_input(state: &mut AppState, clipboard: &mut Option<Clipboard>, display_width: u32) {
    let (mouse_x, mouse_y) = mouse_position();
    let hovered: Option<Coord> = state.grid.pixel_to_cell(mouse_x, mouse_y, display_width);

    if let Some(coord) = hovered {
        let result = if is_mouse_button_down(MouseButton::Left) {
            state.primary_click(coord)
        } else if is_mouse_button_down(MouseButton::Right) {
            state.secondary_click(coord)
        } else {
            Ok(())
        };
        if let Err(e) = result {
            error!("Click at ({}, {}) rejected: {}", mouse_x, mouse_y, e);
        }
    }

    if is_key_pressed(KeyCode::C) {
        state.clear();
    }
    if is_key_pressed(KeyCode::Y) {
        copy_to_clipboard(state, clipboard.as_mut());
    }
    if is_key_pressed(KeyCode::P) {
        paste_from_clipboard(state, clipboard.as_mut(), display_width);
    }
    if is_key_pressed(KeyCode::Space) {
        if let Err(e) = state.begin_search() {
            error!("Could not start search: {}", e);
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Read the file before the logger exists so its level applies, report afterwards
    let loaded = Config::try_load(Path::new(CONFIG_PATH));
    let level = match &loaded {
        Ok(Some(config)) => config.logging.level.clone(),
        _ => LoggingConfig::default().level,
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    let config = Config::resolve(loaded);
    info!(
        "{}x{} grid on a {}px window",
        config.grid.size, config.grid.size, config.window.width
    );

    let palette = Palette::from_config(&config.visual);
    let display_width = config.window.width;
    let mut state = initial_state(&config);
    let mut clipboard = match Clipboard::new() {
        Ok(clipboard) => Some(clipboard),
        Err(e) => {
            warn!("Clipboard unavailable: {}", e);
            None
        }
    };

    loop {
        // Close window on Escape; this is the only input honoured during a run
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        if state.is_searching() {
            match state.advance(config.search.steps_per_frame) {
                Ok(Some(outcome)) => println!("{}", outcome.is_found()),
                Ok(None) => {}
                Err(e) => {
                    error!("Search aborted: {}", e);
                    break;
                }
            }
        } else {
            handle_input(&mut state, &mut clipboard, display_width);
        }

        render::draw_grid(&state.grid, display_width, &palette);
        if let Some(status) = state.status_text() {
            render::draw_status(&status);
        }

        next_frame().await
    }

    info!("Session summary:\n{}", state.action_log().summary());
    if config.logging.enable_action_log {
        match state.action_log().save_to_file(&config.logging.action_log_path) {
            Ok(()) => info!("Action log written to {}", config.logging.action_log_path),
            Err(e) => warn!("Failed to write action log: {}", e),
        }
    }
}
