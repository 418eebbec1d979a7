use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub visual: VisualConfig,
    #[serde(default)]
    pub default_layout: DefaultLayoutConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct GridConfig {
    /// Cells per side
    #[serde(default = "default_grid_size")]
    pub size: usize,
}

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    /// Window width and height in pixels
    #[serde(default = "default_window_width")]
    pub width: u32,
    #[serde(default = "default_window_title")]
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchConfig {
    /// Queue pops performed between two rendered frames
    #[serde(default = "default_steps_per_frame")]
    pub steps_per_frame: usize,
}

/// Colours as `[r, g, b]`
#[derive(Debug, Deserialize)]
pub struct VisualConfig {
    #[serde(default = "default_show_grid_lines")]
    pub show_grid_lines: bool,
    #[serde(default = "default_grid_line_color")]
    pub grid_line: [u8; 3],
    #[serde(default = "default_empty_color")]
    pub empty: [u8; 3],
    #[serde(default = "default_barrier_color")]
    pub barrier: [u8; 3],
    #[serde(default = "default_start_color")]
    pub start: [u8; 3],
    #[serde(default = "default_end_color")]
    pub end: [u8; 3],
    #[serde(default = "default_open_color")]
    pub open: [u8; 3],
    #[serde(default = "default_closed_color")]
    pub closed: [u8; 3],
    #[serde(default = "default_path_color")]
    pub path: [u8; 3],
}

#[derive(Debug, Deserialize, Default)]
pub struct DefaultLayoutConfig {
    /// Layout file loaded at startup; empty for a blank grid
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// `env_logger` filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub enable_action_log: bool,
    #[serde(default = "default_action_log_path")]
    pub action_log_path: String,
}

// Default values
fn default_grid_size() -> usize { 50 }
fn default_window_width() -> u32 { 800 }
fn default_window_title() -> String { "A* Path Finding Algorithm".to_string() }
fn default_steps_per_frame() -> usize { 1 }
fn default_show_grid_lines() -> bool { true }
fn default_grid_line_color() -> [u8; 3] { [128, 128, 128] }
fn default_empty_color() -> [u8; 3] { [255, 255, 255] }
fn default_barrier_color() -> [u8; 3] { [0, 0, 0] }
fn default_start_color() -> [u8; 3] { [255, 165, 0] }
fn default_end_color() -> [u8; 3] { [64, 224, 208] }
fn default_open_color() -> [u8; 3] { [0, 255, 0] }
fn default_closed_color() -> [u8; 3] { [255, 0, 0] }
fn default_path_color() -> [u8; 3] { [128, 0, 128] }
fn default_log_level() -> String { "info".to_string() }
fn default_action_log_path() -> String { "action_log.json".to_string() }

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: default_grid_size(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            title: default_window_title(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            steps_per_frame: default_steps_per_frame(),
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            show_grid_lines: default_show_grid_lines(),
            grid_line: default_grid_line_color(),
            empty: default_empty_color(),
            barrier: default_barrier_color(),
            start: default_start_color(),
            end: default_end_color(),
            open: default_open_color(),
            closed: default_closed_color(),
            path: default_path_color(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            enable_action_log: false,
            action_log_path: default_action_log_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            window: WindowConfig::default(),
            search: SearchConfig::default(),
            visual: VisualConfig::default(),
            default_layout: DefaultLayoutConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration text; missing sections and fields take defaults
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(contents)?;
        config.normalize();
        Ok(config)
    }

    /// Read a config file. `Ok(None)` when the file does not exist.
    pub fn try_load(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents).map(Some)
    }

    /// Report a `try_load` result, falling back to defaults if the file is missing or invalid
    pub fn resolve(loaded: Result<Option<Self>, ConfigError>) -> Self {
        match loaded {
            Ok(Some(config)) => {
                log::info!("Loaded configuration from {}", CONFIG_PATH);
                config
            }
            Ok(None) => {
                log::info!("No {} found, using default configuration", CONFIG_PATH);
                Config::default()
            }
            Err(e) => {
                log::warn!("Failed to load {}: {}", CONFIG_PATH, e);
                log::warn!("Using default configuration");
                Config::default()
            }
        }
    }

    /// Defaults on any failure without logging, for use before the logger exists
    pub fn load_quiet() -> Self {
        Self::try_load(Path::new(CONFIG_PATH))
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    /// Keep values that would leave nothing to draw or search within range
    fn normalize(&mut self) {
        self.grid.size = self.grid.size.max(1);
        self.window.width = self.window.width.max(self.grid.size as u32);
        self.search.steps_per_frame = self.search.steps_per_frame.max(1);
    }
}
