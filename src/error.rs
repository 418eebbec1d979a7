use thiserror::Error;

/// Errors raised by coordinate-addressed grid operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfRange { row: usize, col: usize, size: usize },
}

/// Errors raised while parsing a text layout
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout contains no grid rows")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected} (layouts must be square)")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown symbol '{symbol}' at ({row}, {col})")]
    UnknownSymbol { symbol: char, row: usize, col: usize },

    #[error("layout contains more than one {role} cell")]
    DuplicateRole { role: &'static str },

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Errors raised while reading `config.toml`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
