use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("grid dimensions must be positive and fit in memory, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("cell ({row}, {col}) has value {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: u8 },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown boundary mode `{0}` (expected `periodic` or `solid`)")]
    UnknownBoundary(String),

    #[error("unknown rule `{0}`")]
    UnknownRule(String),

    #[error("invalid rule string `{0}`")]
    InvalidRuleString(String),

    #[error("fill rate must be a probability, got {0}")]
    InvalidFillRate(f64),

    #[error("pattern of {pattern_rows}x{pattern_cols} cells does not fit in a {rows}x{cols} grid")]
    PatternTooLarge {
        pattern_rows: usize,
        pattern_cols: usize,
        rows: usize,
        cols: usize,
    },

    #[error("number of steps must be at least 1")]
    NoSteps,

    #[error("invalid RLE pattern: {0}")]
    InvalidRle(String),

    #[error("malformed step log at line {line}: {reason}")]
    MalformedLog { line: usize, reason: String },

    #[error("cannot render animation: {0}")]
    InvalidAnimation(String),

    #[error(transparent)]
    Gif(#[from] gif::EncodingError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
