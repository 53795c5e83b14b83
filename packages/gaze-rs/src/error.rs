use thiserror::Error;

#[derive(Error, Debug)]
pub enum GazeError {
    #[error("Input file not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Failed to parse gaze samples: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Timestamp at sample {index} ({current} ms) precedes previous sample ({previous} ms)")]
    NonMonotonicTimestamp {
        index: usize,
        previous: u64,
        current: u64,
    },

    #[error("Sample {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, GazeError>;
