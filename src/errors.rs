use thiserror::Error;

/// Failures raised while interpreting a coordinate file. Lines that merely
/// look wrong (blank separators, extra columns) are skipped by the parser
/// and never reach this enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("file contains no coordinate rows")]
    Empty,

    #[error("line {line}: not a numeric coordinate: \"{token}\"")]
    InvalidNumber { line: usize, token: String },

    #[error("header declares {declared} surface points but only {available} rows follow")]
    Truncated { declared: usize, available: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    #[error("scale factor must be a positive number, got {0}")]
    InvalidArgument(f64),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidGeometry {
    #[error("a closed outline needs at least 3 points")]
    NotEnoughPoints,
}
