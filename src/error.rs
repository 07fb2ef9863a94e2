//! Configuration errors.

use thiserror::Error;

/// Reasons a [`NetworkConfig`](crate::boltzmann::NetworkConfig) is rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("board size must be at least 1")]
    EmptyBoard,

    #[error("initial temperature must be positive and finite, got {0}")]
    InvalidTemperature(f64),

    #[error("decay factor alpha must be in (0, 1), got {0}")]
    InvalidAlpha(f64),

    #[error("penalty coefficient `{name}` must be finite and non-negative, got {value}")]
    InvalidPenalty { name: &'static str, value: f64 },

    #[error("initial columns have length {got}, expected {expected}")]
    ColumnsLength { expected: usize, got: usize },

    #[error("initial column {column} in row {row} is outside a board of size {size}")]
    ColumnOutOfRange {
        row: usize,
        column: usize,
        size: usize,
    },
}
