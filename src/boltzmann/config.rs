//! Network configuration and penalty weighting.

use crate::error::ConfigError;

/// Coefficients of the four conflict penalties encoded in the weight tensor.
///
/// Each coefficient scales the coupling between two cells sharing the
/// corresponding line. The bias threshold depends on `row` and `column`
/// only: `-2 * (row + column)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PenaltyWeights {
    /// Two queens in the same row.
    pub row: f64,
    /// Two queens in the same column.
    pub column: f64,
    /// Two queens on the same "/" diagonal (`x - y == a - b`).
    pub diagonal: f64,
    /// Two queens on the same "\" diagonal (`x + y == a + b`).
    pub anti_diagonal: f64,
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self {
            row: 1.0,
            column: 1.0,
            diagonal: 1.0,
            anti_diagonal: 1.0,
        }
    }
}

impl PenaltyWeights {
    /// Bias threshold applied to every unit.
    pub fn threshold(&self) -> f64 {
        -2.0 * (self.row + self.column)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("row", self.row),
            ("column", self.column),
            ("diagonal", self.diagonal),
            ("anti_diagonal", self.anti_diagonal),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidPenalty { name, value });
            }
        }
        Ok(())
    }
}

/// Starting configuration of the board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitialState {
    /// One queen per row on the main diagonal.
    #[default]
    Identity,
    /// No queens.
    Empty,
    /// One queen per row at the given column.
    Columns(Vec<usize>),
    /// A uniformly random permutation, drawn from the network's generator.
    RandomPermutation,
}

/// Configuration for an [`AnnealingNetwork`](super::AnnealingNetwork) run.
///
/// Size-dependent defaults follow the usual heuristic: an iteration budget
/// of `N² × 100`, an initial temperature of `N² × 10` and a decay factor of
/// 0.99.
///
/// # Examples
///
/// ```
/// use queen_anneal::boltzmann::{InitialState, NetworkConfig};
///
/// let config = NetworkConfig::new(6)
///     .with_alpha(0.995)
///     .with_initial_state(InitialState::Empty)
///     .with_seed(42);
/// assert_eq!(config.max_iterations, 3600);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkConfig {
    /// Board side length N.
    pub size: usize,

    /// Starting temperature. Higher values make early updates closer to
    /// coin flips.
    pub initial_temperature: f64,

    /// Geometric decay factor in (0, 1), applied after every update.
    pub alpha: f64,

    /// Update attempts before the driver gives up.
    pub max_iterations: usize,

    /// Conflict penalty coefficients.
    pub penalties: PenaltyWeights,

    /// Starting board.
    pub initial_state: InitialState,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::new(8)
    }
}

impl NetworkConfig {
    /// Creates a configuration with size-dependent defaults.
    pub fn new(size: usize) -> Self {
        let cells = size * size;
        Self {
            size,
            initial_temperature: cells as f64 * 10.0,
            alpha: 0.99,
            max_iterations: cells * 100,
            penalties: PenaltyWeights::default(),
            initial_state: InitialState::default(),
            seed: None,
        }
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_penalties(mut self, penalties: PenaltyWeights) -> Self {
        self.penalties = penalties;
        self
    }

    pub fn with_initial_state(mut self, state: InitialState) -> Self {
        self.initial_state = state;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(ConfigError::InvalidTemperature(self.initial_temperature));
        }
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(ConfigError::InvalidAlpha(self.alpha));
        }
        self.penalties.validate()?;
        if let InitialState::Columns(columns) = &self.initial_state {
            if columns.len() != self.size {
                return Err(ConfigError::ColumnsLength {
                    expected: self.size,
                    got: columns.len(),
                });
            }
            if let Some((row, &column)) = columns.iter().enumerate().find(|(_, &c)| c >= self.size)
            {
                return Err(ConfigError::ColumnOutOfRange {
                    row,
                    column,
                    size: self.size,
                });
            }
        }
        Ok(())
    }
}
