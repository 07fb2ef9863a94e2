//! The annealing network: board, couplings, threshold and temperature.

use super::activation::Activation;
use super::config::{InitialState, NetworkConfig};
use super::tensor::WeightTensor;
use crate::board::Board;
use crate::error::ConfigError;
use crate::random::rng_from_seed;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

/// A fully-connected binary network over the cells of an N×N board.
///
/// Each call to [`update`](Self::update) resamples one randomly chosen unit
/// from its Boltzmann activation probability and cools the temperature by
/// the decay factor.
///
/// The network owns its random generator. Use [`with_rng`](Self::with_rng)
/// to inject one, or set [`NetworkConfig::seed`] for a reproducible run.
#[derive(Debug, Clone)]
pub struct AnnealingNetwork<R = StdRng> {
    board: Board,
    tensor: WeightTensor,
    threshold: f64,
    temperature: f64,
    alpha: f64,
    rng: R,
}

/// A read-only view of the network at one point of a run.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// Update attempts performed so far.
    pub iteration: usize,
    /// Current board.
    pub board: &'a Board,
    /// Current temperature.
    pub temperature: f64,
    tensor: &'a WeightTensor,
    threshold: f64,
}

impl Snapshot<'_> {
    /// Energy of the board. Costs O(N⁴), so it is only computed on demand.
    pub fn energy(&self) -> f64 {
        self.tensor.energy(self.board, self.threshold)
    }
}

impl AnnealingNetwork<StdRng> {
    /// Builds a network, seeding its generator from `config.seed` (or OS
    /// entropy when unset).
    pub fn new(config: &NetworkConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, rng_from_seed(config.seed))
    }
}

impl<R: Rng> AnnealingNetwork<R> {
    /// Builds a network that draws from `rng`. `config.seed` is ignored.
    pub fn with_rng(config: &NetworkConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let n = config.size;
        let board = match &config.initial_state {
            InitialState::Identity => Board::identity(n),
            InitialState::Empty => Board::empty(n),
            InitialState::Columns(columns) => Board::from_columns(columns)?,
            InitialState::RandomPermutation => {
                let mut columns: Vec<usize> = (0..n).collect();
                columns.shuffle(&mut rng);
                Board::from_columns(&columns)?
            }
        };

        let tensor = WeightTensor::new(n, &config.penalties);
        let threshold = config.penalties.threshold();

        debug!(
            size = n,
            temperature = config.initial_temperature,
            alpha = config.alpha,
            threshold,
            "annealing network built"
        );

        Ok(Self {
            board,
            tensor,
            threshold,
            temperature: config.initial_temperature,
            alpha: config.alpha,
            rng,
        })
    }

    /// Resamples one uniformly chosen unit and cools the temperature.
    ///
    /// Returns `true` if the unit's value changed.
    pub fn update(&mut self) -> bool {
        let n = self.board.size();
        let rx = self.rng.random_range(0..n);
        let ry = self.rng.random_range(0..n);

        let input = -self.threshold + self.tensor.local_field(rx, ry, &self.board);
        let activation = Activation::evaluate(input, self.temperature);
        if activation.is_saturated() {
            trace!(?activation, input, temperature = self.temperature, "activation saturated");
        }

        self.temperature = cool(self.temperature, self.alpha);

        let active = activation.probability() > self.rng.random::<f64>();
        if active == self.board.get(rx, ry) {
            return false;
        }

        self.board.set(rx, ry, active);
        trace!(row = rx, column = ry, active, "unit flipped");
        true
    }

    /// Energy of the current board.
    pub fn energy(&self) -> f64 {
        self.tensor.energy(&self.board, self.threshold)
    }

    /// Whether the current board is a solution.
    pub fn check(&self) -> bool {
        self.board.is_feasible()
    }

    /// Takes a snapshot labelled with `iteration`.
    pub fn snapshot(&self, iteration: usize) -> Snapshot<'_> {
        Snapshot {
            iteration,
            board: &self.board,
            temperature: self.temperature,
            tensor: &self.tensor,
            threshold: self.threshold,
        }
    }
}

impl<R> AnnealingNetwork<R> {
    /// Board side length N.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the board.
    ///
    /// # Panics
    /// Panics if `board` is not N×N.
    pub fn set_board(&mut self, board: Board) {
        assert_eq!(board.size(), self.board.size(), "board size mismatch");
        self.board = board;
    }

    pub fn tensor(&self) -> &WeightTensor {
        &self.tensor
    }

    /// Bias threshold shared by all units.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Energy of any feasible board: N queens with no coupling between them
    /// leave only the threshold and offset terms, `N·(threshold + 1)`.
    pub fn feasible_energy(&self) -> f64 {
        self.board.size() as f64 * (self.threshold + 1.0)
    }
}

/// Geometric cooling step. The temperature stays positive: once the product
/// underflows to zero the previous value is kept.
fn cool(temperature: f64, alpha: f64) -> f64 {
    let next = temperature * alpha;
    if next > 0.0 {
        next
    } else {
        temperature
    }
}
