//! Annealing driver loop.

use super::config::NetworkConfig;
use super::network::{AnnealingNetwork, Snapshot};
use crate::board::Board;
use crate::error::ConfigError;
use rand::Rng;
use tracing::info;

/// Driver state. `Solved` and `Exhausted` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DriverState {
    Running,
    /// A feasible board was reached.
    Solved,
    /// The iteration budget ran out first.
    Exhausted,
}

/// Result of an annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealResult {
    /// Terminal state of the driver.
    pub state: DriverState,

    /// Update attempts performed.
    pub iterations: usize,

    /// Update attempts that changed the board.
    pub state_changes: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Energy of the final board.
    pub energy: f64,

    /// Final board.
    pub board: Board,

    /// Queen column per row, when solved.
    pub solution: Option<Vec<usize>>,
}

impl AnnealResult {
    pub fn is_solved(&self) -> bool {
        self.state == DriverState::Solved
    }
}

/// Receives progress events from [`AnnealRunner`].
///
/// All methods default to doing nothing; `()` is the silent observer.
pub trait AnnealObserver {
    /// Called once before the first update.
    fn on_start(&mut self, _snapshot: &Snapshot<'_>) {}

    /// Called after every update that changed the board.
    fn on_change(&mut self, _snapshot: &Snapshot<'_>) {}

    /// Called once when the driver reaches a terminal state.
    fn on_finish(&mut self, _result: &AnnealResult) {}
}

impl AnnealObserver for () {}

/// Runs the annealing loop until the board is feasible or the budget is
/// spent.
///
/// Annealing is a heuristic: reaching [`DriverState::Solved`] within a given
/// budget is likely for small boards but never guaranteed.
///
/// # Usage
///
/// ```
/// use queen_anneal::boltzmann::{AnnealRunner, NetworkConfig};
///
/// let config = NetworkConfig::new(4).with_seed(42);
/// let result = AnnealRunner::run(&config).unwrap();
/// assert!(result.iterations <= config.max_iterations);
/// ```
pub struct AnnealRunner;

impl AnnealRunner {
    /// Builds a network from `config` and anneals it silently.
    pub fn run(config: &NetworkConfig) -> Result<AnnealResult, ConfigError> {
        Self::run_with_observer(config, &mut ())
    }

    /// Builds a network from `config` and anneals it, reporting to `observer`.
    pub fn run_with_observer<O: AnnealObserver + ?Sized>(
        config: &NetworkConfig,
        observer: &mut O,
    ) -> Result<AnnealResult, ConfigError> {
        let mut network = AnnealingNetwork::new(config)?;
        Ok(Self::drive(&mut network, config.max_iterations, observer))
    }

    /// Anneals an existing network for at most `max_iterations` updates.
    ///
    /// The board is checked only after updates that change it.
    pub fn drive<R: Rng, O: AnnealObserver + ?Sized>(
        network: &mut AnnealingNetwork<R>,
        max_iterations: usize,
        observer: &mut O,
    ) -> AnnealResult {
        info!(
            size = network.size(),
            max_iterations,
            temperature = network.temperature(),
            "annealing started"
        );
        observer.on_start(&network.snapshot(0));

        let mut state = DriverState::Running;
        let mut iterations = 0usize;
        let mut state_changes = 0usize;

        while state == DriverState::Running {
            if iterations >= max_iterations {
                state = DriverState::Exhausted;
                break;
            }

            iterations += 1;
            if network.update() {
                state_changes += 1;
                observer.on_change(&network.snapshot(iterations));

                if network.check() {
                    state = DriverState::Solved;
                }
            }
        }

        let board = network.board().clone();
        let solution = match state {
            DriverState::Solved => board.queen_columns(),
            _ => None,
        };
        let result = AnnealResult {
            state,
            iterations,
            state_changes,
            final_temperature: network.temperature(),
            energy: network.energy(),
            board,
            solution,
        };

        info!(
            state = ?result.state,
            iterations,
            state_changes,
            final_temperature = result.final_temperature,
            energy = result.energy,
            "annealing finished"
        );
        observer.on_finish(&result);
        result
    }
}
