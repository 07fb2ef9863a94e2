//! N-Queens by simulated annealing on a Boltzmann machine.
//!
//! The board is modeled as a fully-connected network of N² binary units.
//! Pairwise couplings penalize queens that share a row, column or diagonal,
//! and a bias threshold rewards placing queens. Stochastic single-unit
//! updates under a geometrically cooling temperature drive the network
//! toward low-energy boards; the driver stops at the first feasible one.
//!
//! - [`board`]: the unit grid and the feasibility check.
//! - [`boltzmann`]: couplings, activation, the network and the driver loop.
//! - [`progress`]: textual progress output.
//!
//! # Example
//!
//! ```
//! use queen_anneal::boltzmann::{AnnealRunner, NetworkConfig};
//!
//! let config = NetworkConfig::new(4).with_max_iterations(10_000).with_seed(7);
//! let result = AnnealRunner::run(&config).unwrap();
//! if let Some(columns) = &result.solution {
//!     assert_eq!(columns.len(), 4);
//! }
//! ```
//!
//! # Features
//!
//! - `parallel`: build the weight tensor and sum the energy on rayon.
//! - `serde`: `Serialize`/`Deserialize` for configuration, board and result types.

pub mod board;
pub mod boltzmann;
pub mod error;
pub mod progress;
pub mod random;

pub use board::Board;
pub use error::ConfigError;
