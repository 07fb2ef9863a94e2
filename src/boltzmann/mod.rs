//! Boltzmann machine for N-Queens, trained by simulated annealing.
//!
//! Every board cell is a binary unit. Units sharing a row, column or
//! diagonal are coupled with negative weights, so co-activating attacking
//! queens raises the energy. Each update resamples one random unit from its
//! logistic activation probability at the current temperature; the
//! temperature then decays geometrically, moving the network from near-random
//! exploration toward deterministic descent.
//!
//! # References
//!
//! - Ackley, Hinton & Sejnowski (1985), "A Learning Algorithm for Boltzmann Machines"
//! - Aarts & Korst (1989), "Simulated Annealing and Boltzmann Machines"

mod activation;
mod config;
mod network;
mod runner;
mod tensor;

pub use activation::{Activation, MAX_EXP_ARG};
pub use config::{InitialState, NetworkConfig, PenaltyWeights};
pub use network::{AnnealingNetwork, Snapshot};
pub use runner::{AnnealObserver, AnnealResult, AnnealRunner, DriverState};
pub use tensor::WeightTensor;
