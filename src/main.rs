//! Command-line driver: anneal an N-Queens board and print its progress.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use queen_anneal::boltzmann::{AnnealRunner, InitialState, NetworkConfig};
use queen_anneal::progress::ProgressPrinter;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "queen-anneal")]
#[command(about = "Solve N-Queens with a Boltzmann machine under simulated annealing")]
#[command(version)]
struct Cli {
    /// Board size N
    #[arg(short = 'n', long, default_value_t = 8)]
    size: usize,

    /// Update attempts before giving up [default: N² × 100]
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Initial temperature [default: N² × 10]
    #[arg(short, long)]
    temperature: Option<f64>,

    /// Geometric decay factor in (0, 1)
    #[arg(short, long, default_value_t = 0.99)]
    alpha: f64,

    /// Random seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Starting board
    #[arg(long, value_enum, default_value_t = Start::Identity)]
    initial: Start,

    /// Print only the final board
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Start {
    Identity,
    Empty,
    Random,
}

impl Cli {
    fn config(&self) -> NetworkConfig {
        let mut config = NetworkConfig::new(self.size)
            .with_alpha(self.alpha)
            .with_initial_state(match self.initial {
                Start::Identity => InitialState::Identity,
                Start::Empty => InitialState::Empty,
                Start::Random => InitialState::RandomPermutation,
            });
        if let Some(n) = self.iterations {
            config = config.with_max_iterations(n);
        }
        if let Some(t) = self.temperature {
            config = config.with_initial_temperature(t);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}

/// Returns whether the run reached a solution.
fn run(cli: &Cli) -> Result<bool> {
    let config = cli.config();
    let stdout = io::stdout().lock();
    let mut printer = if cli.quiet {
        ProgressPrinter::final_only(stdout)
    } else {
        ProgressPrinter::new(stdout)
    };

    let result = AnnealRunner::run_with_observer(&config, &mut printer)
        .context("invalid configuration")?;
    printer.finish().context("failed to write progress")?;

    Ok(result.is_solved())
}
