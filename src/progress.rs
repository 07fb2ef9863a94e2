//! Textual progress output.
//!
//! Each snapshot prints the board energy, then one line per row, then a
//! blank line:
//!
//! ```text
//! -12.0
//! [0, 1, 0, 0]
//! [0, 0, 0, 1]
//! [1, 0, 0, 0]
//! [0, 0, 1, 0]
//!
//! OK
//! ```
//!
//! `OK` is printed once a feasible board is reached.

use crate::board::Board;
use crate::boltzmann::{AnnealObserver, AnnealResult, Snapshot};
use std::io::{self, Write};

/// Marker printed after a solved run.
pub const SUCCESS_MARKER: &str = "OK";

/// An [`AnnealObserver`] that writes progress to `W`.
///
/// Observer callbacks cannot fail, so the first write error is kept and
/// returned by [`finish`](Self::finish); later output is skipped.
pub struct ProgressPrinter<W: Write> {
    out: W,
    every_change: bool,
    error: Option<io::Error>,
}

impl<W: Write> ProgressPrinter<W> {
    /// Prints the initial board and every change.
    pub fn new(out: W) -> Self {
        Self {
            out,
            every_change: true,
            error: None,
        }
    }

    /// Prints only the final board.
    pub fn final_only(out: W) -> Self {
        Self {
            every_change: false,
            ..Self::new(out)
        }
    }

    /// Flushes and returns the writer, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn emit(&mut self, write: impl FnOnce(&mut W) -> io::Result<()>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = write(&mut self.out) {
            self.error = Some(err);
        }
    }

    fn print_board(&mut self, energy: f64, board: &Board) {
        self.emit(|out| writeln!(out, "{energy:?}\n{board}"));
    }
}

impl<W: Write> AnnealObserver for ProgressPrinter<W> {
    fn on_start(&mut self, snapshot: &Snapshot<'_>) {
        if self.every_change {
            self.print_board(snapshot.energy(), snapshot.board);
        }
    }

    fn on_change(&mut self, snapshot: &Snapshot<'_>) {
        if self.every_change {
            self.print_board(snapshot.energy(), snapshot.board);
        }
    }

    fn on_finish(&mut self, result: &AnnealResult) {
        if !self.every_change {
            self.print_board(result.energy, &result.board);
        }
        if result.is_solved() {
            self.emit(|out| writeln!(out, "{SUCCESS_MARKER}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boltzmann::{AnnealRunner, InitialState, NetworkConfig};

    #[test]
    fn test_prints_initial_state() {
        let config = NetworkConfig::new(2).with_max_iterations(0).with_seed(0);
        let mut printer = ProgressPrinter::new(Vec::new());
        AnnealRunner::run_with_observer(&config, &mut printer).unwrap();
        let text = String::from_utf8(printer.finish().unwrap()).unwrap();
        // identity on 2×2: one diagonal pair, -(-4)/2 - 8 + 2
        assert_eq!(text, "-4.0\n[1, 0]\n[0, 1]\n\n");
    }

    #[test]
    fn test_solved_run_ends_with_marker() {
        let config = NetworkConfig::new(4)
            .with_max_iterations(10_000)
            .with_seed(5);
        let mut printer = ProgressPrinter::new(Vec::new());
        let result = AnnealRunner::run_with_observer(&config, &mut printer).unwrap();
        let text = String::from_utf8(printer.finish().unwrap()).unwrap();

        // initial snapshot plus one per change
        let snapshots = text.split("\n\n").filter(|s| s.contains('[')).count();
        assert_eq!(snapshots, result.state_changes + 1);
        assert_eq!(text.ends_with("OK\n"), result.is_solved());
    }

    #[test]
    fn test_final_only() {
        let config = NetworkConfig::new(4)
            .with_initial_state(InitialState::Empty)
            .with_max_iterations(0);
        let mut printer = ProgressPrinter::final_only(Vec::new());
        AnnealRunner::run_with_observer(&config, &mut printer).unwrap();
        let text = String::from_utf8(printer.finish().unwrap()).unwrap();
        assert_eq!(text.lines().count(), 6);
        assert!(text.starts_with("4.0\n"));
        assert!(!text.contains(SUCCESS_MARKER));
    }

    #[derive(Debug)]
    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_surfaces_on_finish() {
        let config = NetworkConfig::new(4).with_max_iterations(50).with_seed(1);
        let mut printer = ProgressPrinter::new(FailingWriter);
        AnnealRunner::run_with_observer(&config, &mut printer).unwrap();
        let err = printer.finish().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
