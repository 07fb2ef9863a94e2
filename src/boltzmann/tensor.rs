//! Pairwise interaction weights between board cells.

use super::config::PenaltyWeights;
use crate::board::Board;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Flat N×N×N×N coupling tensor.
///
/// `get(x, y, a, b)` is stored at `x·N³ + y·N² + a·N + b`, so the couplings
/// of one cell to every other cell form a contiguous N² slice laid out like
/// the board itself.
///
/// Every coupling is symmetric in its two cells and zero on the diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTensor {
    size: usize,
    weights: Vec<f64>,
}

impl WeightTensor {
    /// Builds the tensor for an N×N board.
    pub fn new(size: usize, penalties: &PenaltyWeights) -> Self {
        let plane = size * size;
        let mut weights = vec![0.0; plane * plane];

        #[cfg(feature = "parallel")]
        weights
            .par_chunks_mut(plane.max(1))
            .enumerate()
            .for_each(|(cell, row)| fill_couplings(size, cell, penalties, row));

        #[cfg(not(feature = "parallel"))]
        weights
            .chunks_mut(plane.max(1))
            .enumerate()
            .for_each(|(cell, row)| fill_couplings(size, cell, penalties, row));

        Self { size, weights }
    }

    /// Board side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All N⁴ weights in stride order.
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    #[inline]
    fn index(&self, x: usize, y: usize, a: usize, b: usize) -> usize {
        let n = self.size;
        ((x * n + y) * n + a) * n + b
    }

    /// Coupling between cell `(x, y)` and cell `(a, b)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize, a: usize, b: usize) -> f64 {
        self.weights[self.index(x, y, a, b)]
    }

    /// Couplings from cell `(x, y)` to every cell, row-major.
    #[inline]
    pub fn couplings(&self, x: usize, y: usize) -> &[f64] {
        let plane = self.size * self.size;
        let start = (x * self.size + y) * plane;
        &self.weights[start..start + plane]
    }

    /// Weighted sum of active units seen by cell `(x, y)`.
    pub fn local_field(&self, x: usize, y: usize, board: &Board) -> f64 {
        self.couplings(x, y)
            .iter()
            .zip(board.cells())
            .filter(|(_, &active)| active)
            .map(|(w, _)| w)
            .sum()
    }

    /// Energy of `board`:
    /// `-½·Σ w·s·s + threshold·Σ s + N`.
    pub fn energy(&self, board: &Board, threshold: f64) -> f64 {
        debug_assert_eq!(board.size(), self.size);

        let active: Vec<(usize, usize)> = board.active_cells().collect();

        #[cfg(feature = "parallel")]
        let interaction: f64 = active
            .par_iter()
            .map(|&(x, y)| self.local_field(x, y, board))
            .sum();

        #[cfg(not(feature = "parallel"))]
        let interaction: f64 = active
            .iter()
            .map(|&(x, y)| self.local_field(x, y, board))
            .sum();

        -interaction / 2.0 + threshold * active.len() as f64 + self.size as f64
    }
}

/// Fills the couplings of one cell (given by its row-major index).
fn fill_couplings(size: usize, cell: usize, penalties: &PenaltyWeights, row: &mut [f64]) {
    let (x, y) = (cell / size, cell % size);
    for (other, w) in row.iter_mut().enumerate() {
        let (a, b) = (other / size, other % size);
        *w = coupling(x, y, a, b, penalties);
    }
}

/// Coupling strength between two cells. Each shared line adds a penalty of
/// `-2 × coefficient`; a cell has no coupling with itself.
fn coupling(x: usize, y: usize, a: usize, b: usize, p: &PenaltyWeights) -> f64 {
    if x == a && y == b {
        return 0.0;
    }

    let mut w = 0.0;
    if x == a {
        w -= 2.0 * p.row;
    }
    if y == b {
        w -= 2.0 * p.column;
    }
    // x - y == a - b, kept in unsigned arithmetic
    if x + b == a + y {
        w -= 2.0 * p.diagonal;
    }
    if x + y == a + b {
        w -= 2.0 * p.anti_diagonal;
    }
    w
}
