//! Board state: an N×N grid of binary units.
//!
//! `board.get(x, y) == true` means a queen occupies row `x`, column `y`.
//! Cells are stored row-major in a flat vector.

use crate::error::ConfigError;
use std::fmt;

/// An N×N grid of binary units.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    size: usize,
    cells: Vec<bool>,
}

impl Board {
    /// Creates a board with every unit inactive.
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Creates a board with one queen per row on the main diagonal.
    pub fn identity(size: usize) -> Self {
        let mut board = Self::empty(size);
        for i in 0..size {
            board.set(i, i, true);
        }
        board
    }

    /// Creates a board with one queen per row, `columns[row]` giving its column.
    ///
    /// # Examples
    ///
    /// ```
    /// use queen_anneal::Board;
    ///
    /// let board = Board::from_columns(&[1, 3, 0, 2]).unwrap();
    /// assert!(board.is_feasible());
    /// ```
    pub fn from_columns(columns: &[usize]) -> Result<Self, ConfigError> {
        let size = columns.len();
        let mut board = Self::empty(size);
        for (row, &column) in columns.iter().enumerate() {
            if column >= size {
                return Err(ConfigError::ColumnOutOfRange { row, column, size });
            }
            board.set(row, column, true);
        }
        Ok(board)
    }

    /// Creates a board from explicit cell coordinates.
    ///
    /// # Panics
    /// Panics if a coordinate lies outside the board.
    pub fn from_cells(size: usize, active: &[(usize, usize)]) -> Self {
        let mut board = Self::empty(size);
        for &(x, y) in active {
            board.set(x, y, true);
        }
        board
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major view of all units.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        x * self.size + y
    }

    /// Returns the unit at row `x`, column `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Sets the unit at row `x`, column `y`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, active: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = active;
    }

    /// Number of active units.
    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Coordinates of active units in row-major order.
    pub fn active_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &c)| c)
            .map(move |(i, _)| (i / n, i % n))
    }

    /// Column of the queen in each row, if every row holds exactly one.
    pub fn queen_columns(&self) -> Option<Vec<usize>> {
        (0..self.size)
            .map(|x| {
                let mut cols = (0..self.size).filter(|&y| self.get(x, y));
                match (cols.next(), cols.next()) {
                    (Some(y), None) => Some(y),
                    _ => None,
                }
            })
            .collect()
    }

    /// Returns `true` if exactly N queens are placed and none attack another.
    ///
    /// Scans cells once in row-major order while maintaining a coverage mask.
    /// Each active cell marks its row, column and both diagonals as covered;
    /// an active cell found already covered shares a line with an earlier
    /// queen.
    pub fn is_feasible(&self) -> bool {
        let n = self.size;
        let mut covered = vec![false; n * n];
        let mut count = 0usize;

        for x in 0..n {
            for y in 0..n {
                if !self.get(x, y) {
                    continue;
                }
                count += 1;

                if covered[x * n + y] {
                    return false;
                }

                for i in 0..n {
                    covered[i * n + y] = true;
                    covered[x * n + i] = true;

                    // "/" diagonal: i - j == x - y
                    if let Some(j) = (i + y).checked_sub(x) {
                        if j < n {
                            covered[i * n + j] = true;
                        }
                    }
                    // "\" diagonal: i + j == x + y
                    if let Some(j) = (x + y).checked_sub(i) {
                        if j < n {
                            covered[i * n + j] = true;
                        }
                    }
                }
            }
        }

        count == n
    }

    /// Iterates over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks(0) panics; an empty board has no rows anyway.
        self.cells.chunks(self.size.max(1))
    }
}

impl fmt::Display for Board {
    /// One line per row, e.g. `[0, 1, 0, 0]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            write!(f, "[")?;
            for (i, &cell) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", u8::from(cell))?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
