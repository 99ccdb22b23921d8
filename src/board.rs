use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;

use crate::location::{Dimension, Location};
use crate::solution::Solution;
use crate::solver::Solver;

/// The weight of a single cell. A weight of 0 keeps the thread out of that cell.
pub type Weight = u32;
/// The summed weight of the cells a thread passes through.
pub type Score = u64;

/// The most rows any [`Grid`] may have.
///
/// The solver's state space grows as 3^(rows + 1); past this it no longer fits in memory in practice.
pub const MAX_ROWS: usize = 12;

/// A rectangular grid of cell weights.
///
/// [`Grid`]s should be built using a [`Builder`](crate::builder::Builder) such as [`GridBuilder`](crate::builder::GridBuilder),
/// or converted from nested rows with [`TryFrom`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    // indexed (row, column)
    pub(crate) weights: Array2<Weight>,
    // width, height
    pub(crate) dims: (Dimension, Dimension),
}

impl Grid {
    /// The dimensions of this grid, in `(width, height)` order.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.dims.1.get()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.dims.0.get()
    }

    /// The weight at `location`, or `None` if it lies outside the grid.
    pub fn weight(&self, location: Location) -> Option<Weight> {
        location.is_within(self.dims).then(|| self.weights[location.as_index()])
    }

    /// All weights, indexed `(row, column)`.
    pub fn weights(&self) -> &Array2<Weight> {
        &self.weights
    }

    pub(crate) fn weight_at(&self, row: usize, column: usize) -> Weight {
        self.weights[(row, column)]
    }

    /// Find the heaviest thread through this grid, solving every column in one go.
    ///
    /// Use [`Solver`] directly to watch the search progress column by column.
    pub fn solve(&self) -> Solution {
        Solver::begin(self.clone()).finish()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.weights.rows() {
            writeln!(f, "{}", row.iter().join(" "))?;
        }

        Ok(())
    }
}
