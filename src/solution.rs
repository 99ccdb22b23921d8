use std::fmt::{Display, Formatter};

use ndarray::Array2;

use crate::board::Score;
use crate::cell::{Plugs, PlugsKind};
use crate::frontier::FrontierEntry;
use crate::location::{Dimension, Location};

/// A thread found by a [`Solver`](crate::solver::Solver), together with its score.
///
/// The thread is stored as one [`Plugs`] assignment per solved column.
/// Columns are ordered left to right, which puts the most recently solved column first;
/// the first one is grid column [`first_column`](Self::first_column) and the last is always the grid's last column.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Solution {
    score: Score,
    // width, height
    dims: (Dimension, Dimension),
    first_column: usize,
    columns: Vec<Vec<Plugs>>,
}

impl Solution {
    pub(crate) fn empty(dims: (Dimension, Dimension)) -> Self {
        Self {
            score: 0,
            dims,
            first_column: dims.0.get(),
            columns: Vec::new(),
        }
    }

    pub(crate) fn from_entry(dims: (Dimension, Dimension), first_column: usize, entry: &FrontierEntry) -> Self {
        let columns: Vec<Vec<Plugs>> = entry.trail.columns().map(<[Plugs]>::to_vec).collect();
        debug_assert_eq!(first_column + columns.len(), dims.0.get());

        Self {
            score: entry.score,
            dims,
            first_column,
            columns,
        }
    }

    /// Total weight of the cells the thread passes through.
    pub fn score(&self) -> Score {
        self.score
    }

    /// The dimensions of the solved grid, in `(width, height)` order.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// The grid column described by the first entry of [`columns`](Self::columns).
    pub fn first_column(&self) -> usize {
        self.first_column
    }

    /// Per column assignments, left to right, each indexed by row.
    pub fn columns(&self) -> &[Vec<Plugs>] {
        &self.columns
    }

    /// Whether this solution describes no thread at all.
    pub fn is_empty(&self) -> bool {
        self.columns.iter().flatten().all(|plugs| !plugs.is_used())
    }

    /// Lay the thread out over the whole grid. Cells in unsolved columns are unused.
    pub fn route(&self) -> Route {
        let mut cells = Array2::from_elem((self.dims.1.get(), self.dims.0.get()), Plugs::UNUSED);

        for (offset, column) in self.columns.iter().enumerate() {
            for (row, plugs) in column.iter().enumerate() {
                cells[(row, self.first_column + offset)] = *plugs;
            }
        }

        Route { cells }
    }
}

/// A thread laid out cell by cell, as produced by [`Solution::route`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Route {
    // indexed (row, column)
    cells: Array2<Plugs>,
}

impl Route {
    /// The [`Plugs`] at `location`, or `None` if it lies outside the grid.
    pub fn get(&self, location: Location) -> Option<&Plugs> {
        self.cells.get(location.as_index())
    }

    /// All cells, indexed `(row, column)`.
    pub fn cells(&self) -> &Array2<Plugs> {
        &self.cells
    }

    /// Where the thread starts, if it does.
    pub fn start(&self) -> Option<Location> {
        self.cells.indexed_iter()
            .find(|(_, plugs)| plugs.kind() == PlugsKind::Start)
            .map(|(index, _)| Location::from(index))
    }

    /// The cells of the thread in order of travel, from its start.
    ///
    /// A partial thread from an unfinished solve is followed until it leaves the solved columns.
    /// Returns an empty path when there is no start.
    pub fn trace(&self) -> Vec<Location> {
        let Some(mut location) = self.start() else {
            return Vec::new();
        };

        let mut path = vec![location];
        // a well formed thread never revisits a cell, so this bounds the walk even if it is not
        while path.len() < self.cells.len() {
            let Some(step) = self.get(location).and_then(|plugs| plugs.exit) else {
                break;
            };

            let next = step.attempt_from(location);
            match self.get(next) {
                Some(plugs) if plugs.entry == Some(step) => {
                    path.push(next);
                    location = next;
                }
                _ => break,
            }
        }

        path
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows() {
            writeln!(f, "{}", row.iter().map(Plugs::glyph).collect::<String>())?;
        }

        Ok(())
    }
}
