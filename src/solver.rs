use std::mem::swap;

use log::{debug, info};

use crate::board::{Grid, Score};
use crate::cell::Plugs;
use crate::connectivity::{link, RowMask};
use crate::frontier::Frontier;
use crate::profile::{Stage, Transition};
use crate::solution::Solution;

/// Finds the heaviest thread through a [`Grid`] one column at a time, from the rightmost column to the leftmost.
///
/// Each column is solved against the frontier left by the columns to its right:
/// every legal assignment of [`Plugs`] to the column's cells is enumerated, checked against every compatible frontier entry,
/// and the survivors become the next frontier.
///
/// Use [`Self::finish`] to solve all at once, or call [`Self::advance`] repeatedly to inspect the best score found so far after each column.
/// A solver holds exclusive state and must not be advanced from two places at once; [`Solution`]s it hands out are independent snapshots.
pub struct Solver {
    grid: Grid,
    current: Frontier,
    next: Frontier,
    // columns not yet solved; the next column to solve is `remaining - 1`
    remaining: usize,
}

impl Solver {
    /// Prepare to solve `grid`, positioned at its last column.
    pub fn begin(grid: Grid) -> Self {
        let rows = grid.rows();
        let mut current = Frontier::with_rows(rows);
        current.seed();

        Self {
            remaining: grid.cols(),
            next: Frontier::with_rows(rows),
            current,
            grid,
        }
    }

    /// The grid being solved.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of columns yet to be solved.
    pub fn remaining_columns(&self) -> usize {
        self.remaining
    }

    /// Whether every column has been solved.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Solve the next column and report progress.
    ///
    /// After the last column this is the final answer, as from [`Self::finish`].
    /// Before that it is the best scoring partial thread among all states, finished or not, which is an optimistic estimate.
    /// Returns `None`, doing nothing, once every column has been solved.
    pub fn advance(&mut self) -> Option<Solution> {
        let column = self.remaining.checked_sub(1)?;
        self.solve_column(column);

        Some(if self.is_exhausted() {
            self.terminal()
        } else {
            self.snapshot()
        })
    }

    /// Solve every remaining column and return the heaviest thread.
    ///
    /// If no thread exists, the solution scores 0 and has no columns.
    pub fn finish(mut self) -> Solution {
        while let Some(column) = self.remaining.checked_sub(1) {
            self.solve_column(column);
        }

        self.terminal()
    }

    fn solve_column(&mut self, column: usize) {
        self.next.clear();

        let mut expansion = ColumnExpansion {
            grid: &self.grid,
            column,
            parents: &self.current,
            children: &mut self.next,
            choice: Vec::with_capacity(self.grid.rows()),
            rejected: 0,
        };
        expansion.expand(Transition::default(), 0, Stage::EMPTY, 0);
        let rejected = expansion.rejected;

        swap(&mut self.current, &mut self.next);
        self.remaining = column;

        debug!(
            "column {column}: {} entries across {} profiles, {rejected} loops rejected",
            self.current.entries().count(),
            self.current.occupied(),
        );
    }

    fn terminal(&self) -> Solution {
        let solution = match self.current.closed() {
            None => Solution::empty(self.grid.dims()),
            Some(entry) => Solution::from_entry(self.grid.dims(), self.remaining, entry),
        };

        info!("solved {}x{} grid, best thread scores {}", self.grid.cols(), self.grid.rows(), solution.score());
        solution
    }

    fn snapshot(&self) -> Solution {
        match self.current.best() {
            None => Solution::empty(self.grid.dims()),
            Some(entry) => Solution::from_entry(self.grid.dims(), self.remaining, entry),
        }
    }
}

/// Enumeration of one column's assignments, top row first.
struct ColumnExpansion<'a> {
    grid: &'a Grid,
    column: usize,
    parents: &'a Frontier,
    children: &'a mut Frontier,
    // choices for the rows above the one being enumerated
    choice: Vec<Plugs>,
    rejected: usize,
}

impl ColumnExpansion<'_> {
    fn expand(&mut self, transition: Transition, gain: Score, stage: Stage, crossings: RowMask) {
        let row = self.choice.len();
        let rows = self.grid.rows();
        if row == rows {
            self.commit(transition, gain, stage, crossings);
            return;
        }

        let weight = self.grid.weight_at(row, self.column);
        for plugs in Plugs::CATALOGUE {
            if !plugs.admits(weight, stage) || !plugs.fits_below(self.choice.last(), row, rows) {
                continue;
            }

            let crossings = if plugs.plugs_left() { crossings | (1 << row) } else { crossings };
            let gain = if plugs.is_used() { gain + Score::from(weight) } else { gain };

            self.choice.push(plugs);
            self.expand(transition.push(&plugs), gain, stage.after(&plugs), crossings);
            self.choice.pop();
        }
    }

    /// File the completed column against every frontier entry it can continue.
    fn commit(&mut self, transition: Transition, gain: Score, stage: Stage, crossings: RowMask) {
        let parents = self.parents;

        for parent_digit in stage.parent_digits() {
            let profile = transition.to_key(stage.child_digit(parent_digit));

            for parent in parents.bucket(transition.from_key(parent_digit)) {
                match link(&self.choice, parent.key, crossings) {
                    Some(key) => self.children.offer(profile, key, parent.score + gain, &parent.trail, &self.choice),
                    None => self.rejected += 1,
                }
            }
        }
    }
}
