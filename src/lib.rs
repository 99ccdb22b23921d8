#![warn(missing_docs)]

//! # `plumbline`
//!
//! An exact solver for threading the heaviest single path through a rectangular grid of weighted cells.
//! Begin by building a grid using [`GridBuilder`](builder::GridBuilder) or by converting nested rows with [`TryFrom`],
//! then call [`solve()`](crate::Grid::solve) for the answer, or drive a [`Solver`] one column at a time to watch it improve.
//!
//! A thread is a simple path: it starts in one cell, ends in another, and passes through each cell it uses once.
//! Cells of weight 0 are off limits. The score of a thread is the sum of the weights of its cells.
//! A lone cell is not a thread, so grids without two adjacent usable cells score 0.
//!
//! # Internals
//! The search is a "broken profile" dynamic program swept over columns from right to left.
//! Between two columns, all that matters about the solved region to the right is
//! 1. which rows the thread crosses the boundary at, and in which direction,
//! 2. whether the start, or both the start and the end, of the thread have been placed, and
//! 3. which crossings are already joined to each other through the solved region.
//!
//! The first two make up a [`ProfileKey`](profile::ProfileKey), one base 3 digit per row plus one for the ends, so there are 3^(rows + 1) profiles.
//! The third is a [`ConnectivityKey`](connectivity::ConnectivityKey) labelling crossings that share a piece of thread.
//! For every profile the frontier keeps the best score per connectivity key.
//!
//! A column is solved by enumerating, top row first, every assignment of [`Plugs`] (an entry and exit direction per cell) whose vertical plugs agree,
//! and then joining that column onto each frontier entry with a matching profile.
//! The join runs a union-find over the column's rows; a join that would tie two already connected crossings together closes a loop and is dropped.
//! Each frontier entry remembers the column choices that produced it, so the winning thread is read straight off the final entry.
//!
//! The cost is exponential in the number of rows and linear in the number of columns, so keep grids short; see [`MAX_ROWS`].

pub use board::{Grid, Score, Weight, MAX_ROWS};
pub use builder::Builder;
pub use cell::{Plugs, PlugsKind};
pub use location::{Dimension, Location};
pub use shape::Step;
pub use solution::{Route, Solution};
pub use solver::Solver;

pub(crate) mod board;
pub mod builder;
pub(crate) mod cell;
pub mod connectivity;
pub(crate) mod frontier;
pub(crate) mod location;
pub mod profile;
pub(crate) mod shape;
pub(crate) mod solution;
pub(crate) mod solver;
#[cfg(feature = "wasm")]
pub mod wasm;
