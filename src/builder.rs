use std::cmp::min;
use std::num::NonZero;
use std::ops::IndexMut;

use ndarray::{Array2, AssignElem};
use thiserror::Error;

use crate::board::{Grid, Weight, MAX_ROWS};
use crate::location::{Dimension, Location};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum BuilderInvalidReason {
    /// A weight was set outside the bounds specified by `dims` on a builder.
    #[error("location lies outside the grid")]
    FeatureOutOfBounds,
    /// Rows handed to [`GridBuilder::from_rows`] were not all the same length.
    #[error("rows differ in length")]
    RaggedRows,
    /// The grid is taller than the row limit.
    #[error("grid has {rows} rows but at most {limit} are allowed")]
    TooManyRows {
        /// Rows requested.
        rows: usize,
        /// Rows allowed.
        limit: usize,
    },
    /// No rows, or rows without cells, were handed to [`GridBuilder::from_rows`].
    #[error("grid has no cells")]
    EmptyGrid,
}

/// Functionality all grid builders must implement.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
pub trait Builder: Clone {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(width, height)` order.
    /// Every cell starts at weight 0.
    ///
    /// May cause the builder to enter a [`TooManyRows`](BuilderInvalidReason::TooManyRows) invalid state.
    fn with_dims(dims: (Dimension, Dimension)) -> Self;
    /// Set the weight of the cell at `location`.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if `location` is out of bounds.
    /// If the builder is already in an invalid state, this function does nothing.
    fn set_weight(&mut self, location: Location, weight: Weight) -> &mut Self;
    /// Keep the thread out of the cell at `location`. Equivalent to setting its weight to 0.
    ///
    /// Same conditions as [`Self::set_weight`].
    fn block(&mut self, location: Location) -> &mut Self {
        self.set_weight(location, 0)
    }
    /// Set every cell to `weight`.
    ///
    /// If the builder is already in an invalid state, this function does nothing.
    fn fill(&mut self, weight: Weight) -> &mut Self;
    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>>;
    /// Convert the state of this builder into a [`Grid`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    fn build(&self) -> Result<Grid, &Vec<BuilderInvalidReason>>;
}

/// A builder for rectangular grids of weights.
#[derive(Clone, Debug)]
pub struct GridBuilder {
    // width, height
    dims: (Dimension, Dimension),
    weights: Array2<Weight>,
    row_limit: usize,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self::with_dims((NonZero::<usize>::MIN.saturating_add(4), NonZero::<usize>::MIN.saturating_add(4)))
    }
}

impl Builder for GridBuilder {
    fn with_dims(dims: (Dimension, Dimension)) -> Self {
        let mut builder = Self {
            dims,
            weights: Array2::zeros((dims.1.get(), dims.0.get())),
            row_limit: MAX_ROWS,
            invalid_reasons: Default::default(),
        };
        builder.check_rows();

        builder
    }

    fn set_weight(&mut self, location: Location, weight: Weight) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !location.is_within(self.dims) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        self.weights.index_mut(location.as_index()).assign_elem(weight);
        self
    }

    fn fill(&mut self, weight: Weight) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.weights.fill(weight);
        self
    }

    fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    fn build(&self) -> Result<Grid, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(Grid {
            weights: self.weights.clone(),
            dims: self.dims,
        })
    }
}

impl GridBuilder {
    /// Start from nested rows of weights, row 0 first.
    ///
    /// May cause the builder to enter an [`EmptyGrid`](BuilderInvalidReason::EmptyGrid), [`RaggedRows`](BuilderInvalidReason::RaggedRows)
    /// or [`TooManyRows`](BuilderInvalidReason::TooManyRows) invalid state.
    pub fn from_rows(rows: Vec<Vec<Weight>>) -> Self {
        let height = NonZero::new(rows.len());
        let width = rows.first().and_then(|row| NonZero::new(row.len()));

        let (Some(width), Some(height)) = (width, height) else {
            let mut builder = Self::with_dims((NonZero::<usize>::MIN, NonZero::<usize>::MIN));
            builder.invalid_reasons.push(BuilderInvalidReason::EmptyGrid);
            return builder;
        };

        let mut builder = Self::with_dims((width, height));
        if rows.iter().any(|row| row.len() != width.get()) {
            builder.invalid_reasons.push(BuilderInvalidReason::RaggedRows);
            return builder;
        }

        for (y, row) in rows.into_iter().enumerate() {
            for (x, weight) in row.into_iter().enumerate() {
                builder.set_weight(Location(x, y), weight);
            }
        }

        builder
    }

    /// Lower the number of rows this builder accepts. Limits above [`MAX_ROWS`] are clamped to it.
    ///
    /// May cause the builder to enter a [`TooManyRows`](BuilderInvalidReason::TooManyRows) invalid state if the grid is already taller.
    pub fn with_row_limit(&mut self, limit: usize) -> &mut Self {
        self.row_limit = min(limit, MAX_ROWS);
        self.check_rows();
        self
    }

    fn check_rows(&mut self) {
        let rows = self.dims.1.get();
        if rows > self.row_limit && self.invalid_reasons.is_empty() {
            self.invalid_reasons.push(BuilderInvalidReason::TooManyRows { rows, limit: self.row_limit });
        }
    }
}

impl TryFrom<Vec<Vec<Weight>>> for Grid {
    type Error = Vec<BuilderInvalidReason>;

    fn try_from(rows: Vec<Vec<Weight>>) -> Result<Self, Self::Error> {
        GridBuilder::from_rows(rows).build().map_err(Clone::clone)
    }
}
