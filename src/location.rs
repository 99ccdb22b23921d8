use std::num::NonZero;

use ndarray::Ix;

pub(crate) type Coord = usize;
/// A strictly positive grid extent.
pub type Dimension = NonZero<Coord>;

/// A cell of a grid as `(x, y)`: `x` counts columns from the left and `y` rows from the top.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// Whether this location lies on a grid of `dims`, given in `(width, height)` order.
    pub fn is_within(&self, dims: (Dimension, Dimension)) -> bool {
        self.0 < dims.0.get() && self.1 < dims.1.get()
    }

    /// The `(row, column)` index of this location in an ndarray laid out like the grid.
    pub(crate) fn as_index(&self) -> (Ix, Ix) {
        (self.1, self.0)
    }

    // leaving the top or left edge wraps to a huge coordinate, which `is_within` then rejects
    pub(crate) fn offset_by(self, (dx, dy): (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(dx), self.1.wrapping_add_signed(dy))
    }
}

impl From<(Ix, Ix)> for Location {
    /// Convert a `(row, column)` ndarray index.
    fn from((row, column): (Ix, Ix)) -> Self {
        Self(column, row)
    }
}
