//! Profile keys: the shape of a column boundary.
//!
//! A boundary between two columns is summarised by one base 3 digit per row plus a trailing stage digit.
//! Row digits say whether the thread crosses the boundary at that row and which way:
//! none, leftward (travelling towards column 0) or rightward.
//! The stage digit records how much of the thread's ends have been placed in the columns already solved:
//! neither, only the start, or both.
//!
//! Row 0 is the most significant digit, so a boundary with no crossings at all has key equal to its stage digit.

use std::cmp::max;
use std::ops::{BitOr, RangeInclusive};

use crate::cell::Plugs;

/// Index of a bucket of the solver's frontier.
pub type ProfileKey = usize;

pub(crate) const NO_PLUG: usize = 0;
pub(crate) const PLUG_LEFTWARD: usize = 1;
pub(crate) const PLUG_RIGHTWARD: usize = 2;

/// Stage digit: neither end of the thread placed yet.
pub(crate) const OPEN: usize = 0;
/// Stage digit: the start is placed, the end is not.
pub(crate) const STARTED_ONLY: usize = 1;
/// Stage digit: both ends are placed.
pub(crate) const CLOSED: usize = 2;

/// The key of the boundary every finished thread must reach: no crossings, both ends placed.
pub const CLOSED_KEY: ProfileKey = CLOSED;

/// Number of distinct profile keys for a column of `rows` cells, 3^(rows + 1).
pub fn profile_count(rows: usize) -> usize {
    3usize.pow(rows as u32 + 1)
}

/// Which thread ends have been placed while enumerating a single column.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Stage(u8);

impl Stage {
    pub(crate) const EMPTY: Self = Self(0);
    /// A start pair `(None, _)` is in the column.
    pub(crate) const STARTED: Self = Self(0x1);
    /// An end pair `(_, None)` is in the column.
    pub(crate) const ENDED: Self = Self(0x2);

    pub(crate) fn is_empty(self) -> bool {
        self == Self::EMPTY
    }

    pub(crate) fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// The stage after placing `plugs` in a column currently at `self`.
    pub(crate) fn after(self, plugs: &Plugs) -> Self {
        match (plugs.entry, plugs.exit) {
            (None, Some(_)) => self | Self::STARTED,
            (Some(_), None) => self | Self::ENDED,
            _ => self,
        }
    }

    /// Stage digits of the solved region this column can continue.
    ///
    /// A column holding the start continues only regions with no ends; one holding just the end needs the start already placed.
    pub(crate) fn parent_digits(self) -> RangeInclusive<usize> {
        if self.contains(Self::STARTED) {
            OPEN..=OPEN
        } else if self == Self::ENDED {
            STARTED_ONLY..=STARTED_ONLY
        } else {
            OPEN..=CLOSED
        }
    }

    /// Stage digit of the region once this column is added to a region at `parent`.
    pub(crate) fn child_digit(self, parent: usize) -> usize {
        let own = if self.contains(Self::ENDED) {
            CLOSED
        } else if self == Self::STARTED {
            STARTED_ONLY
        } else {
            OPEN
        };

        max(own, parent)
    }
}

impl BitOr for Stage {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

/// Row digit `plugs` contributes to the boundary on its right, the one already solved.
pub(crate) fn right_digit(plugs: &Plugs) -> usize {
    use crate::shape::Step::{Left, Right};

    if plugs.entry == Some(Left) {
        PLUG_LEFTWARD
    } else if plugs.exit == Some(Right) {
        PLUG_RIGHTWARD
    } else {
        NO_PLUG
    }
}

/// Row digit `plugs` contributes to the boundary on its left, the one the next column will read.
pub(crate) fn left_digit(plugs: &Plugs) -> usize {
    use crate::shape::Step::{Left, Right};

    if plugs.entry == Some(Right) {
        PLUG_RIGHTWARD
    } else if plugs.exit == Some(Left) {
        PLUG_LEFTWARD
    } else {
        NO_PLUG
    }
}

/// Row digits of both boundaries of a column, accumulated row by row from the top.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Transition {
    pub(crate) from: usize,
    pub(crate) to: usize,
}

impl Transition {
    pub(crate) fn push(self, plugs: &Plugs) -> Self {
        Self {
            from: self.from * 3 + right_digit(plugs),
            to: self.to * 3 + left_digit(plugs),
        }
    }

    /// Key of the already solved boundary this column reads, given that boundary's stage digit.
    pub(crate) fn from_key(&self, stage_digit: usize) -> ProfileKey {
        self.from * 3 + stage_digit
    }

    /// Key of the boundary this column leaves behind, given the new stage digit.
    pub(crate) fn to_key(&self, stage_digit: usize) -> ProfileKey {
        self.to * 3 + stage_digit
    }
}
