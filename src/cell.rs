use crate::board::Weight;
use crate::profile::Stage;
use crate::shape::Step::{self, Down, Left, Right, Up};

/// The pair of plugs a single cell uses, as directions of motion.
///
/// `entry` is the direction the thread is travelling when it arrives in this cell and `exit` the direction it travels when it leaves.
/// So `entry == Some(Step::Left)` means the thread arrives from the right neighbor, and `exit == Some(Step::Left)` means it departs into the left neighbor.
/// A missing entry marks the first cell of the thread and a missing exit the last; with both missing the cell is unused.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Plugs {
    /// Direction of motion on arrival, or `None` where the thread starts.
    pub entry: Option<Step>,
    /// Direction of motion on departure, or `None` where the thread ends.
    pub exit: Option<Step>,
}

/// Coarse classification of [`Plugs`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PlugsKind {
    /// Not on the thread.
    Unused,
    /// Passes straight through.
    Straight,
    /// Turns a corner.
    Turn,
    /// The thread begins here.
    Start,
    /// The thread finishes here.
    End,
}

const fn plugs(entry: Option<Step>, exit: Option<Step>) -> Plugs {
    Plugs { entry, exit }
}

impl Plugs {
    /// The unused cell.
    pub const UNUSED: Self = plugs(None, None);

    /// Every legal pair, in enumeration order: unused, straights, turns, ends, starts.
    ///
    /// Reversals such as `(Left, Right)` are absent since a thread cannot leave through the side it came in by.
    pub const CATALOGUE: [Self; 21] = [
        Self::UNUSED,
        plugs(Some(Left), Some(Left)),
        plugs(Some(Right), Some(Right)),
        plugs(Some(Up), Some(Up)),
        plugs(Some(Down), Some(Down)),
        plugs(Some(Up), Some(Left)),
        plugs(Some(Down), Some(Left)),
        plugs(Some(Right), Some(Down)),
        plugs(Some(Right), Some(Up)),
        plugs(Some(Up), Some(Right)),
        plugs(Some(Down), Some(Right)),
        plugs(Some(Left), Some(Down)),
        plugs(Some(Left), Some(Up)),
        plugs(Some(Left), None),
        plugs(Some(Right), None),
        plugs(Some(Up), None),
        plugs(Some(Down), None),
        plugs(None, Some(Left)),
        plugs(None, Some(Right)),
        plugs(None, Some(Up)),
        plugs(None, Some(Down)),
    ];

    /// Classify this pair.
    pub fn kind(&self) -> PlugsKind {
        match (self.entry, self.exit) {
            (None, None) => PlugsKind::Unused,
            (None, Some(_)) => PlugsKind::Start,
            (Some(_), None) => PlugsKind::End,
            (Some(entry), Some(exit)) if entry == exit => PlugsKind::Straight,
            (Some(_), Some(_)) => PlugsKind::Turn,
        }
    }

    /// Whether the thread passes through this cell at all.
    pub fn is_used(&self) -> bool {
        *self != Self::UNUSED
    }

    /// The sides of the cell the thread crosses, as directions pointing out of the cell.
    pub fn sides(&self) -> impl Iterator<Item=Step> {
        self.entry.map(|step| step.invert()).into_iter().chain(self.exit)
    }

    /// Whether the thread crosses into the column to the right through this cell.
    pub(crate) fn plugs_right(&self) -> bool {
        self.entry == Some(Left) || self.exit == Some(Right)
    }

    /// Whether the thread crosses into the column to the left through this cell.
    pub(crate) fn plugs_left(&self) -> bool {
        self.entry == Some(Right) || self.exit == Some(Left)
    }

    /// Whether this cell is joined to the cell above it.
    pub(crate) fn plugs_up(&self) -> bool {
        self.entry == Some(Down) || self.exit == Some(Up)
    }

    /// Whether this pair may be placed on a cell of `weight` while the column has accumulated `stage`.
    ///
    /// Zero weight cells stay unused. A column takes at most one start, and only before any end; it takes at most one end.
    pub(crate) fn admits(&self, weight: Weight, stage: Stage) -> bool {
        if !self.is_used() {
            return true;
        }
        if weight == 0 {
            return false;
        }

        match self.kind() {
            PlugsKind::Start => stage.is_empty(),
            PlugsKind::End => !stage.contains(Stage::ENDED),
            _ => true,
        }
    }

    /// Whether this pair agrees with `above`, the choice for the row above (`None` on the top row), on row `row` of a column of `rows`.
    pub(crate) fn fits_below(&self, above: Option<&Plugs>, row: usize, rows: usize) -> bool {
        if let Some(above) = above {
            // whatever crosses the shared edge must be matched on both sides
            if (above.entry == Some(Up) && self.exit != Some(Up)) || (above.exit == Some(Down) && self.entry != Some(Down)) {
                return false;
            }
        }

        if self.entry == Some(Down) && above.map_or(true, |above| above.exit != Some(Down)) {
            return false;
        }
        if self.exit == Some(Up) && above.map_or(true, |above| above.entry != Some(Up)) {
            return false;
        }

        let bottom = row + 1 == rows;
        !(bottom && (self.exit == Some(Down) || self.entry == Some(Up)))
    }

    /// A single character depicting this pair.
    pub fn glyph(&self) -> char {
        match self.kind() {
            PlugsKind::Unused => '.',
            PlugsKind::Start => 'S',
            PlugsKind::End => 'E',
            _ => {
                let crosses = |side: Step| self.sides().any(|s| s == side);
                match (crosses(Up), crosses(Down), crosses(Left), crosses(Right)) {
                    (false, false, true, true) => '─',
                    (true, true, false, false) => '│',
                    (false, true, false, true) => '┌',
                    (false, true, true, false) => '┐',
                    (true, false, false, true) => '└',
                    (true, false, true, false) => '┘',
                    // reversals are not in the catalogue
                    _ => '?',
                }
            }
        }
    }
}
