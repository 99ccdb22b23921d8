//! Connectivity keys: which crossings of a column boundary are joined through the solved region.

use log::trace;
use petgraph::unionfind::UnionFind;

use crate::cell::Plugs;

const LABEL_BITS: usize = 4;
const LABEL_MASK: u64 = (1 << LABEL_BITS) - 1;

/// Rows of a column, one bit per row with row 0 lowest.
pub(crate) type RowMask = u32;

/// Which crossings of a column boundary belong to the same piece of thread.
///
/// Each crossing row carries a small label; rows sharing a label are joined through the solved region.
/// Labels are handed out in row order starting from 0, so two boundaries that the unsolved columns cannot tell apart share a key.
/// Rows without a crossing carry label 0, which is only meaningful together with the boundary's profile.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ConnectivityKey(u64);

impl ConnectivityKey {
    /// The key of a boundary without crossings.
    pub const EMPTY: Self = Self(0);

    /// The key giving row `i` the label `labels[i]`. Labels are truncated to 4 bits.
    pub fn from_labels(labels: &[u64]) -> Self {
        Self(labels.iter()
            .enumerate()
            .fold(0, |key, (row, label)| key | (label & LABEL_MASK) << (row * LABEL_BITS)))
    }

    /// The label carried by `row`.
    pub fn label(&self, row: usize) -> u64 {
        (self.0 >> (row * LABEL_BITS)) & LABEL_MASK
    }
}

/// Join a fully chosen `column` onto the solved region described by `parent`.
///
/// Returns the key of the column's left boundary, restricted to the rows in `crossings`,
/// or `None` if the column would close a loop.
pub(crate) fn link(column: &[Plugs], parent: ConnectivityKey, crossings: RowMask) -> Option<ConnectivityKey> {
    let mut groups = UnionFind::<usize>::new(column.len());

    for (row, plugs) in column.iter().enumerate() {
        if let Some(above) = row.checked_sub(1).filter(|_| plugs.plugs_up()) {
            groups.union(above, row);
        }

        if !plugs.plugs_right() {
            continue;
        }

        // the other end of this crossing's piece, if it comes back into this column higher up
        let label = parent.label(row);
        let partner = (0..row).rev()
            .find(|&other| column[other].plugs_right() && parent.label(other) == label);

        if let Some(partner) = partner {
            if !groups.union(partner, row) {
                trace!("rows {partner} and {row} are already joined, rejecting loop");
                return None;
            }
        }
    }

    Some(normalize(&mut groups, column.len(), crossings))
}

fn normalize(groups: &mut UnionFind<usize>, rows: usize, crossings: RowMask) -> ConnectivityKey {
    let mut labels: Vec<Option<u64>> = vec![None; rows];
    let mut next = 0;
    let mut key = 0;

    for row in (0..rows).filter(|row| crossings & (1 << row) != 0) {
        let root = groups.find_mut(row);
        let label = *labels[root].get_or_insert_with(|| {
            next += 1;
            next - 1
        });
        debug_assert!(label <= LABEL_MASK);

        key |= label << (row * LABEL_BITS);
    }

    ConnectivityKey(key)
}
