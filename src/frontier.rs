use std::iter::successors;
use std::sync::Arc;

use crate::board::Score;
use crate::cell::Plugs;
use crate::connectivity::ConnectivityKey;
use crate::profile::{profile_count, ProfileKey, CLOSED_KEY};

#[derive(Debug)]
struct TrailNode {
    column: Box<[Plugs]>,
    rest: Trail,
}

/// The column choices that led to a frontier entry, most recently solved column first.
///
/// Trails are persistent: extending one leaves it untouched, so sibling entries share their common history.
#[derive(Clone, Debug, Default)]
pub(crate) struct Trail(Option<Arc<TrailNode>>);

impl Trail {
    pub(crate) fn push(&self, column: &[Plugs]) -> Self {
        Self(Some(Arc::new(TrailNode {
            column: column.into(),
            rest: self.clone(),
        })))
    }

    pub(crate) fn columns(&self) -> impl Iterator<Item=&[Plugs]> {
        successors(self.0.as_deref(), |node| node.rest.0.as_deref())
            .map(|node| &*node.column)
    }
}

impl Drop for Trail {
    // a trail holds one node per solved column; unlink it node by node
    fn drop(&mut self) {
        let mut next = self.0.take();
        while let Some(node) = next {
            next = Arc::into_inner(node).and_then(|mut node| node.rest.0.take());
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct FrontierEntry {
    pub(crate) key: ConnectivityKey,
    pub(crate) score: Score,
    pub(crate) trail: Trail,
}

/// The states surviving after some number of columns, bucketed by [`ProfileKey`].
///
/// Within a bucket at most one entry exists per [`ConnectivityKey`], the best scoring one found.
pub(crate) struct Frontier {
    buckets: Vec<Vec<FrontierEntry>>,
}

impl Frontier {
    pub(crate) fn with_rows(rows: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); profile_count(rows)],
        }
    }

    /// Reset to the state before any column: a single empty, scoreless entry.
    pub(crate) fn seed(&mut self) {
        self.clear();
        self.buckets[0].push(FrontierEntry {
            key: ConnectivityKey::EMPTY,
            score: 0,
            trail: Trail::default(),
        });
    }

    pub(crate) fn clear(&mut self) {
        self.buckets.iter_mut().for_each(Vec::clear);
    }

    pub(crate) fn bucket(&self, profile: ProfileKey) -> &[FrontierEntry] {
        &self.buckets[profile]
    }

    /// Record that `column` extends `parent` into state (`profile`, `key`) scoring `score`.
    ///
    /// An existing entry for the same state is only displaced by a strictly better score.
    pub(crate) fn offer(&mut self, profile: ProfileKey, key: ConnectivityKey, score: Score, parent: &Trail, column: &[Plugs]) {
        let bucket = &mut self.buckets[profile];

        match bucket.iter_mut().find(|entry| entry.key == key) {
            Some(existing) => {
                if score > existing.score {
                    existing.score = score;
                    existing.trail = parent.push(column);
                }
            }
            None => bucket.push(FrontierEntry {
                key,
                score,
                trail: parent.push(column),
            }),
        }
    }

    /// The finished thread, if one has been found.
    pub(crate) fn closed(&self) -> Option<&FrontierEntry> {
        debug_assert!(self.buckets[CLOSED_KEY].len() <= 1);
        self.buckets[CLOSED_KEY].first()
    }

    /// The highest scoring entry of all, finished or not, ignoring scores of 0.
    ///
    /// Ties go to the entry seen first in bucket order.
    pub(crate) fn best(&self) -> Option<&FrontierEntry> {
        self.entries()
            .fold(None, |best: Option<&FrontierEntry>, entry| match best {
                Some(best) if best.score >= entry.score => Some(best),
                _ if entry.score > 0 => Some(entry),
                _ => best,
            })
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item=&FrontierEntry> {
        self.buckets.iter().flatten()
    }

    /// Number of profiles with at least one entry.
    pub(crate) fn occupied(&self) -> usize {
        self.buckets.iter().filter(|bucket| !bucket.is_empty()).count()
    }
}
