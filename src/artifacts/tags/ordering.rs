//! Tie-break rule for tags competing for the same commit
//!
//! Newer tags come first. Tags that are equally new, or whose age is unknown, are
//! ordered by short name so the result never depends on enumeration order. A tag
//! with a known age sorts before one without, which keeps the rule a total order.

use derive_new::new;
use std::cmp::Ordering;

/// The part of a tag the tie-break rule looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct TagVersion<'t> {
    /// Seconds since the Unix epoch, if known
    timestamp: Option<i64>,
    /// Short tag name, e.g. `v1.0`
    name: &'t str,
}

pub fn compare_tags(a: &TagVersion<'_>, b: &TagVersion<'_>) -> Ordering {
    b.timestamp
        .cmp(&a.timestamp)
        .then_with(|| a.name.cmp(b.name))
}

impl PartialOrd for TagVersion<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TagVersion<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_tags(self, other)
    }
}
