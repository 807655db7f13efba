//! Per-observer replication baselines.

use crate::tags::Tag;
use std::collections::HashMap;

/// The sender-side view of what one observer has already seen.
///
/// The owner keeps one baseline per observer and passes it to
/// [`TagStackContainer::write_delta`](crate::TagStackContainer::write_delta)
/// on every sync. A fresh baseline makes the first delta carry the entire
/// container as additions.
#[derive(Clone, Debug, Default)]
pub struct ObserverBaseline {
    /// Container dirty key at the last sync.
    pub(crate) last_key: u64,

    /// Per-entry dirty key at the last sync, keyed by tag.
    pub(crate) seen: HashMap<Tag, u64>,
}

impl ObserverBaseline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stacks this observer has seen.
    pub fn seen_len(&self) -> usize {
        self.seen.len()
    }
}
