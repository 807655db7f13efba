//! Replicated container of tag stacks.

use crate::listener::TagStackListener;
use crate::replication::{ObserverBaseline, StackDelta, StackUpdate};
use crate::stacks::entry::TagStack;
use crate::tags::Tag;
use std::collections::HashMap;
use std::sync::Weak;
use tracing::{trace, warn};

/// Container of tag stacks.
///
/// Owns the ordered entry list (the replicated source of truth) and an
/// accelerated tag→count index for O(1) queries. Every mutation path updates
/// both structures in the same call, so the two never diverge.
///
/// Local mutations go through [`add_stack`](Self::add_stack),
/// [`set_stack`](Self::set_stack), and [`remove_stack`](Self::remove_stack).
/// On the receiving side of replication, the transport mutates the entry list
/// directly and invokes [`on_removed`](Self::on_removed),
/// [`on_added`](Self::on_added), and [`on_changed`](Self::on_changed) to
/// reconcile the index and notify the registered listener.
#[derive(Default)]
pub struct TagStackContainer {
    /// Replicated list of tag stacks.
    entries: Vec<TagStack>,

    /// Accelerated tag→count index for queries.
    index: HashMap<Tag, i32>,

    /// Optional change listener, non-owning.
    listener: Option<Weak<dyn TagStackListener>>,

    /// Monotonic dirty counter; advanced by every mutation.
    dirty_key: u64,
}

impl TagStackContainer {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Mutation API ---

    /// Add `delta` stacks to `tag`.
    ///
    /// Creates the entry if the tag is not yet present. `delta == 0` inserts
    /// a zero-count entry when `keep_zero` is set and the tag is absent
    /// (first write wins). Negative `delta` is ignored. An invalid tag warns
    /// and mutates nothing.
    pub fn add_stack(&mut self, tag: Tag, delta: i32, keep_zero: bool) {
        if !tag.is_valid() {
            warn!("an invalid tag was passed to add_stack");
            return;
        }

        if delta > 0 {
            if let Some(pos) = self.position(&tag) {
                let new_count = self.entries[pos].count() + delta;
                self.entries[pos].set_count(new_count);
                self.index.insert(tag, new_count);
                self.mark_entry_dirty(pos);
                return;
            }
            self.push_entry(tag, delta);
        } else if delta == 0 && keep_zero && !self.index.contains_key(&tag) {
            self.push_entry(tag, 0);
        }
        // Negative delta is left unhandled.
    }

    /// Set the stack count for `tag`.
    ///
    /// A positive `new_count` only overwrites an existing entry; no entry is
    /// created when none exists. A non-positive `new_count` inserts or
    /// overwrites a zero entry when `keep_zero` is set, and otherwise removes
    /// the entry entirely. An invalid tag warns and mutates nothing.
    pub fn set_stack(&mut self, tag: Tag, new_count: i32, keep_zero: bool) {
        if !tag.is_valid() {
            warn!("an invalid tag was passed to set_stack");
            return;
        }

        if new_count > 0 {
            if let Some(pos) = self.position(&tag) {
                self.entries[pos].set_count(new_count);
                self.index.insert(tag, new_count);
                self.mark_entry_dirty(pos);
            }
            return;
        }

        if keep_zero {
            match self.position(&tag) {
                Some(pos) => {
                    self.entries[pos].set_count(0);
                    self.index.insert(tag, 0);
                    self.mark_entry_dirty(pos);
                }
                None => self.push_entry(tag, 0),
            }
        } else if let Some(pos) = self.position(&tag) {
            self.entries.remove(pos);
            self.index.remove(&tag);
            self.mark_structure_dirty();
        }
    }

    /// Remove `delta` stacks from `tag`.
    ///
    /// Returns true iff a matching entry was found, regardless of whether the
    /// count reached zero. When the count is exhausted the entry is either
    /// zeroed (`keep_zero`) or removed entirely. A non-positive `delta` or an
    /// invalid tag removes nothing and returns false.
    pub fn remove_stack(&mut self, tag: Tag, delta: i32, keep_zero: bool) -> bool {
        if !tag.is_valid() {
            warn!("an invalid tag was passed to remove_stack");
            return false;
        }

        if delta <= 0 {
            return false;
        }

        let Some(pos) = self.position(&tag) else {
            return false;
        };

        if self.entries[pos].count() <= delta {
            if keep_zero {
                self.entries[pos].set_count(0);
                self.index.insert(tag, 0);
                self.mark_entry_dirty(pos);
            } else {
                self.entries.remove(pos);
                self.index.remove(&tag);
                self.mark_structure_dirty();
            }
        } else {
            let new_count = self.entries[pos].count() - delta;
            self.entries[pos].set_count(new_count);
            self.index.insert(tag, new_count);
            self.mark_entry_dirty(pos);
        }
        true
    }

    // --- Queries ---

    /// Stack count for `tag`, or 0 if absent. O(1).
    pub fn stack_count(&self, tag: &Tag) -> i32 {
        self.index.get(tag).copied().unwrap_or(0)
    }

    /// True if an entry exists for `tag` (possibly with count 0). O(1).
    pub fn contains_tag(&self, tag: &Tag) -> bool {
        self.index.contains_key(tag)
    }

    /// Find the entry for `tag`, if present.
    pub fn find(&self, tag: &Tag) -> Option<&TagStack> {
        self.position(tag).map(|pos| &self.entries[pos])
    }

    // --- Collection surface ---

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TagStack> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TagStack> {
        self.entries.iter()
    }

    /// Ordered entry list, the unit a replication transport tracks.
    pub fn entries(&self) -> &[TagStack] {
        &self.entries
    }

    /// Mutable entry list for replication transports.
    ///
    /// A transport that mutates the list directly must reconcile the index
    /// afterwards via [`on_removed`](Self::on_removed),
    /// [`on_added`](Self::on_added), and [`on_changed`](Self::on_changed).
    pub fn entries_mut(&mut self) -> &mut Vec<TagStack> {
        &mut self.entries
    }

    // --- Listener ---

    /// Register a change listener.
    ///
    /// The handle is weak: the container never keeps the listener alive, and
    /// a dead handle makes notification a silent no-op.
    pub fn set_listener(&mut self, listener: Weak<dyn TagStackListener>) {
        self.listener = Some(listener);
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    fn notify(&self, tag: &Tag, new_count: i32, old_count: i32) {
        if let Some(listener) = self.listener.as_ref().and_then(Weak::upgrade) {
            listener.on_tag_stack_changed(tag, new_count, old_count);
        }
    }

    // --- Replication reconciliation hooks ---

    /// Reconcile after remote removals.
    ///
    /// Must be invoked *before* the entries at `indices` are removed from the
    /// list, so their tags and last counts are still readable.
    pub fn on_removed(&mut self, indices: &[usize]) {
        for &i in indices {
            let tag = self.entries[i].tag().clone();
            let old_count = self.entries[i].count();
            self.index.remove(&tag);
            self.notify(&tag, 0, old_count);
        }
    }

    /// Reconcile after remote insertions at `indices`.
    pub fn on_added(&mut self, indices: &[usize]) {
        for &i in indices {
            let tag = self.entries[i].tag().clone();
            let count = self.entries[i].count();
            self.index.insert(tag.clone(), count);
            self.notify(&tag, count, 0);
        }
    }

    /// Reconcile after remote in-place changes at `indices`.
    pub fn on_changed(&mut self, indices: &[usize]) {
        for &i in indices {
            let tag = self.entries[i].tag().clone();
            let new_count = self.entries[i].count();
            let slot = self.index.entry(tag.clone()).or_insert(0);
            let old_count = *slot;
            *slot = new_count;
            self.notify(&tag, new_count, old_count);
        }
    }

    // --- Delta replication ---

    /// Extract the changes an observer has not yet seen.
    ///
    /// Diffs the container against the observer's baseline and advances the
    /// baseline. Returns `None` when the observer is up to date. A fresh
    /// baseline receives the full container as additions (initial sync).
    pub fn write_delta(&self, baseline: &mut ObserverBaseline) -> Option<StackDelta> {
        if self.dirty_key <= baseline.last_key {
            return None;
        }

        let mut delta = StackDelta::default();

        for (tag, _) in baseline.seen.iter() {
            if !self.index.contains_key(tag) {
                delta.removed.push(tag.clone());
            }
        }

        for entry in &self.entries {
            let update = StackUpdate {
                tag: entry.tag().clone(),
                count: entry.count(),
            };
            match baseline.seen.get(entry.tag()) {
                None => delta.added.push(update),
                Some(&seen_key) if seen_key != entry.key => delta.changed.push(update),
                Some(_) => {}
            }
        }

        baseline.last_key = self.dirty_key;
        baseline.seen = self
            .entries
            .iter()
            .map(|e| (e.tag().clone(), e.key))
            .collect();

        if delta.is_empty() {
            // Changes cancelled out since the last sync (e.g. add then remove).
            return None;
        }

        trace!(
            removed = delta.removed.len(),
            added = delta.added.len(),
            changed = delta.changed.len(),
            "wrote stack delta"
        );
        Some(delta)
    }

    /// Apply a received delta.
    ///
    /// Mutates the entry list the way a transport would and routes every
    /// element through the matching reconciliation hook, which keeps the
    /// index synchronized and fires listener notifications. Unknown `changed`
    /// tags materialize a new entry; duplicate `added` tags fold into a
    /// change.
    pub fn apply_delta(&mut self, delta: &StackDelta) {
        for tag in &delta.removed {
            if let Some(pos) = self.position(tag) {
                self.on_removed(&[pos]);
                self.entries.remove(pos);
            }
        }

        for update in &delta.added {
            match self.position(&update.tag) {
                Some(pos) => {
                    self.entries[pos].set_count(update.count);
                    self.on_changed(&[pos]);
                }
                None => {
                    self.entries
                        .push(TagStack::new(update.tag.clone(), update.count));
                    self.on_added(&[self.entries.len() - 1]);
                }
            }
        }

        for update in &delta.changed {
            match self.position(&update.tag) {
                Some(pos) => {
                    self.entries[pos].set_count(update.count);
                    self.on_changed(&[pos]);
                }
                None => {
                    self.entries
                        .push(TagStack::new(update.tag.clone(), update.count));
                    self.on_changed(&[self.entries.len() - 1]);
                }
            }
        }

        trace!(entries = self.entries.len(), "applied stack delta");
    }

    // --- Internals ---

    fn position(&self, tag: &Tag) -> Option<usize> {
        self.entries.iter().position(|e| e.tag() == tag)
    }

    /// Insert a new entry and its index slot, marking it dirty.
    fn push_entry(&mut self, tag: Tag, count: i32) {
        self.index.insert(tag.clone(), count);
        self.entries.push(TagStack::new(tag, count));
        let pos = self.entries.len() - 1;
        self.mark_entry_dirty(pos);
    }

    fn mark_entry_dirty(&mut self, pos: usize) {
        self.dirty_key += 1;
        self.entries[pos].key = self.dirty_key;
    }

    fn mark_structure_dirty(&mut self) {
        self.dirty_key += 1;
    }
}

impl std::ops::Index<usize> for TagStackContainer {
    type Output = TagStack;

    fn index(&self, index: usize) -> &TagStack {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a TagStackContainer {
    type Item = &'a TagStack;
    type IntoIter = std::slice::Iter<'a, TagStack>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl std::fmt::Debug for TagStackContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}
