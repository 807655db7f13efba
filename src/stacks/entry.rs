//! A single tag stack: one (tag, count) pair.

use crate::tags::{Tag, TagSet};
use std::fmt;

/// One stack of a tag (tag + count), replicated individually.
///
/// The tag is immutable after construction; only the count mutates, and only
/// through [`TagStackContainer`](crate::TagStackContainer) or an applied
/// replication delta.
#[derive(Clone, PartialEq, Eq)]
pub struct TagStack {
    tag: Tag,
    count: i32,

    /// Dirty key for delta tracking. Local-only, never crosses the wire.
    pub(crate) key: u64,
}

impl TagStack {
    pub fn new(tag: Tag, count: i32) -> Self {
        Self { tag, count, key: 0 }
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn count(&self) -> i32 {
        self.count
    }

    /// Full name of the tag.
    pub fn tag_name(&self) -> &str {
        self.tag.name()
    }

    /// True iff the tag is a valid, non-empty identifier.
    pub fn is_valid(&self) -> bool {
        self.tag.is_valid()
    }

    /// True if `tag` equals this stack's tag or is an ancestor of it.
    pub fn matches(&self, tag: &Tag) -> bool {
        self.tag.matches(tag)
    }

    /// True if `tag` is exactly this stack's tag.
    pub fn matches_exact(&self, tag: &Tag) -> bool {
        self.tag.matches_exact(tag)
    }

    /// True if `tag` matches and the stack holds at least `min_count`.
    pub fn matches_with_count(&self, tag: &Tag, min_count: i32) -> bool {
        self.tag.matches(tag) && self.count >= min_count
    }

    /// True if this stack's tag matches any tag in the set.
    pub fn matches_any(&self, set: &TagSet) -> bool {
        self.tag.matches_any(set)
    }

    /// True if this stack's tag is exactly present in the set.
    pub fn matches_any_exact(&self, set: &TagSet) -> bool {
        self.tag.matches_any_exact(set)
    }

    /// Overwrite the count.
    ///
    /// For replication transports that write the entry list directly; local
    /// mutations go through the container so the index stays synchronized.
    pub fn set_count(&mut self, count: i32) {
        self.count = count;
    }
}

impl fmt::Display for TagStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.tag, self.count)
    }
}

impl fmt::Debug for TagStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TagStack({}x{})", self.tag, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(name: &str) -> Tag {
        Tag::parse(name).unwrap()
    }

    #[test]
    fn test_accessors() {
        let stack = TagStack::new(tag("Status.Buff"), 3);
        assert_eq!(stack.tag_name(), "Status.Buff");
        assert_eq!(stack.count(), 3);
        assert!(stack.is_valid());
    }

    #[test]
    fn test_invalid_tag() {
        let stack = TagStack::new(Tag::none(), 1);
        assert!(!stack.is_valid());
    }

    #[test]
    fn test_hierarchy_queries() {
        let stack = TagStack::new(tag("Status.Buff.Strength"), 2);

        assert!(stack.matches(&tag("Status.Buff")));
        assert!(!stack.matches_exact(&tag("Status.Buff")));
        assert!(stack.matches_exact(&tag("Status.Buff.Strength")));

        assert!(stack.matches_with_count(&tag("Status.Buff"), 2));
        assert!(!stack.matches_with_count(&tag("Status.Buff"), 3));

        let set: TagSet = [tag("Status")].into_iter().collect();
        assert!(stack.matches_any(&set));
        assert!(!stack.matches_any_exact(&set));
    }

    #[test]
    fn test_display() {
        let stack = TagStack::new(tag("Status.Buff"), 7);
        assert_eq!(stack.to_string(), "Status.Buffx7");
    }
}
