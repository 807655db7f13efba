//! Query-only façade for objects that own tag stacks.

use crate::stacks::TagStackContainer;
use crate::tags::Tag;

/// Implemented by assets that carry tag stacks.
///
/// Implementors fill `out` with a read-only snapshot of their stacks; the
/// provided queries build a fresh snapshot per call (no caching across
/// calls) and query it.
pub trait TagStackSource {
    /// Copy the owned tag stacks into `out`.
    fn owned_tag_stacks(&self, out: &mut TagStackContainer);

    /// True if the asset has a stack entry for `tag`.
    fn has_matching_stack(&self, tag: &Tag) -> bool {
        let mut stacks = TagStackContainer::new();
        self.owned_tag_stacks(&mut stacks);
        stacks.contains_tag(tag)
    }

    /// The stack count for `tag`, or `None` if no entry exists.
    ///
    /// Distinguishes "no entry" from "entry with count 0".
    fn matching_stack(&self, tag: &Tag) -> Option<i32> {
        let mut stacks = TagStackContainer::new();
        self.owned_tag_stacks(&mut stacks);
        if stacks.contains_tag(tag) {
            Some(stacks.stack_count(tag))
        } else {
            None
        }
    }

    /// The stack count for `tag`, 0 if absent.
    fn stack_count(&self, tag: &Tag) -> i32 {
        let mut stacks = TagStackContainer::new();
        self.owned_tag_stacks(&mut stacks);
        stacks.stack_count(tag)
    }
}
