//! Change-notification contract for tag-stack containers.

use crate::tags::Tag;

/// Receives change notifications from a [`TagStackContainer`](crate::TagStackContainer)
/// it is registered on.
///
/// Callbacks are delivered synchronously, once per affected tag, in the order
/// the underlying entries were processed. A removed stack reports
/// `new_count = 0`; a freshly added stack reports `old_count = 0`.
///
/// Registration goes through
/// [`TagStackContainer::set_listener`](crate::TagStackContainer::set_listener),
/// which stores a weak handle: the container never keeps the listener alive,
/// and a handle whose target has been dropped is skipped silently. The
/// capability check happens at compile time via this trait bound.
pub trait TagStackListener {
    fn on_tag_stack_changed(&self, tag: &Tag, new_count: i32, old_count: i32);
}
