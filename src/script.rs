//! Flat function surface for scripting layers.
//!
//! Thin passthroughs with signature parity to the container's mutation API,
//! no additional logic.

use crate::stacks::TagStackContainer;
use crate::tags::Tag;

pub fn add_tag_stack(container: &mut TagStackContainer, tag: Tag, count: i32) {
    container.add_stack(tag, count, false);
}

pub fn remove_tag_stack(
    container: &mut TagStackContainer,
    tag: Tag,
    count: i32,
    keep_zero: bool,
) -> bool {
    container.remove_stack(tag, count, keep_zero)
}

pub fn set_tag_stack(container: &mut TagStackContainer, tag: Tag, count: i32, keep_zero: bool) {
    container.set_stack(tag, count, keep_zero);
}

pub fn tag_stack_count(container: &TagStackContainer, tag: &Tag) -> i32 {
    container.stack_count(tag)
}
