//! Tag-stack entries and their replicated container.

mod container;
mod entry;

pub use container::TagStackContainer;
pub use entry::TagStack;
