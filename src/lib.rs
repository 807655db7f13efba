//! # Tag Stacks
//!
//! A replicated container of `tag → count` entries kept consistent between an
//! authoritative owner and its observers by sending only the stacks that
//! changed.
//!
//! ## Core Concepts
//!
//! - **Tags**: Hierarchical identifiers with ancestor-match queries
//! - **Stacks**: One `(tag, count)` entry, replicated individually
//! - **Container**: Ordered entry list (source of truth) plus an accelerated
//!   tag→count index, never allowed to diverge
//! - **Deltas**: Per-observer change sets extracted against a baseline and
//!   applied through reconciliation hooks
//! - **Listeners**: Synchronous change notifications through a weak handle
//!
//! ## Example
//!
//! ```
//! use tag_stacks::{Tag, TagStackContainer};
//!
//! let strength = Tag::parse("Status.Buff.Strength")?;
//!
//! let mut stacks = TagStackContainer::new();
//! stacks.add_stack(strength.clone(), 3, false);
//! stacks.add_stack(strength.clone(), 4, false);
//! assert_eq!(stacks.stack_count(&strength), 7);
//!
//! stacks.remove_stack(strength.clone(), 100, false);
//! assert!(!stacks.contains_tag(&strength));
//! # Ok::<(), tag_stacks::StackError>(())
//! ```

pub mod error;
pub mod interface;
pub mod listener;
pub mod replication;
pub mod script;
pub mod stacks;
pub mod tags;

// Re-exports
pub use error::{Result, StackError};
pub use interface::TagStackSource;
pub use listener::TagStackListener;
pub use replication::{ObserverBaseline, StackDelta, StackUpdate};
pub use stacks::{TagStack, TagStackContainer};
pub use tags::{Tag, TagSet};
