//! Delta replication for tag-stack containers.
//!
//! The owner extracts per-observer deltas with
//! [`TagStackContainer::write_delta`](crate::TagStackContainer::write_delta)
//! and observers apply them with
//! [`TagStackContainer::apply_delta`](crate::TagStackContainer::apply_delta).
//! Only changed stacks cross the boundary; wire framing is the transport's
//! job.

mod baseline;
mod delta;

pub use baseline::ObserverBaseline;
pub use delta::{StackDelta, StackUpdate};
