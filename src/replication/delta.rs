//! Wire types for stack deltas.

use crate::error::Result;
use crate::tags::Tag;
use serde::{Deserialize, Serialize};

/// New or changed value for a single stack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackUpdate {
    pub tag: Tag,
    pub count: i32,
}

/// The changes an observer has not yet seen: removed tags, new stacks, and
/// in-place count changes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackDelta {
    pub removed: Vec<Tag>,
    pub added: Vec<StackUpdate>,
    pub changed: Vec<StackUpdate>,
}

impl StackDelta {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty() && self.changed.is_empty()
    }

    /// Encode as MessagePack for the transport.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(rmp_serde::to_vec(self)?)
    }

    /// Decode a delta received from the transport.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(rmp_serde::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(name: &str) -> Tag {
        Tag::parse(name).unwrap()
    }

    #[test]
    fn test_encode_decode() {
        let delta = StackDelta {
            removed: vec![tag("Status.Stun")],
            added: vec![StackUpdate {
                tag: tag("Status.Buff.Strength"),
                count: 5,
            }],
            changed: vec![StackUpdate {
                tag: tag("Item.Potion"),
                count: 2,
            }],
        };

        let bytes = delta.encode().unwrap();
        let decoded = StackDelta::decode(&bytes).unwrap();
        assert_eq!(decoded, delta);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result = StackDelta::decode(b"\xffnot msgpack");
        assert!(result.is_err());
    }

    #[test]
    fn test_is_empty() {
        assert!(StackDelta::default().is_empty());

        let delta = StackDelta {
            removed: vec![tag("T")],
            ..Default::default()
        };
        assert!(!delta.is_empty());
    }

    #[test]
    fn test_json_wire_shape() {
        // Tags serialize as plain strings inside deltas.
        let delta = StackDelta {
            removed: vec![],
            added: vec![StackUpdate {
                tag: tag("Status"),
                count: 1,
            }],
            changed: vec![],
        };

        let json = serde_json::to_value(&delta).unwrap();
        assert_eq!(json["added"][0]["tag"], "Status");
        assert_eq!(json["added"][0]["count"], 1);
    }
}
