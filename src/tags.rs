//! Hierarchical tag identifiers.
//!
//! Tags are opaque, dot-separated names (e.g. `"Status.Buff.Strength"`)
//! supporting equality and ancestor-match queries. The container treats them
//! purely as an equality/hierarchy oracle.

use crate::error::{Result, StackError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A hierarchical tag identifier.
///
/// The default value is the invalid (empty) tag, mirroring an unset field.
/// Valid tags are only produced by [`Tag::parse`], which is also enforced on
/// deserialization.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag {
    name: String,
}

impl Tag {
    /// Parse and validate a tag name.
    ///
    /// Names are one or more non-empty segments separated by `.`, where each
    /// segment consists of alphanumerics, `_`, or `-`.
    pub fn parse(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(StackError::InvalidTag("empty tag name".into()));
        }

        for segment in name.split('.') {
            if segment.is_empty() {
                return Err(StackError::InvalidTag(format!(
                    "empty segment in '{name}'"
                )));
            }
            if !segment
                .chars()
                .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
            {
                return Err(StackError::InvalidTag(format!(
                    "invalid character in segment '{segment}' of '{name}'"
                )));
            }
        }

        Ok(Self { name: name.into() })
    }

    /// The invalid (empty) tag.
    pub fn none() -> Self {
        Self::default()
    }

    /// True if this is a real, non-empty tag.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
    }

    /// Full tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parent tag, dropping the last segment (`"A.B.C"` → `"A.B"`).
    pub fn parent(&self) -> Option<Tag> {
        let (parent, _) = self.name.rsplit_once('.')?;
        Some(Tag {
            name: parent.to_string(),
        })
    }

    /// True if `other` equals this tag or is an ancestor of it.
    ///
    /// `"Status.Buff.Strength"` matches `"Status.Buff"` and `"Status"`, but
    /// not the other way around. Invalid tags match nothing.
    pub fn matches(&self, other: &Tag) -> bool {
        if !self.is_valid() || !other.is_valid() {
            return false;
        }
        match self.name.strip_prefix(&other.name) {
            Some(rest) => rest.is_empty() || rest.starts_with('.'),
            None => false,
        }
    }

    /// True if `other` is exactly this tag (both valid).
    pub fn matches_exact(&self, other: &Tag) -> bool {
        self.is_valid() && self.name == other.name
    }

    /// True if this tag matches any tag in the set (ancestor semantics).
    pub fn matches_any(&self, set: &TagSet) -> bool {
        set.iter().any(|t| self.matches(t))
    }

    /// True if this tag is exactly present in the set.
    pub fn matches_any_exact(&self, set: &TagSet) -> bool {
        set.iter().any(|t| self.matches_exact(t))
    }
}

impl TryFrom<String> for Tag {
    type Error = StackError;

    fn try_from(name: String) -> Result<Self> {
        Tag::parse(&name)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> String {
        tag.name
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "Tag({})", self.name)
        } else {
            write!(f, "Tag(none)")
        }
    }
}

/// A deduplicated set of valid tags, used for `matches_any` queries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSet {
    tags: Vec<Tag>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tag. Invalid tags and duplicates are ignored.
    pub fn insert(&mut self, tag: Tag) {
        if tag.is_valid() && !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Exact membership test.
    pub fn contains(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}
