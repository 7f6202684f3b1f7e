//! Tags: opaque descriptive tokens carried by stock items.
//!
//! Tags are plain strings like `color:red` or `size:12`; the catalog never
//! interprets their contents. Queries match on set containment only.

use core::str::FromStr;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// One descriptive token (e.g. `pattern:swirly`, `loc:dress rail`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Create a tag. Tags must be non-empty after trimming and must not
    /// contain commas (the list separator used by [`TagSet::parse`]).
    pub fn new(text: impl Into<String>) -> Result<Self, CatalogError> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::invalid_tag("must not be empty"));
        }
        if trimmed.contains(',') {
            return Err(CatalogError::invalid_tag(format!(
                "must not contain a comma: {trimmed:?}"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Tag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Tag {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// An ordered set of tags.
///
/// Backed by a `BTreeSet`, so iteration and rendering are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(BTreeSet<Tag>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated tag list (`"dress, color:red, size:12"`).
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        text.split(',')
            .filter(|part| !part.trim().is_empty())
            .map(Tag::new)
            .collect()
    }

    pub fn insert(&mut self, tag: Tag) -> bool {
        self.0.insert(tag)
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.0.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.0.iter()
    }

    /// True iff every tag in `self` is also in `other`.
    ///
    /// The empty set is a subset of everything.
    pub fn is_subset_of(&self, other: &TagSet) -> bool {
        self.0.is_subset(&other.0)
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Tag> for TagSet {
    fn extend<I: IntoIterator<Item = Tag>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for TagSet {
    type Item = Tag;
    type IntoIter = std::collections::btree_set::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl core::fmt::Display for TagSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for tag in &self.0 {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{tag}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_deduplicates() {
        let tags = TagSet::parse("dress, color:red,dress").unwrap();
        assert_eq!(tags.len(), 2);
        assert!(tags.contains(&Tag::new("color:red").unwrap()));
    }

    #[test]
    fn tags_may_contain_spaces() {
        let tag = Tag::new("loc:dress rail").unwrap();
        assert_eq!(tag.as_str(), "loc:dress rail");
    }

    #[test]
    fn empty_tag_is_rejected() {
        assert!(matches!(Tag::new("   "), Err(CatalogError::InvalidTag(_))));
    }

    #[test]
    fn empty_set_is_subset_of_everything() {
        let empty = TagSet::new();
        let tags = TagSet::parse("dress, size:8").unwrap();
        assert!(empty.is_subset_of(&tags));
        assert!(empty.is_subset_of(&empty));
    }

    #[test]
    fn subset_checks_full_containment() {
        let all = TagSet::parse("dress, color:red, size:8").unwrap();
        let some = TagSet::parse("color:red, size:8").unwrap();
        let other = TagSet::parse("color:blue").unwrap();
        assert!(some.is_subset_of(&all));
        assert!(!all.is_subset_of(&some));
        assert!(!other.is_subset_of(&all));
    }

    #[test]
    fn renders_sorted_comma_list() {
        let tags = TagSet::parse("size:8, dress, color:red").unwrap();
        assert_eq!(tags.to_string(), "color:red, dress, size:8");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn tag_strategy() -> impl Strategy<Value = Tag> {
            "[a-z]{1,6}(:[a-z0-9]{1,6})?".prop_map(|s| Tag::new(s).unwrap())
        }

        proptest! {
            #[test]
            fn every_set_is_subset_of_its_union(
                a in prop::collection::vec(tag_strategy(), 0..8),
                b in prop::collection::vec(tag_strategy(), 0..8),
            ) {
                let set_a: TagSet = a.iter().cloned().collect();
                let set_b: TagSet = b.iter().cloned().collect();
                let mut union = set_a.clone();
                union.extend(b);
                prop_assert!(set_a.is_subset_of(&union));
                prop_assert!(set_b.is_subset_of(&union));
            }
        }
    }
}
