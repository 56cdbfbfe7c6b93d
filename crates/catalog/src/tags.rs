//! Tag normalization.
//!
//! Movie genres and keywords arrive in two shapes depending on where the
//! record came from: a JSON array of strings, or a single comma-separated
//! string (`"Action, Science Fiction"`). This module is the one place that
//! looks at the raw shape. Everything past it works with [`TagSet`].
//!
//! ## Rules
//! - A list is taken verbatim: tokens are not re-split or trimmed
//! - A string is split on `,`, each part trimmed, empty parts dropped
//! - Anything else (numbers, objects, lists with non-string items, `null`)
//!   becomes the empty set. This never fails.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeSet;
use std::collections::btree_set;

/// Raw tag field as it appears in a movie record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawTags {
    /// Native collection of tags
    List(Vec<String>),
    /// Comma-separated tags, e.g. `"space, aliens"`
    Delimited(String),
    /// Any other JSON shape; normalizes to the empty set
    Unsupported(serde_json::Value),
}

/// Canonical set of trimmed, non-empty tags.
///
/// Backed by a `BTreeSet` so iteration (and therefore serialization and
/// log output) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawTags")]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    /// Create an empty tag set
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.0.iter()
    }

    /// Number of tags present in both sets
    pub fn overlap(&self, other: &TagSet) -> usize {
        // Walk the smaller set, probe the larger one
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().filter(|tag| large.contains(tag)).count()
    }

    /// Add every tag of `other` to this set
    pub fn union_with(&mut self, other: &TagSet) {
        self.0.extend(other.0.iter().cloned());
    }
}

impl From<RawTags> for TagSet {
    fn from(raw: RawTags) -> Self {
        normalize(&raw)
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for TagSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.0)
    }
}

/// Convert a raw tag field into a canonical [`TagSet`].
pub fn normalize(raw: &RawTags) -> TagSet {
    match raw {
        RawTags::List(tags) => tags.iter().cloned().collect(),
        RawTags::Delimited(value) => parse_delimited(value),
        RawTags::Unsupported(_) => TagSet::new(),
    }
}

/// Split a comma-separated string into trimmed, non-empty tags.
///
/// Example: `"28, 12,,16"` -> `{"12", "16", "28"}`
pub fn parse_delimited(value: &str) -> TagSet {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tags(items: &[&str]) -> TagSet {
        items.iter().copied().collect()
    }

    #[test]
    fn test_parse_delimited() {
        assert_eq!(parse_delimited("28,12,16"), tags(&["28", "12", "16"]));
        assert_eq!(
            parse_delimited("action, space, aliens"),
            tags(&["action", "space", "aliens"])
        );
        assert!(parse_delimited("").is_empty());
        assert!(parse_delimited(" , ,").is_empty());
    }

    #[test]
    fn test_normalize_is_order_independent() {
        let expected = tags(&["a", "b"]);

        assert_eq!(normalize(&RawTags::Delimited("a, b, b".to_string())), expected);
        assert_eq!(normalize(&RawTags::Delimited("b,a".to_string())), expected);
        assert_eq!(
            normalize(&RawTags::List(vec!["a".to_string(), "b".to_string()])),
            expected
        );
    }

    #[test]
    fn test_list_tokens_kept_verbatim() {
        // A list element containing a comma is a single tag
        let set = normalize(&RawTags::List(vec!["space, aliens".to_string()]));
        assert_eq!(set.len(), 1);
        assert!(set.contains("space, aliens"));
    }

    #[test]
    fn test_unsupported_shapes_degrade_to_empty() {
        for value in [json!(42), json!({"name": "Action"}), json!([1, 2]), json!(null)] {
            let set: TagSet = serde_json::from_value(value).unwrap();
            assert!(set.is_empty());
        }
    }

    #[test]
    fn test_deserialize_both_shapes() {
        let from_list: TagSet = serde_json::from_value(json!(["Action", "Drama"])).unwrap();
        let from_string: TagSet = serde_json::from_value(json!("Drama , Action")).unwrap();
        assert_eq!(from_list, from_string);
    }

    #[test]
    fn test_overlap_and_union() {
        let mut a = tags(&["Action", "Science Fiction"]);
        let b = tags(&["Action", "Thriller"]);
        assert_eq!(a.overlap(&b), 1);
        assert_eq!(b.overlap(&a), 1);

        a.union_with(&b);
        assert_eq!(a, tags(&["Action", "Science Fiction", "Thriller"]));
    }

    #[test]
    fn test_serializes_as_sorted_list() {
        let set = tags(&["b", "a"]);
        assert_eq!(serde_json::to_value(&set).unwrap(), json!(["a", "b"]));
    }
}
