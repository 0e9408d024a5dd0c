//! Post reference domain entity
//!
//! A post reference is the permalink of one Instagram post. It is treated as an
//! opaque string: the only normalisation is for deduplication, where a single
//! trailing `/` is ignored.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Maximum number of posts shown in the grid
pub const MAX_POSTS: usize = 6;

/// Permalink of one Instagram post
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostRef(String);

impl PostRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key used for deduplication: the URL with one trailing `/` stripped
    pub fn dedupe_key(&self) -> &str {
        self.0.strip_suffix('/').unwrap_or(&self.0)
    }
}

impl From<String> for PostRef {
    fn from(url: String) -> Self {
        Self(url)
    }
}

impl From<&str> for PostRef {
    fn from(url: &str) -> Self {
        Self(url.to_string())
    }
}

impl std::fmt::Display for PostRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Merge fresh and static posts, fresh first.
///
/// Order within each list is kept, the first occurrence of a post wins (its
/// literal string is the one returned) and the result holds at most `limit`
/// entries.
pub fn merge_posts(fresh: &[PostRef], fallback: &[PostRef], limit: usize) -> Vec<PostRef> {
    let mut seen = HashSet::new();

    fresh
        .iter()
        .chain(fallback)
        .filter(|post| seen.insert(post.dedupe_key()))
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posts(urls: &[&str]) -> Vec<PostRef> {
        urls.iter().map(|u| PostRef::from(*u)).collect()
    }

    #[test]
    fn merge_of_empty_lists_is_empty() {
        assert!(merge_posts(&[], &[], MAX_POSTS).is_empty());
    }

    #[test]
    fn disjoint_lists_are_concatenated_in_order() {
        let fresh = posts(&["a", "b"]);
        let fallback = posts(&["c", "d"]);

        let merged = merge_posts(&fresh, &fallback, MAX_POSTS);

        assert_eq!(merged, posts(&["a", "b", "c", "d"]));
    }

    #[test]
    fn trailing_slash_is_ignored_and_first_variant_kept() {
        let fresh = posts(&["https://instagram.com/p/X/"]);
        let fallback = posts(&["https://instagram.com/p/X"]);

        let merged = merge_posts(&fresh, &fallback, MAX_POSTS);

        assert_eq!(merged, posts(&["https://instagram.com/p/X/"]));
    }

    #[test]
    fn duplicates_within_one_source_are_dropped() {
        let fallback = posts(&["a", "b", "a/", "c"]);

        let merged = merge_posts(&[], &fallback, MAX_POSTS);

        assert_eq!(merged, posts(&["a", "b", "c"]));
    }

    #[test]
    fn only_one_trailing_slash_is_stripped() {
        let merged = merge_posts(&posts(&["a//"]), &posts(&["a"]), MAX_POSTS);
        assert_eq!(merged, posts(&["a//", "a"]));
    }

    #[test]
    fn result_never_exceeds_limit() {
        let fresh = posts(&["1", "2", "3", "4", "5"]);
        let fallback = posts(&["6", "7", "8", "9"]);

        let merged = merge_posts(&fresh, &fallback, MAX_POSTS);

        assert_eq!(merged.len(), MAX_POSTS);
        assert_eq!(merged, posts(&["1", "2", "3", "4", "5", "6"]));
    }

    #[test]
    fn fresh_posts_take_precedence_over_fallback() {
        let fresh = posts(&["b"]);
        let fallback = posts(&["a", "b/", "c"]);

        let merged = merge_posts(&fresh, &fallback, 2);

        assert_eq!(merged, posts(&["b", "a"]));
    }

    #[test]
    fn post_ref_serializes_as_plain_string() {
        let json = serde_json::to_string(&posts(&["https://www.instagram.com/p/ABC/"])).unwrap();
        assert_eq!(json, r#"["https://www.instagram.com/p/ABC/"]"#);
    }
}
