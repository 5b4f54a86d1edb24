//! Core tree shapes for locale data
//!
//! Locale content comes in two shapes. *Raw* data is the upstream
//! source-of-truth format: a nested mapping whose leaves are plain strings.
//! *Processed* data is the local working copy: the same nesting, but every
//! leaf is a translation pair holding the original text next to its
//! (possibly missing) translation.
//!
//! Both shapes carry an explicit Leaf/Branch discriminant. The distinction
//! is never derived by sniffing for particular map keys at runtime.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single translation unit
///
/// `translated` stays `None` until a human or the merge process supplies a
/// value. A leaf whose `original` is the empty string needs no translation
/// and is auto-resolved to `Some("")` by the merge.
///
/// # Example
///
/// ```ignore
/// let pair = LeafPair::untranslated("Save changes");
/// assert!(!pair.is_translated());
///
/// let pair = LeafPair::translated("Save changes", "Enregistrer");
/// assert!(pair.is_translated());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LeafPair {
    /// The upstream source text
    pub original: String,

    /// The local translation, absent until supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translated: Option<String>,
}

impl LeafPair {
    /// Create a pair with no translation yet
    pub fn untranslated(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            translated: None,
        }
    }

    /// Create a pair with a translation already supplied
    pub fn translated(original: impl Into<String>, translated: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            translated: Some(translated.into()),
        }
    }

    /// Check whether a translation has been supplied
    pub fn is_translated(&self) -> bool {
        self.translated.is_some()
    }
}

/// Upstream locale data: bare-string leaves under nested string keys
///
/// Serialized form matches the upstream document exactly, so a decoded
/// document re-encodes to the same mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNode {
    /// One translatable string
    Leaf(String),
    /// Nested keys; `BTreeMap` keeps traversal order deterministic
    Branch(BTreeMap<String, RawNode>),
}

impl RawNode {
    /// Build an empty branch
    pub fn empty() -> Self {
        RawNode::Branch(BTreeMap::new())
    }

    /// Number of leaves in this subtree
    pub fn leaf_count(&self) -> usize {
        match self {
            RawNode::Leaf(_) => 1,
            RawNode::Branch(children) => children.values().map(RawNode::leaf_count).sum(),
        }
    }
}

/// Local working copy: translation-pair leaves under nested string keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProcessedNode {
    /// One translation unit
    Leaf(LeafPair),
    /// Nested keys; `BTreeMap` keeps traversal order deterministic
    Branch(BTreeMap<String, ProcessedNode>),
}

impl ProcessedNode {
    /// Build an empty branch
    pub fn empty() -> Self {
        ProcessedNode::Branch(BTreeMap::new())
    }

    /// Look up a node by its root-to-leaf key path
    ///
    /// Returns `None` when any path segment is missing or crosses a leaf.
    pub fn get_path(&self, path: &[&str]) -> Option<&ProcessedNode> {
        let mut node = self;
        for key in path {
            match node {
                ProcessedNode::Branch(children) => node = children.get(*key)?,
                ProcessedNode::Leaf(_) => return None,
            }
        }
        Some(node)
    }
}

/// Convenience constructor for branch nodes in tests and builders
pub fn branch<T>(entries: impl IntoIterator<Item = (&'static str, T)>) -> BTreeMap<String, T> {
    entries
        .into_iter()
        .map(|(key, node)| (key.to_string(), node))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_pair_constructors() {
        let pair = LeafPair::untranslated("Hello");
        assert_eq!(pair.original, "Hello");
        assert_eq!(pair.translated, None);
        assert!(!pair.is_translated());

        let pair = LeafPair::translated("Hello", "Bonjour");
        assert_eq!(pair.translated.as_deref(), Some("Bonjour"));
        assert!(pair.is_translated());
    }

    #[test]
    fn test_raw_node_leaf_count() {
        let tree = RawNode::Branch(branch([
            ("a", RawNode::Leaf("Hi".to_string())),
            (
                "b",
                RawNode::Branch(branch([
                    ("c", RawNode::Leaf("One".to_string())),
                    ("d", RawNode::Leaf("Two".to_string())),
                ])),
            ),
        ]));
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(RawNode::empty().leaf_count(), 0);
    }

    #[test]
    fn test_get_path() {
        let tree = ProcessedNode::Branch(branch([(
            "menu",
            ProcessedNode::Branch(branch([(
                "save",
                ProcessedNode::Leaf(LeafPair::translated("Save", "Enregistrer")),
            )])),
        )]));

        match tree.get_path(&["menu", "save"]) {
            Some(ProcessedNode::Leaf(pair)) => assert_eq!(pair.original, "Save"),
            other => panic!("Expected leaf, got {:?}", other),
        }

        assert!(tree.get_path(&["menu", "missing"]).is_none());
        // A path through a leaf has no children
        assert!(tree.get_path(&["menu", "save", "deeper"]).is_none());
    }

    #[test]
    fn test_raw_node_serde_round_trip() {
        let text = r#"{"greeting":"Hello","menu":{"save":"Save"}}"#;
        let tree: RawNode = serde_json::from_str(text).unwrap();

        match &tree {
            RawNode::Branch(children) => {
                assert_eq!(children.len(), 2);
                assert_eq!(
                    children.get("greeting"),
                    Some(&RawNode::Leaf("Hello".to_string()))
                );
            }
            RawNode::Leaf(_) => panic!("Expected branch at root"),
        }

        let encoded = serde_json::to_string(&tree).unwrap();
        let decoded: RawNode = serde_json::from_str(&encoded).unwrap();
        assert_eq!(tree, decoded);
    }

    #[test]
    fn test_processed_node_serde_shapes() {
        // A leaf is a map with the pair fields; a branch is any other map
        let text = r#"{"save":{"original":"Save","translated":"Enregistrer"},"nested":{"quit":{"original":"Quit"}}}"#;
        let tree: ProcessedNode = serde_json::from_str(text).unwrap();

        match tree.get_path(&["save"]) {
            Some(ProcessedNode::Leaf(pair)) => {
                assert_eq!(pair.translated.as_deref(), Some("Enregistrer"));
            }
            other => panic!("Expected leaf, got {:?}", other),
        }
        match tree.get_path(&["nested", "quit"]) {
            Some(ProcessedNode::Leaf(pair)) => assert!(!pair.is_translated()),
            other => panic!("Expected leaf, got {:?}", other),
        }
    }

    #[test]
    fn test_processed_node_branch_named_original_stays_branch() {
        // A branch may legitimately contain a child key named "original";
        // the child being a node (not a string) keeps the parent a branch.
        let text = r#"{"original":{"original":"Source","translated":"Quelle"}}"#;
        let tree: ProcessedNode = serde_json::from_str(text).unwrap();
        match tree {
            ProcessedNode::Branch(ref children) => assert_eq!(children.len(), 1),
            ProcessedNode::Leaf(_) => panic!("Expected branch at root"),
        }
    }

    #[test]
    fn test_untranslated_leaf_omits_field_when_serialized() {
        let tree = ProcessedNode::Leaf(LeafPair::untranslated("Hello"));
        let encoded = serde_json::to_string(&tree).unwrap();
        assert_eq!(encoded, r#"{"original":"Hello"}"#);
    }
}
