//! Tree merge
//!
//! Reconciles a freshly fetched raw tree with the existing processed tree.
//! The fresh tree dictates the shape of the result: every key present
//! upstream appears in the merged tree, every key dropped upstream
//! disappears (removals are counted separately, see
//! [`unused_translated_keys_count`](crate::reconcile::unused_translated_keys_count)).
//! Translations already supplied locally are carried forward wherever the
//! key path still exists.

use crate::tree::{LeafPair, ProcessedNode, RawNode};
use std::collections::BTreeMap;

/// Outcome of one merge pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeResult {
    /// The reconciled tree, shaped exactly like the fresh input
    pub merged: ProcessedNode,

    /// Leaves in the merged tree left without a translation
    ///
    /// Counts both keys new upstream and keys that were already known but
    /// never translated. Empty-string leaves are auto-resolved and never
    /// counted.
    pub new_untranslated_count: usize,
}

/// Merge a fresh raw tree into the existing processed tree
///
/// Walks `fresh` depth-first and builds a new processed tree; neither
/// input is mutated. For each fresh leaf:
///
/// - an empty upstream value is auto-resolved (`translated` forced to
///   `Some("")`), since empty locale values never need translation;
/// - otherwise the existing leaf's `translated` is carried forward when
///   the same key path held a leaf before, and left `None` when it did
///   not.
///
/// Branches recurse, treating a missing (or non-branch) existing
/// counterpart as an empty mapping. `existing = None` means "no prior
/// translations" and is not an error.
///
/// # Arguments
/// * `existing` - The local working copy, if any
/// * `fresh` - The freshly fetched upstream tree
///
/// # Example
///
/// ```ignore
/// let fresh = decode_document(r#"{"a":"Hi","b":""}"#)?;
/// let result = merge(None, &fresh);
/// assert_eq!(result.new_untranslated_count, 1); // "b" is auto-resolved
/// ```
pub fn merge(existing: Option<&ProcessedNode>, fresh: &RawNode) -> MergeResult {
    let (merged, new_untranslated_count) = merge_node(existing, fresh);
    MergeResult {
        merged,
        new_untranslated_count,
    }
}

/// Recursive step: returns the merged node and its untranslated-leaf count
fn merge_node(existing: Option<&ProcessedNode>, fresh: &RawNode) -> (ProcessedNode, usize) {
    match fresh {
        RawNode::Leaf(text) => {
            let pair = merge_leaf(existing, text);
            let untranslated = usize::from(pair.translated.is_none());
            (ProcessedNode::Leaf(pair), untranslated)
        }
        RawNode::Branch(fresh_children) => {
            let existing_children = match existing {
                Some(ProcessedNode::Branch(children)) => Some(children),
                // Absent or shape-changed: treated as an empty mapping
                _ => None,
            };

            let mut merged_children = BTreeMap::new();
            let mut untranslated = 0;
            for (key, fresh_child) in fresh_children {
                let existing_child = existing_children.and_then(|children| children.get(key));
                let (child, count) = merge_node(existing_child, fresh_child);
                merged_children.insert(key.clone(), child);
                untranslated += count;
            }
            (ProcessedNode::Branch(merged_children), untranslated)
        }
    }
}

fn merge_leaf(existing: Option<&ProcessedNode>, fresh_text: &str) -> LeafPair {
    if fresh_text.is_empty() {
        // Empty upstream values never require translation
        return LeafPair::translated("", "");
    }

    let carried = match existing {
        Some(ProcessedNode::Leaf(pair)) => pair.translated.clone(),
        _ => None,
    };

    LeafPair {
        original: fresh_text.to_string(),
        translated: carried,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::branch;

    fn raw_leaf(text: &str) -> RawNode {
        RawNode::Leaf(text.to_string())
    }

    // ========== Leaf Behavior Tests ==========

    #[test]
    fn test_fresh_leaf_without_existing_is_untranslated() {
        let fresh = raw_leaf("New");
        let result = merge(None, &fresh);

        assert_eq!(
            result.merged,
            ProcessedNode::Leaf(LeafPair::untranslated("New"))
        );
        assert_eq!(result.new_untranslated_count, 1);
    }

    #[test]
    fn test_existing_translation_is_carried_forward() {
        let existing = ProcessedNode::Leaf(LeafPair::translated("Hi", "Salut"));
        let result = merge(Some(&existing), &raw_leaf("Hi"));

        assert_eq!(
            result.merged,
            ProcessedNode::Leaf(LeafPair::translated("Hi", "Salut"))
        );
        assert_eq!(result.new_untranslated_count, 0);
    }

    #[test]
    fn test_untranslated_existing_leaf_still_counts() {
        // A leaf known before but never translated stays outstanding
        let existing = ProcessedNode::Leaf(LeafPair::untranslated("Hi"));
        let result = merge(Some(&existing), &raw_leaf("Hi"));

        assert_eq!(result.new_untranslated_count, 1);
    }

    #[test]
    fn test_empty_fresh_leaf_is_auto_resolved() {
        let result = merge(None, &raw_leaf(""));
        assert_eq!(
            result.merged,
            ProcessedNode::Leaf(LeafPair::translated("", ""))
        );
        assert_eq!(result.new_untranslated_count, 0);
    }

    #[test]
    fn test_empty_fresh_leaf_overrides_existing_data() {
        // The empty-string rule wins regardless of what was stored before
        let existing = ProcessedNode::Leaf(LeafPair::translated("Old", "Vieux"));
        let result = merge(Some(&existing), &raw_leaf(""));

        assert_eq!(
            result.merged,
            ProcessedNode::Leaf(LeafPair::translated("", ""))
        );
        assert_eq!(result.new_untranslated_count, 0);
    }

    #[test]
    fn test_changed_original_keeps_translation() {
        // Upstream rewording does not discard the stored translation; the
        // original is refreshed to the upstream text
        let existing = ProcessedNode::Leaf(LeafPair::translated("Hello", "Bonjour"));
        let result = merge(Some(&existing), &raw_leaf("Hello!"));

        assert_eq!(
            result.merged,
            ProcessedNode::Leaf(LeafPair::translated("Hello!", "Bonjour"))
        );
        assert_eq!(result.new_untranslated_count, 0);
    }

    // ========== Tree Shape Tests ==========

    #[test]
    fn test_merged_key_set_matches_fresh() {
        let existing = ProcessedNode::Branch(branch([
            ("kept", ProcessedNode::Leaf(LeafPair::translated("Hi", "Salut"))),
            (
                "dropped",
                ProcessedNode::Leaf(LeafPair::translated("Bye", "Adieu")),
            ),
        ]));
        let fresh = RawNode::Branch(branch([
            ("kept", raw_leaf("Hi")),
            ("added", raw_leaf("New")),
        ]));

        let result = merge(Some(&existing), &fresh);
        match result.merged {
            ProcessedNode::Branch(children) => {
                let keys: Vec<&str> = children.keys().map(String::as_str).collect();
                assert_eq!(keys, vec!["added", "kept"]);
            }
            ProcessedNode::Leaf(_) => panic!("Expected branch at root"),
        }
    }

    #[test]
    fn test_branch_replacing_leaf_starts_empty() {
        // A key that used to be a leaf and became a branch upstream merges
        // against an empty mapping
        let existing = ProcessedNode::Branch(branch([(
            "menu",
            ProcessedNode::Leaf(LeafPair::translated("Menu", "Menü")),
        )]));
        let fresh = RawNode::Branch(branch([(
            "menu",
            RawNode::Branch(branch([("save", raw_leaf("Save"))])),
        )]));

        let result = merge(Some(&existing), &fresh);
        assert_eq!(result.new_untranslated_count, 1);
        match result.merged.get_path(&["menu", "save"]) {
            Some(ProcessedNode::Leaf(pair)) => assert!(!pair.is_translated()),
            other => panic!("Expected leaf, got {:?}", other),
        }
    }

    #[test]
    fn test_leaf_replacing_branch() {
        let existing = ProcessedNode::Branch(branch([(
            "menu",
            ProcessedNode::Branch(branch([(
                "save",
                ProcessedNode::Leaf(LeafPair::translated("Save", "Enregistrer")),
            )])),
        )]));
        let fresh = RawNode::Branch(branch([("menu", raw_leaf("Menu"))]));

        let result = merge(Some(&existing), &fresh);
        assert_eq!(
            result.merged,
            ProcessedNode::Branch(branch([(
                "menu",
                ProcessedNode::Leaf(LeafPair::untranslated("Menu"))
            )]))
        );
        assert_eq!(result.new_untranslated_count, 1);
    }

    #[test]
    fn test_deep_nesting_carries_translations() {
        let existing = ProcessedNode::Branch(branch([(
            "a",
            ProcessedNode::Branch(branch([(
                "b",
                ProcessedNode::Branch(branch([(
                    "c",
                    ProcessedNode::Leaf(LeafPair::translated("Deep", "Profond")),
                )])),
            )])),
        )]));
        let fresh = RawNode::Branch(branch([(
            "a",
            RawNode::Branch(branch([(
                "b",
                RawNode::Branch(branch([("c", raw_leaf("Deep")), ("d", raw_leaf("Deeper"))])),
            )])),
        )]));

        let result = merge(Some(&existing), &fresh);
        assert_eq!(result.new_untranslated_count, 1);
        match result.merged.get_path(&["a", "b", "c"]) {
            Some(ProcessedNode::Leaf(pair)) => {
                assert_eq!(pair.translated.as_deref(), Some("Profond"));
            }
            other => panic!("Expected leaf, got {:?}", other),
        }
    }

    // ========== Worked Example ==========

    #[test]
    fn test_worked_example() {
        let existing = ProcessedNode::Branch(branch([(
            "a",
            ProcessedNode::Leaf(LeafPair::translated("Hi", "Salut")),
        )]));
        let fresh = RawNode::Branch(branch([
            ("a", raw_leaf("Hi")),
            ("b", raw_leaf("")),
            ("c", raw_leaf("New")),
        ]));

        let result = merge(Some(&existing), &fresh);

        let expected = ProcessedNode::Branch(branch([
            ("a", ProcessedNode::Leaf(LeafPair::translated("Hi", "Salut"))),
            ("b", ProcessedNode::Leaf(LeafPair::translated("", ""))),
            ("c", ProcessedNode::Leaf(LeafPair::untranslated("New"))),
        ]));
        assert_eq!(result.merged, expected);
        assert_eq!(result.new_untranslated_count, 1);
    }

    // ========== Idempotence ==========

    #[test]
    fn test_merging_twice_changes_nothing() {
        let existing = ProcessedNode::Branch(branch([
            ("a", ProcessedNode::Leaf(LeafPair::translated("Hi", "Salut"))),
            ("b", ProcessedNode::Leaf(LeafPair::untranslated("Bye"))),
        ]));
        let fresh = RawNode::Branch(branch([
            ("a", raw_leaf("Hi")),
            ("b", raw_leaf("Bye")),
            ("c", raw_leaf("")),
        ]));

        let first = merge(Some(&existing), &fresh);
        let second = merge(Some(&first.merged), &fresh);

        assert_eq!(first.merged, second.merged);
        assert_eq!(first.new_untranslated_count, second.new_untranslated_count);
    }

    #[test]
    fn test_empty_inputs() {
        let result = merge(None, &RawNode::empty());
        assert_eq!(result.merged, ProcessedNode::empty());
        assert_eq!(result.new_untranslated_count, 0);

        let existing = ProcessedNode::empty();
        let result = merge(Some(&existing), &RawNode::empty());
        assert_eq!(result.merged, ProcessedNode::empty());
        assert_eq!(result.new_untranslated_count, 0);
    }
}
