//! Translation-completeness statistics
//!
//! [`statistics`] is the single source of truth for which leaves count as
//! translation units. [`unused_translated_keys_count`] reuses it when a
//! whole subtree disappears upstream, so the two can never disagree on the
//! counting rules.

use crate::tree::ProcessedNode;

/// Completion counters over a processed tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Statistics {
    /// Leaves with a translation supplied
    pub translated_count: usize,

    /// All counted leaves, translated or not
    pub overall_count: usize,
}

impl Statistics {
    fn add(self, other: Statistics) -> Statistics {
        Statistics {
            translated_count: self.translated_count + other.translated_count,
            overall_count: self.overall_count + other.overall_count,
        }
    }
}

/// Compute completion statistics for a processed tree
///
/// Leaves whose `original` is the empty string are auto-resolved units and
/// excluded from both counters. Every other leaf increments
/// `overall_count`; `translated_count` additionally requires a supplied
/// translation. Recomputed on demand, never cached.
pub fn statistics(tree: &ProcessedNode) -> Statistics {
    match tree {
        ProcessedNode::Leaf(pair) => {
            if pair.original.is_empty() {
                // Auto-resolved: not a real translation unit
                Statistics::default()
            } else {
                Statistics {
                    translated_count: usize::from(pair.is_translated()),
                    overall_count: 1,
                }
            }
        }
        ProcessedNode::Branch(children) => children
            .values()
            .map(statistics)
            .fold(Statistics::default(), Statistics::add),
    }
}

/// Count translated leaves of `existing` whose key path vanished from `merged`
///
/// When a key present in `existing` is missing from `merged`, the whole
/// subtree rooted there is gone: its translated-leaf total (per
/// [`statistics`]) is added in bulk rather than recursing into a tree that
/// no longer has a counterpart. A shape change at a path (leaf upstream
/// replaced by a branch, or the reverse) removes every leaf the existing
/// side held there and is counted the same way. `existing = None` yields 0.
pub fn unused_translated_keys_count(
    existing: Option<&ProcessedNode>,
    merged: &ProcessedNode,
) -> usize {
    match existing {
        None => 0,
        Some(tree) => removed_translated_count(tree, merged),
    }
}

fn removed_translated_count(existing: &ProcessedNode, merged: &ProcessedNode) -> usize {
    match (existing, merged) {
        (ProcessedNode::Branch(old_children), ProcessedNode::Branch(new_children)) => old_children
            .iter()
            .map(|(key, old_child)| match new_children.get(key) {
                // Key survived: descend
                Some(new_child) => removed_translated_count(old_child, new_child),
                // Key gone: the whole old subtree is removed
                None => statistics(old_child).translated_count,
            })
            .sum(),
        (ProcessedNode::Leaf(_), ProcessedNode::Leaf(_)) => 0,
        // Shape changed at this path: nothing the old side held survives
        (old, _) => statistics(old).translated_count,
    }
}
