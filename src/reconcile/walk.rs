//! Untranslated-key enumeration
//!
//! A cursor over every leaf still waiting for a translation, used to jump
//! between outstanding items. Traversal is depth-first pre-order in key
//! order, so repeated walks over an unchanged tree always yield the same
//! sequence; restart by calling [`untranslated_keys`] again.

use crate::tree::{LeafPair, ProcessedNode};

/// One outstanding translation unit and where it lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntranslatedKey<'a> {
    /// Ordered keys from the root down to the leaf
    pub path: Vec<String>,

    /// The leaf itself
    pub leaf: &'a LeafPair,
}

impl UntranslatedKey<'_> {
    /// Dotted rendering of the path, for display and filtering
    pub fn dotted_path(&self) -> String {
        self.path.join(".")
    }
}

/// Enumerate leaves whose translation is still absent
///
/// Lazy and finite; nothing is visited until the iterator is advanced.
pub fn untranslated_keys(tree: &ProcessedNode) -> UntranslatedKeys<'_> {
    UntranslatedKeys {
        stack: vec![(Vec::new(), tree)],
    }
}

/// Iterator state: an explicit stack of (path, node) frames
///
/// Children are pushed in reverse key order so the pop order is ascending,
/// giving deterministic pre-order traversal.
pub struct UntranslatedKeys<'a> {
    stack: Vec<(Vec<String>, &'a ProcessedNode)>,
}

impl<'a> Iterator for UntranslatedKeys<'a> {
    type Item = UntranslatedKey<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, node)) = self.stack.pop() {
            match node {
                ProcessedNode::Leaf(pair) => {
                    if pair.translated.is_none() {
                        return Some(UntranslatedKey { path, leaf: pair });
                    }
                }
                ProcessedNode::Branch(children) => {
                    for (key, child) in children.iter().rev() {
                        let mut child_path = path.clone();
                        child_path.push(key.clone());
                        self.stack.push((child_path, child));
                    }
                }
            }
        }
        None
    }
}
