//! Processed → raw conversion and document export

use crate::codec::{DocumentError, encode_document};
use crate::tree::{ProcessedNode, RawNode};
use std::collections::BTreeMap;

/// Strip a processed tree back down to its translated values
///
/// Every leaf becomes its `translated` text; a missing translation becomes
/// the empty string, so the conversion is total over any well-formed tree.
/// Branches convert structurally.
pub fn to_raw(tree: &ProcessedNode) -> RawNode {
    match tree {
        ProcessedNode::Leaf(pair) => RawNode::Leaf(pair.translated.clone().unwrap_or_default()),
        ProcessedNode::Branch(children) => RawNode::Branch(
            children
                .iter()
                .map(|(key, child)| (key.clone(), to_raw(child)))
                .collect::<BTreeMap<_, _>>(),
        ),
    }
}

/// Export a processed tree as locale document text
///
/// [`to_raw`] followed by the codec; the public export entry point. A
/// well-formed tree always encodes.
pub fn to_document(tree: &ProcessedNode) -> Result<String, DocumentError> {
    encode_document(&to_raw(tree))
}
