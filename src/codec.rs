//! Locale document codec
//!
//! Upstream locale files are JSON documents: nested objects whose leaves
//! are strings. This module converts between the textual document and the
//! typed [`RawNode`] tree. The codec is round-trip-safe for well-formed
//! input: `decode_document(encode_document(tree)?)` reproduces the tree.

use crate::tree::RawNode;

/// Error while decoding or encoding a locale document
#[derive(Debug)]
pub enum DocumentError {
    /// The document text is not a valid locale mapping
    Parse(serde_json::Error),
    /// A tree could not be rendered back to text
    Encode(serde_json::Error),
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::Parse(e) => write!(f, "Failed to parse locale document: {}", e),
            DocumentError::Encode(e) => write!(f, "Failed to encode locale document: {}", e),
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DocumentError::Parse(e) | DocumentError::Encode(e) => Some(e),
        }
    }
}

/// Decode a locale document into a raw tree
///
/// # Arguments
/// * `text` - The document text, a JSON object of nested string leaves
///
/// # Errors
/// Returns [`DocumentError::Parse`] when the text is not valid JSON or
/// contains values other than strings and objects.
pub fn decode_document(text: &str) -> Result<RawNode, DocumentError> {
    serde_json::from_str(text).map_err(DocumentError::Parse)
}

/// Encode a raw tree back into document text
///
/// Output is pretty-printed with keys in sorted order, so re-exports of an
/// unchanged tree are byte-identical.
///
/// # Errors
/// Returns [`DocumentError::Encode`] on serializer failure; a well-formed
/// tree (string keys, string leaves) never triggers it.
pub fn encode_document(tree: &RawNode) -> Result<String, DocumentError> {
    serde_json::to_string_pretty(tree).map_err(DocumentError::Encode)
}
