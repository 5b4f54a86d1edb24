//! localesync - translation catalog management
//!
//! Stores hierarchical locale data as trees of original/translated string
//! pairs, and reconciles locally edited catalogs against freshly fetched
//! upstream locale files. The reconciler classifies every leaf key as
//! newly added, removed, or already translated, and reports
//! translation-completeness statistics.

pub mod codec;
pub mod fetch;
pub mod reconcile;
pub mod store;
pub mod sync;
pub mod tree;

// Re-export the core types for convenient access
pub use codec::{DocumentError, decode_document, encode_document};
pub use fetch::{FetchError, HttpFetcher, MockFetcher, MockMode, RawDocumentFetcher};
pub use reconcile::{
    MergeResult, Statistics, UntranslatedKey, UntranslatedKeys, merge, statistics, to_document,
    to_raw, untranslated_keys, unused_translated_keys_count,
};
pub use store::{load_all_catalogs_from_dir, load_catalog_from_file, save_catalog_to_file};
pub use sync::{ReconcileError, ReconcileOutcome, reconcile};
pub use tree::{LeafPair, ProcessedNode, RawNode};
