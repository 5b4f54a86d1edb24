/// Locale Tree Reconciler
///
/// This module provides the reconciliation engine for the localesync
/// library. It merges a previously edited "processed" tree with a freshly
/// pulled "raw" tree, classifying every leaf key as newly added, removed,
/// or already translated, and computes translation-completeness
/// statistics.
///
/// # Overview
///
/// The reconciler consists of four independent pieces:
///
/// 1. **Tree Merge** - Rebuilds the working copy in the shape of the fresh
///    upstream tree, carrying existing translations forward
/// 2. **Statistics** - Counts translated and overall translation units
/// 3. **Conversion** - Strips a processed tree back to raw form for export
/// 4. **Enumeration** - Walks outstanding (untranslated) leaves in
///    deterministic pre-order
///
/// All four are pure, synchronous functions: inputs are never mutated and
/// no state survives a call. The end-to-end fetch-and-merge operation
/// lives in [`crate::sync`].
///
/// # Example
///
/// ```ignore
/// use localesync::reconcile::{merge, statistics, unused_translated_keys_count};
/// use localesync::codec::decode_document;
///
/// let fresh = decode_document(r#"{"a":"Hi","b":"New"}"#)?;
/// let result = merge(existing.as_ref(), &fresh);
/// let unused = unused_translated_keys_count(existing.as_ref(), &result.merged);
/// let stats = statistics(&result.merged);
/// println!("{}/{} translated", stats.translated_count, stats.overall_count);
/// ```
pub mod convert;
pub mod merge;
pub mod stats;
pub mod walk;

pub use convert::{to_document, to_raw};
pub use merge::{MergeResult, merge};
pub use stats::{Statistics, statistics, unused_translated_keys_count};
pub use walk::{UntranslatedKey, UntranslatedKeys, untranslated_keys};
