//! End-to-end reconcile operation
//!
//! The single entry point the surrounding application calls: fetch the
//! upstream locale document, decode it, merge it into the local working
//! copy, and count the translations the upstream removal left behind. The
//! fetch is the only suspension point; once it resolves, the rest of the
//! pipeline is synchronous and pure.

use crate::codec::{DocumentError, decode_document};
use crate::fetch::{FetchError, RawDocumentFetcher};
use crate::reconcile::{merge, unused_translated_keys_count};
use crate::tree::ProcessedNode;
use tracing::debug;

/// Everything one reconcile pass reports back to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOutcome {
    /// The reconciled working copy, shaped like the upstream tree
    pub merged: ProcessedNode,

    /// Leaves left untranslated after the merge
    pub new_untranslated_count: usize,

    /// Translated leaves whose key path vanished upstream
    pub unused_translated_count: usize,
}

/// Error during a reconcile pass
#[derive(Debug)]
pub enum ReconcileError {
    /// Reconcile was called with an empty URL; no fetch was attempted
    MissingUrl,
    /// The transport collaborator failed; propagated unchanged
    Fetch(FetchError),
    /// The fetched document is not a valid locale mapping; propagated unchanged
    Decode(DocumentError),
}

impl std::fmt::Display for ReconcileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReconcileError::MissingUrl => write!(f, "No upstream URL configured"),
            ReconcileError::Fetch(e) => write!(f, "{}", e),
            ReconcileError::Decode(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ReconcileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReconcileError::MissingUrl => None,
            ReconcileError::Fetch(e) => Some(e),
            ReconcileError::Decode(e) => Some(e),
        }
    }
}

/// Fetch the upstream document and reconcile it with the local tree
///
/// Fails fast with [`ReconcileError::MissingUrl`] before any network I/O
/// when `url` is empty. Fetch and decode failures are surfaced as-is;
/// they are never retried here and never degraded into a partial success.
///
/// # Arguments
///
/// * `fetcher` - Transport collaborator supplying the document text
/// * `url` - Location of the upstream locale document
/// * `existing` - The local working copy, if any
///
/// # Example
///
/// ```ignore
/// use localesync::fetch::HttpFetcher;
/// use localesync::sync::reconcile;
///
/// let fetcher = HttpFetcher::new()?;
/// let outcome = reconcile(&fetcher, "https://example.org/fr.json", existing.as_ref()).await?;
/// println!(
///     "{} new, {} unused",
///     outcome.new_untranslated_count, outcome.unused_translated_count
/// );
/// ```
pub async fn reconcile(
    fetcher: &dyn RawDocumentFetcher,
    url: &str,
    existing: Option<&ProcessedNode>,
) -> Result<ReconcileOutcome, ReconcileError> {
    if url.trim().is_empty() {
        return Err(ReconcileError::MissingUrl);
    }

    let text = fetcher
        .fetch_raw_document(url)
        .await
        .map_err(ReconcileError::Fetch)?;
    debug!("Fetched {} bytes from {}", text.len(), url);

    let fresh = decode_document(&text).map_err(ReconcileError::Decode)?;

    let result = merge(existing, &fresh);
    let unused_translated_count = unused_translated_keys_count(existing, &result.merged);

    Ok(ReconcileOutcome {
        merged: result.merged,
        new_untranslated_count: result.new_untranslated_count,
        unused_translated_count,
    })
}
