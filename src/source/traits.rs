// Fetcher trait — the boundary between the analysis core and the outside.

use anyhow::Result;
use async_trait::async_trait;

/// Something that can return the plain text of a named document.
///
/// Implementations return `Ok(None)` when the document does not exist and
/// `Err` for transport or I/O failures. Callers normally go through
/// [`super::fetch_document`], which turns both into an empty document.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Short backend name for logs and reports.
    fn name(&self) -> &'static str;

    /// Retrieve the document's plain text.
    async fn fetch(&self, id: &str) -> Result<Option<String>>;
}
