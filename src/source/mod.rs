// Document sources — where raw corpus text comes from.
//
// The DocumentFetcher trait hides the backend. WikipediaFetcher reads article
// extracts over HTTP; FileFetcher reads local text files. Either way, a
// document that can't be found or fetched becomes empty text so the analysis
// still runs to completion.

pub mod file;
pub mod traits;
pub mod wikipedia;

use tracing::{info, warn};

pub use traits::DocumentFetcher;

/// Raw text for one document, tagged with the identifier it was fetched by.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub title: String,
    pub text: String,
    /// False when the source had no such document or the fetch failed
    pub found: bool,
}

impl RawDocument {
    pub fn new(title: &str, text: String) -> Self {
        Self {
            title: title.to_string(),
            text,
            found: true,
        }
    }

    /// An empty placeholder for a document that could not be retrieved.
    pub fn missing(title: &str) -> Self {
        Self {
            title: title.to_string(),
            text: String::new(),
            found: false,
        }
    }
}

/// Fetch a document, collapsing "not found" and fetch errors to empty text.
///
/// Never fails: errors are logged and reported through `found = false`.
pub async fn fetch_document(fetcher: &dyn DocumentFetcher, title: &str) -> RawDocument {
    match fetcher.fetch(title).await {
        Ok(Some(text)) => {
            info!(
                source = fetcher.name(),
                title = title,
                chars = text.chars().count(),
                "Fetched document"
            );
            RawDocument::new(title, text)
        }
        Ok(None) => {
            warn!(source = fetcher.name(), title = title, "Document does not exist");
            RawDocument::missing(title)
        }
        Err(e) => {
            warn!(source = fetcher.name(), title = title, error = %e, "Failed to fetch document");
            RawDocument::missing(title)
        }
    }
}
