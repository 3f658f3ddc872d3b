// Local file fetcher — reads corpus text from disk.
//
// Useful offline and for reproducible runs: save two articles as text files
// and compare them with `--source file`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use super::traits::DocumentFetcher;

/// Reads documents as UTF-8 text files relative to a root directory.
pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a document id to a path. Absolute ids are used as-is.
    pub fn resolve(&self, id: &str) -> PathBuf {
        let path = Path::new(id);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

#[async_trait]
impl DocumentFetcher for FileFetcher {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn fetch(&self, id: &str) -> Result<Option<String>> {
        let path = self.resolve(id);
        debug!(path = %path.display(), "Reading document file");

        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }
}
