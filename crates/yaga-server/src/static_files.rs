//! Static asset delivery from a single directory.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use yaga_core::error::Result;

const INDEX_FILE: &str = "index.html";

/// A loaded asset and its MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub content_type: String,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
}

impl StaticFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Maps a request path to a file under the root.
    ///
    /// Returns `None` for anything that could leave the root: `..`,
    /// absolute paths, drive prefixes.
    pub fn resolve(&self, relative: &str) -> Option<PathBuf> {
        let relative = Path::new(relative);
        let mut path = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => path.push(part),
                Component::CurDir => {}
                _ => return None,
            }
        }
        Some(path)
    }

    /// Loads an asset; `Ok(None)` when it does not exist.
    pub async fn load(&self, relative: &str) -> Result<Option<Asset>> {
        let Some(mut path) = self.resolve(relative) else {
            tracing::debug!("Refusing static path outside root: {}", relative);
            return Ok(None);
        };

        if tokio::fs::metadata(&path).await.is_ok_and(|m| m.is_dir()) {
            path.push(INDEX_FILE);
        }

        match tokio::fs::read(&path).await {
            Ok(body) => Ok(Some(Asset {
                content_type: mime_guess::from_path(&path)
                    .first_or_octet_stream()
                    .to_string(),
                body,
            })),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn index(&self) -> Result<Option<Asset>> {
        self.load(INDEX_FILE).await
    }
}
