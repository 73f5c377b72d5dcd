//! The image map consumed by the responsive-image frontend.
//!
//! Serialized shape (one entry shown, stored under both keys):
//!
//! ```json
//! {
//!   "/assets/freepik/hero.jpg": {
//!     "sources": [
//!       { "src": "/assets/optimized/hero-768.jpg", "width": 768 },
//!       { "src": "/assets/optimized/hero-1280.jpg", "width": 1280 },
//!       { "src": "/assets/freepik/hero.jpg", "width": 1500 }
//!     ],
//!     "sizes": "100vw"
//!   },
//!   "assets/freepik/hero.jpg": { ... }
//! }
//! ```
//!
//! Keys are kept in a `BTreeMap`, so the serialized document is identical
//! across runs with the same inputs.

use crate::naming;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One rendition of an image. Height is left to the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub src: String,
    pub width: u32,
}

/// All variants of one source image plus its `sizes` hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    /// Ordered by configured width, ascending.
    pub sources: Vec<Variant>,
    pub sizes: String,
}

/// Map from image key to entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: BTreeMap<String, ImageEntry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry under `key` and under `/key`.
    pub fn insert(&mut self, key: &str, entry: ImageEntry) {
        let bare = key.trim_start_matches('/').to_string();
        self.entries
            .insert(naming::with_leading_slash(&bare), entry.clone());
        self.entries.insert(bare, entry);
    }

    pub fn get(&self, key: &str) -> Option<&ImageEntry> {
        self.entries.get(key)
    }

    /// Number of keys, which is twice the number of images.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct images.
    pub fn image_count(&self) -> usize {
        self.entries.keys().filter(|k| !k.starts_with('/')).count()
    }

    /// Serialize as pretty JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the manifest to `path`, replacing any previous file and creating
    /// the parent directory if needed.
    pub fn write(&self, path: &Path) -> Result<(), ManifestError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
