//! Batch conversion of source images into responsive variants.
//!
//! ## Pipeline
//!
//! ```text
//! assets/freepik/*.jp*g ──discover──► decode + RGB ──► per width:
//!     width <  original → resize (Lanczos3) → hero-768.jpg + hero-768.webp
//!     width >= original → reference /assets/freepik/hero.jpg
//! ──► data/images.json (each image under "key" and "/key")
//! ```
//!
//! ## Output Structure
//!
//! ```text
//! assets/optimized/
//! ├── hero-768.jpg
//! ├── hero-768.webp
//! ├── hero-1280.jpg
//! ├── hero-1280.webp
//! └── ...
//! data/images.json
//! ```
//!
//! ## Failure Handling
//!
//! A source that cannot be decoded, or whose variants cannot be encoded, is
//! skipped: a warning is logged, a [`ProcessEvent::ImageSkipped`] is emitted,
//! and the image gets no manifest entry. Files already written for it are
//! left in place. Only conditions that affect the whole run (output
//! directory, source listing, manifest write) are returned as errors.
//!
//! Images are processed one at a time; each decoded buffer is dropped before
//! the next file is opened.

use crate::config::ConverterConfig;
use crate::discover::{self, DiscoverError};
use crate::imaging::{
    BackendError, GeneratedVariant, ImageBackend, RustBackend, VariantConfig, VariantOrigin,
    create_variants,
};
use crate::manifest::{ImageEntry, Manifest, ManifestError, Variant};
use crate::naming;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal errors that abort the whole run.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("cannot create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Discover(#[from] DiscoverError),
    #[error("cannot write manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: ManifestError,
    },
}

/// Why a single image was skipped.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("not under the project root: {0}")]
    OutsideRoot(PathBuf),
    #[error("no usable file name: {0}")]
    InvalidName(PathBuf),
}

/// Whether a variant was freshly encoded or points at the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantStatus {
    Encoded { width: u32, height: u32 },
    Original { width: u32 },
}

/// Display info for one variant of a processed image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantInfo {
    pub label: String,
    pub status: VariantStatus,
}

/// Progress events, emitted in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessEvent {
    ImageProcessed {
        /// 1-based position among successfully processed images.
        index: usize,
        source_path: String,
        variants: Vec<VariantInfo>,
    },
    ImageSkipped {
        source_path: String,
        reason: String,
    },
}

/// Outcome of a full run.
#[derive(Debug)]
pub struct ProcessResult {
    pub manifest: Manifest,
    /// Images that made it into the manifest.
    pub processed: usize,
    pub skipped: usize,
    pub manifest_path: PathBuf,
    pub output_dir: PathBuf,
}

/// Run the conversion with the production backend.
pub fn process(
    root: &Path,
    config: &ConverterConfig,
    on_event: impl FnMut(ProcessEvent),
) -> Result<ProcessResult, ProcessError> {
    process_with_backend(&RustBackend::new(), root, config, on_event)
}

/// Run the conversion with a specific backend (allows testing with mock).
pub fn process_with_backend<B: ImageBackend>(
    backend: &B,
    root: &Path,
    config: &ConverterConfig,
    mut on_event: impl FnMut(ProcessEvent),
) -> Result<ProcessResult, ProcessError> {
    let output_dir = config.output_dir(root);
    std::fs::create_dir_all(&output_dir).map_err(|source| ProcessError::OutputDir {
        path: output_dir.clone(),
        source,
    })?;

    let sources = discover::discover(&config.source_dir(root), &config.pattern)?;
    let variant_config = config.variant_config(root);

    let mut manifest = Manifest::new();
    let mut skipped = 0;

    for path in &sources {
        let shown = naming::relative_key(root, path)
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        match process_image(backend, root, path, &variant_config, &config.sizes) {
            Ok((key, entry, variants)) => {
                manifest.insert(&key, entry);
                on_event(ProcessEvent::ImageProcessed {
                    index: manifest.image_count(),
                    source_path: key,
                    variants,
                });
            }
            Err(err) => {
                tracing::warn!(path = %shown, error = %err, "skipping image");
                skipped += 1;
                on_event(ProcessEvent::ImageSkipped {
                    source_path: shown,
                    reason: err.to_string(),
                });
            }
        }
    }

    let manifest_path = config.manifest_path(root);
    manifest
        .write(&manifest_path)
        .map_err(|source| ProcessError::Manifest {
            path: manifest_path.clone(),
            source,
        })?;
    tracing::info!(
        path = %manifest_path.display(),
        images = manifest.image_count(),
        skipped,
        "wrote image map"
    );

    Ok(ProcessResult {
        processed: manifest.image_count(),
        skipped,
        manifest,
        manifest_path,
        output_dir,
    })
}

/// Convert one source image.
///
/// Returns the manifest key, the entry, and per-variant display info. On any
/// error nothing is returned for the image, even if some variants were
/// already written.
pub fn process_image<B: ImageBackend>(
    backend: &B,
    root: &Path,
    path: &Path,
    config: &VariantConfig,
    sizes: &str,
) -> Result<(String, ImageEntry, Vec<VariantInfo>), ImageError> {
    let key =
        naming::relative_key(root, path).ok_or_else(|| ImageError::OutsideRoot(path.to_path_buf()))?;
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ImageError::InvalidName(path.to_path_buf()))?;

    let image = backend.open(path)?;
    let generated = create_variants(
        backend,
        &image,
        &naming::with_leading_slash(&key),
        stem,
        config,
    )?;

    let info = generated.iter().map(variant_info).collect();
    let entry = ImageEntry {
        sources: generated
            .into_iter()
            .map(|v| Variant {
                src: v.src,
                width: v.width,
            })
            .collect(),
        sizes: sizes.to_string(),
    };
    Ok((key, entry, info))
}

fn variant_info(variant: &GeneratedVariant) -> VariantInfo {
    let status = match variant.origin {
        VariantOrigin::Encoded { height } => VariantStatus::Encoded {
            width: variant.width,
            height,
        },
        VariantOrigin::Original => VariantStatus::Original {
            width: variant.width,
        },
    };
    VariantInfo {
        label: format!("{}px", variant.target),
        status,
    }
}
