//! High-level image operations.
//!
//! These functions combine the dimension plan with backend execution: they
//! take configuration, decide which files to write, and call the backend.

use super::backend::{BackendError, ImageBackend};
use super::calculations::{PlannedVariant, plan_variants};
use super::params::{EncodeParams, OutputFormat, Quality};
use crate::naming;
use std::path::PathBuf;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Configuration for responsive variant generation.
#[derive(Debug, Clone)]
pub struct VariantConfig {
    /// Target widths, ascending.
    pub widths: Vec<u32>,
    pub jpeg_quality: Quality,
    pub webp_quality: Quality,
    /// Directory the encoded files are written to.
    pub output_dir: PathBuf,
    /// URL prefix under which `output_dir` is served.
    pub public_prefix: String,
}

/// How a variant came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantOrigin {
    /// A resized JPEG/WebP pair was written.
    Encoded { height: u32 },
    /// The original file is referenced; nothing was written.
    Original,
}

/// One entry of an image's variant list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedVariant {
    /// The configured width this variant answers for.
    pub target: u32,
    /// Public URL of the canonical (JPEG or original) file.
    pub src: String,
    /// Actual pixel width of the referenced file.
    pub width: u32,
    pub origin: VariantOrigin,
}

/// Create the variants of one decoded image, one per configured width.
///
/// For each resized width a JPEG and a WebP file named `<stem>-<width>.<ext>`
/// are written; only the JPEG URL is returned. Widths the source cannot fill
/// reference `original_url` at the original width.
pub fn create_variants<B: ImageBackend>(
    backend: &B,
    image: &B::Image,
    original_url: &str,
    stem: &str,
    config: &VariantConfig,
) -> Result<Vec<GeneratedVariant>> {
    let original = backend.dimensions(image);
    let plan = plan_variants(original, &config.widths);
    let mut variants = Vec::with_capacity(plan.len());

    for (&target, planned) in config.widths.iter().zip(plan) {
        let variant = match planned {
            PlannedVariant::Original { width } => GeneratedVariant {
                target,
                src: original_url.to_string(),
                width,
                origin: VariantOrigin::Original,
            },
            PlannedVariant::Resize { width, height } => {
                let resized = backend.resize(image, width, height);

                let jpeg_name = naming::variant_file_name(stem, width, OutputFormat::Jpeg);
                let webp_name = naming::variant_file_name(stem, width, OutputFormat::WebP);

                backend.encode(
                    &resized,
                    &EncodeParams {
                        output: config.output_dir.join(&jpeg_name),
                        format: OutputFormat::Jpeg,
                        quality: config.jpeg_quality,
                    },
                )?;
                backend.encode(
                    &resized,
                    &EncodeParams {
                        output: config.output_dir.join(&webp_name),
                        format: OutputFormat::WebP,
                        quality: config.webp_quality,
                    },
                )?;

                tracing::debug!(stem, width, height, "encoded variant pair");

                GeneratedVariant {
                    target,
                    src: naming::public_url(&config.public_prefix, &jpeg_name),
                    width,
                    origin: VariantOrigin::Encoded { height },
                }
            }
        };
        variants.push(variant);
    }

    Ok(variants)
}
