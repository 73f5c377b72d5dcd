//! Pure Rust decode/resize plus libwebp for lossy WebP.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, WebP) | `image::ImageReader` (format guessed from content) |
//! | Normalize | `DynamicImage::to_rgb8` (drops alpha and palette) |
//! | Resize | `image::imageops::resize` with `Lanczos3` filter |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder::new_with_quality` |
//! | Encode → WebP | `webp::Encoder::encode_advanced` (lossy, method 6) |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{EncodeParams, OutputFormat};
use image::imageops::FilterType;
use image::{ImageReader, RgbImage};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Backend built on the `image` crate, with libwebp for WebP output.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn save_jpeg(img: &RgbImage, path: &Path, quality: u8) -> Result<(), BackendError> {
    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut writer, quality);
    img.write_with_encoder(encoder)
        .map_err(|e| BackendError::Encode(format!("JPEG {}: {}", path.display(), e)))?;
    writer.flush()?;
    Ok(())
}

/// libwebp effort level, 0 (fastest) to 6 (smallest output).
const WEBP_METHOD: i32 = 6;

fn save_webp(img: &RgbImage, path: &Path, quality: f32) -> Result<(), BackendError> {
    let mut config = webp::WebPConfig::new()
        .map_err(|_| BackendError::Encode("WebP: cannot initialize encoder config".into()))?;
    config.lossless = 0;
    config.quality = quality;
    config.method = WEBP_METHOD;

    let encoded = webp::Encoder::from_rgb(img.as_raw(), img.width(), img.height())
        .encode_advanced(&config)
        .map_err(|e| BackendError::Encode(format!("WebP {}: {:?}", path.display(), e)))?;
    std::fs::write(path, &*encoded)?;
    Ok(())
}

impl ImageBackend for RustBackend {
    type Image = RgbImage;

    fn open(&self, path: &Path) -> Result<RgbImage, BackendError> {
        let decoded = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(|e| BackendError::Decode(format!("{}: {}", path.display(), e)))?;
        Ok(decoded.to_rgb8())
    }

    fn dimensions(&self, image: &RgbImage) -> Dimensions {
        Dimensions {
            width: image.width(),
            height: image.height(),
        }
    }

    fn resize(&self, image: &RgbImage, width: u32, height: u32) -> RgbImage {
        image::imageops::resize(image, width, height, FilterType::Lanczos3)
    }

    fn encode(&self, image: &RgbImage, params: &EncodeParams) -> Result<(), BackendError> {
        let quality = params.quality.value();
        match params.format {
            OutputFormat::Jpeg => save_jpeg(image, &params.output, quality as u8),
            OutputFormat::WebP => save_webp(image, &params.output, quality as f32),
        }
    }
}
