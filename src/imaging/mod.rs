//! Image processing: decode, normalize, resize, encode.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode + RGB** | `image::ImageReader` + `to_rgb8` |
//! | **Resize** | Lanczos3 via `image::imageops::resize` |
//! | **Encode → JPEG** | `image` JPEG encoder |
//! | **Encode → WebP** | `webp` (libwebp, lossy) |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing encode operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level variant generation combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{PlannedVariant, plan_variants, scaled_height};
pub use operations::{GeneratedVariant, VariantConfig, VariantOrigin, create_variants};
pub use params::{EncodeParams, OutputFormat, Quality};
pub use rust_backend::RustBackend;
