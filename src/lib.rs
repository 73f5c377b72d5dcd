//! # Responsive Images
//!
//! Batch generator for responsive image variants. Point it at a directory of
//! source photos and it writes downscaled JPEG and WebP copies at a fixed set
//! of widths, plus a JSON map the frontend uses to build `srcset` lists.
//!
//! ```text
//! assets/freepik/hero.jpg (2000×1000)
//!   → assets/optimized/hero-768.jpg   hero-768.webp
//!   → assets/optimized/hero-1280.jpg  hero-1280.webp
//!   → assets/optimized/hero-1600.jpg  hero-1600.webp
//!   → data/images.json["assets/freepik/hero.jpg"] and ["/assets/freepik/hero.jpg"]
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`process`] | The batch run: discover, convert each image, write the manifest |
//! | [`discover`] | Non-recursive wildcard listing of source images |
//! | [`imaging`] | Decode, RGB normalization, Lanczos3 resize, JPEG/WebP encoding |
//! | [`manifest`] | The serialized image map and its double-keyed entries |
//! | [`naming`] | Keys, variant file names, public URLs, wildcard matching |
//! | [`config`] | Built-in defaults and optional TOML overrides |
//! | [`output`] | Operator-facing report formatting |
//! | [`logging`] | `tracing` subscriber setup |
//!
//! # Design Decisions
//!
//! ## No Upscaling
//!
//! A configured width at or above the source width never produces a file.
//! The entry for that width points at the original at its real width, so the
//! variant list always has one item per configured width and the browser
//! never downloads an enlarged copy.
//!
//! ## One Canonical URL Per Width
//!
//! Both a JPEG and a WebP are written for every resized width, but the map
//! only records the JPEG. The frontend derives the WebP sibling from the
//! naming convention `<stem>-<width>.<ext>` when it wants it.
//!
//! ## Full Regeneration
//!
//! The map is rebuilt from scratch on every run and keys are sorted, so the
//! same inputs always give a byte-identical file. A source that fails to
//! decode or encode is left out entirely rather than recorded half-done.

pub mod config;
pub mod discover;
pub mod imaging;
pub mod logging;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod process;

#[cfg(test)]
pub(crate) mod test_helpers;
