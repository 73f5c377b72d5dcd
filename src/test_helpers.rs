//! Shared test utilities.
//!
//! Builds throwaway project roots laid out like the default configuration
//! (`assets/freepik/` sources, `data/images.json` manifest) and creates
//! synthetic images for the real backend.

use image::{ImageEncoder, RgbImage};
use std::path::Path;
use tempfile::TempDir;

/// Create a temp project root with empty files named `names` in
/// `assets/freepik/`. Pair with `MockBackend`, which never reads them.
pub fn setup_project(names: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("assets/freepik");
    std::fs::create_dir_all(&source).unwrap();
    for name in names {
        std::fs::write(source.join(name), b"").unwrap();
    }
    tmp
}

/// Write a small valid JPEG with the given dimensions.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Parse the manifest written under `root` at the default location.
pub fn read_manifest_json(root: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(root.join("data/images.json"))
        .unwrap_or_else(|e| panic!("manifest not written under {}: {e}", root.display()));
    serde_json::from_str(&content).unwrap()
}
