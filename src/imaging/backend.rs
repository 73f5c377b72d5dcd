//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the four steps the converter needs from
//! an imaging library: open (decode + normalize to RGB), report dimensions,
//! resize, and encode. The decoded image type is an associated type so the
//! production backend can hold real pixel buffers while tests use a mock that
//! only tracks dimensions.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend).

use super::params::EncodeParams;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decode failed: {0}")]
    Decode(String),
    #[error("Encode failed: {0}")]
    Encode(String),
}

/// Pixel dimensions of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Height divided by width. A zero-width image reports `1.0`.
    pub fn aspect(self) -> f64 {
        if self.width == 0 {
            1.0
        } else {
            self.height as f64 / self.width as f64
        }
    }
}

/// Trait for image processing backends.
///
/// A decoded image is owned by the caller for the duration of one source file
/// and dropped before the next one is opened.
pub trait ImageBackend {
    /// Decoded, RGB-normalized image.
    type Image;

    /// Decode an image file and convert it to 8-bit RGB.
    fn open(&self, path: &Path) -> Result<Self::Image, BackendError>;

    fn dimensions(&self, image: &Self::Image) -> Dimensions;

    /// Resample to exact dimensions with a high-quality filter.
    fn resize(&self, image: &Self::Image, width: u32, height: u32) -> Self::Image;

    /// Encode and write an image to disk.
    fn encode(&self, image: &Self::Image, params: &EncodeParams) -> Result<(), BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Mock backend that records operations without touching pixels.
    ///
    /// Images are looked up by file name; unknown names fail to open, the way
    /// a corrupt or unsupported file would.
    #[derive(Default)]
    pub struct MockBackend {
        pub images: HashMap<String, Dimensions>,
        pub failing_outputs: Vec<String>,
        pub operations: RefCell<Vec<RecordedOp>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Open(String),
        Resize { width: u32, height: u32 },
        Encode { output: String, quality: u32 },
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_images(images: &[(&str, u32, u32)]) -> Self {
            Self {
                images: images
                    .iter()
                    .map(|&(name, width, height)| (name.to_string(), Dimensions { width, height }))
                    .collect(),
                ..Self::default()
            }
        }

        /// Make every encode whose output file name equals `name` fail.
        pub fn failing_output(mut self, name: &str) -> Self {
            self.failing_outputs.push(name.to_string());
            self
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.borrow().clone()
        }
    }

    impl ImageBackend for MockBackend {
        type Image = Dimensions;

        fn open(&self, path: &Path) -> Result<Dimensions, BackendError> {
            self.operations
                .borrow_mut()
                .push(RecordedOp::Open(path.to_string_lossy().to_string()));

            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            self.images
                .get(&name)
                .copied()
                .ok_or_else(|| BackendError::Decode(format!("cannot identify image file {name}")))
        }

        fn dimensions(&self, image: &Dimensions) -> Dimensions {
            *image
        }

        fn resize(&self, _image: &Dimensions, width: u32, height: u32) -> Dimensions {
            self.operations
                .borrow_mut()
                .push(RecordedOp::Resize { width, height });
            Dimensions { width, height }
        }

        fn encode(&self, _image: &Dimensions, params: &EncodeParams) -> Result<(), BackendError> {
            let output = params.output.to_string_lossy().to_string();
            self.operations.borrow_mut().push(RecordedOp::Encode {
                output: output.clone(),
                quality: params.quality.value(),
            });

            let failing = params
                .output
                .file_name()
                .is_some_and(|n| self.failing_outputs.iter().any(|f| n == f.as_str()));
            if failing {
                return Err(BackendError::Encode(format!("mock failure for {output}")));
            }
            Ok(())
        }
    }

    #[test]
    fn aspect_is_height_over_width() {
        let dims = Dimensions {
            width: 2000,
            height: 1000,
        };
        assert_eq!(dims.aspect(), 0.5);
    }

    #[test]
    fn aspect_of_zero_width_is_one() {
        let dims = Dimensions {
            width: 0,
            height: 10,
        };
        assert_eq!(dims.aspect(), 1.0);
    }

    #[test]
    fn mock_opens_known_image() {
        let backend = MockBackend::with_images(&[("hero.jpg", 800, 600)]);

        let image = backend.open(Path::new("/src/hero.jpg")).unwrap();
        assert_eq!(
            backend.dimensions(&image),
            Dimensions {
                width: 800,
                height: 600
            }
        );

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], RecordedOp::Open(p) if p == "/src/hero.jpg"));
    }

    #[test]
    fn mock_rejects_unknown_image() {
        let backend = MockBackend::new();
        let result = backend.open(Path::new("/src/missing.jpg"));
        assert!(matches!(result, Err(BackendError::Decode(_))));
    }

    #[test]
    fn mock_records_resize_and_encode() {
        use crate::imaging::params::{OutputFormat, Quality};

        let backend = MockBackend::new().failing_output("bad-768.webp");
        let image = Dimensions {
            width: 2000,
            height: 1000,
        };

        let resized = backend.resize(&image, 768, 384);
        backend
            .encode(
                &resized,
                &EncodeParams {
                    output: "/out/ok-768.jpg".into(),
                    format: OutputFormat::Jpeg,
                    quality: Quality::new(82),
                },
            )
            .unwrap();
        let failed = backend.encode(
            &resized,
            &EncodeParams {
                output: "/out/bad-768.webp".into(),
                format: OutputFormat::WebP,
                quality: Quality::new(80),
            },
        );

        assert!(matches!(failed, Err(BackendError::Encode(_))));
        let ops = backend.get_operations();
        assert_eq!(
            ops[0],
            RecordedOp::Resize {
                width: 768,
                height: 384
            }
        );
        assert!(matches!(&ops[1], RecordedOp::Encode { quality: 82, .. }));
        assert!(matches!(&ops[2], RecordedOp::Encode { quality: 80, .. }));
    }
}
