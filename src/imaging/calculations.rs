//! Pure calculation functions for variant dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

use super::backend::Dimensions;

/// What to do for one configured width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannedVariant {
    /// Resample down to `width × height`.
    Resize { width: u32, height: u32 },
    /// The configured width is not smaller than the source; reference the
    /// original at its own width.
    Original { width: u32 },
}

/// Height for `width` at the given height/width aspect ratio.
///
/// Halfway cases round to even. A result that rounds to zero is clamped to
/// one pixel instead of being treated as an error, so extremely wide sources
/// still get a variant at every width.
///
/// ```
/// # use responsive_images::imaging::scaled_height;
/// assert_eq!(scaled_height(768, 0.5), 384);
/// assert_eq!(scaled_height(1024, 1001.0 / 2048.0), 500);
/// ```
pub fn scaled_height(width: u32, aspect: f64) -> u32 {
    let height = (width as f64 * aspect).round_ties_even();
    (height as u32).max(1)
}

/// Plan one variant per configured width, in the order given.
///
/// Widths at or above the original width never upscale: they become
/// [`PlannedVariant::Original`] entries carrying the original width, one per
/// such configured width.
pub fn plan_variants(original: Dimensions, widths: &[u32]) -> Vec<PlannedVariant> {
    let aspect = original.aspect();
    widths
        .iter()
        .map(|&width| {
            if width >= original.width {
                PlannedVariant::Original {
                    width: original.width,
                }
            } else {
                PlannedVariant::Resize {
                    width,
                    height: scaled_height(width, aspect),
                }
            }
        })
        .collect()
}
