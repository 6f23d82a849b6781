//! Side-by-side compositing of original and processed images.

use crate::types::{PipelineError, RgbImage};

/// Concatenate two RGB images horizontally: `left` then `right`.
///
/// The output has the shared height and the summed width. No resizing
/// or letterboxing is performed.
///
/// # Errors
///
/// Returns [`PipelineError::DimensionMismatch`] when the heights
/// differ. The pipeline derives the processed buffer from the
/// original, so a mismatch means an internal invariant was violated;
/// failing beats silently cropping.
pub fn hstack(left: &RgbImage, right: &RgbImage) -> Result<RgbImage, PipelineError> {
    if left.height() != right.height() {
        return Err(PipelineError::DimensionMismatch {
            left: left.height(),
            right: right.height(),
        });
    }

    let mut out = RgbImage::new(left.width() + right.width(), left.height());
    image::imageops::replace(&mut out, left, 0, 0);
    image::imageops::replace(&mut out, right, i64::from(left.width()), 0);
    Ok(out)
}
