//! Image decoding and grayscale conversion.
//!
//! Accepts raw image bytes (PNG, JPEG) and produces the decoded RGB
//! buffer plus a single-channel luminance image for the rest of the
//! pipeline.
//!
//! This is the first step in the pipeline: raw bytes in, `RgbImage`
//! and `GrayImage` out.

use image::{GrayImage, RgbImage};

use crate::types::PipelineError;

/// Decode raw image bytes into an 8-bit RGB buffer.
///
/// Supports PNG and JPEG (whatever the `image` crate can decode with
/// the enabled features). Other color layouts (grayscale, RGBA,
/// 16-bit) are converted to RGB during decode.
///
/// # Errors
///
/// Returns [`PipelineError::EmptyInput`] if `bytes` is empty.
/// Returns [`PipelineError::InvalidImage`] if the image format is
/// unrecognized or the data is corrupt.
#[must_use = "returns the decoded RGB image"]
pub fn decode_rgb(bytes: &[u8]) -> Result<RgbImage, PipelineError> {
    if bytes.is_empty() {
        return Err(PipelineError::EmptyInput);
    }

    let img = image::load_from_memory(bytes)?;
    Ok(img.to_rgb8())
}

/// Convert an RGB image to single-channel luminance.
///
/// Uses the standard luminance weighting via
/// [`image::imageops::grayscale`]: green contributes most, blue least.
#[must_use = "returns the grayscale image"]
pub fn to_grayscale(image: &RgbImage) -> GrayImage {
    image::imageops::grayscale(image)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Helper: encode an RGB image as a PNG byte buffer.
    fn encode_png(img: &RgbImage) -> Vec<u8> {
        let mut buf = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut buf);
        image::ImageEncoder::write_image(
            encoder,
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgb8,
        )
        .unwrap();
        buf
    }

    #[test]
    fn empty_input_returns_error() {
        let result = decode_rgb(&[]);
        assert!(matches!(result, Err(PipelineError::EmptyInput)));
    }

    #[test]
    fn corrupt_bytes_returns_invalid_image() {
        let result = decode_rgb(&[0xFF, 0xFE, 0x00, 0x01]);
        assert!(matches!(result, Err(PipelineError::InvalidImage(_))));
    }

    #[test]
    fn valid_png_decodes_with_matching_dimensions() {
        let img = RgbImage::from_fn(17, 31, |_, _| image::Rgb([128, 64, 32]));
        let decoded = decode_rgb(&encode_png(&img)).unwrap();
        assert_eq!(decoded.width(), 17);
        assert_eq!(decoded.height(), 31);
        assert_eq!(decoded.get_pixel(0, 0).0, [128, 64, 32]);
    }

    #[test]
    fn grayscale_uses_weighted_luminance() {
        // Different channels must map to different gray values,
        // confirming a weighted conversion rather than a plain average.
        let red = RgbImage::from_pixel(1, 1, image::Rgb([255, 0, 0]));
        let green = RgbImage::from_pixel(1, 1, image::Rgb([0, 255, 0]));
        let blue = RgbImage::from_pixel(1, 1, image::Rgb([0, 0, 255]));

        let r_val = to_grayscale(&red).get_pixel(0, 0).0[0];
        let g_val = to_grayscale(&green).get_pixel(0, 0).0[0];
        let b_val = to_grayscale(&blue).get_pixel(0, 0).0[0];

        assert!(
            g_val > r_val && r_val > b_val,
            "expected green > red > blue luminance, got R={r_val} G={g_val} B={b_val}",
        );
    }

    #[test]
    fn grayscale_preserves_dimensions() {
        let img = RgbImage::new(13, 29);
        let gray = to_grayscale(&img);
        assert_eq!(gray.width(), 13);
        assert_eq!(gray.height(), 29);
    }
}
