//! Shared types for the hibi crack-detection pipeline.

use serde::{Deserialize, Serialize};

/// Re-export `GrayImage` so downstream crates can reference
/// intermediate raster data without depending on `image` directly.
pub use image::GrayImage;

/// Re-export `RgbImage` so downstream crates can reference the decoded
/// original and processed buffers without depending on `image` directly.
pub use image::RgbImage;

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Result of running the full crack-detection pipeline on one image.
///
/// `processed` is the closed Canny edge map materialized into three
/// identical channels; `composite` is the original and the processed
/// buffer concatenated side by side for display.
///
/// Note: does not derive `PartialEq`; when wrapped in `Rc`, Dioxus
/// uses pointer equality for diffing, which is cheaper than walking
/// pixel data.
#[derive(Debug, Clone)]
pub struct ProcessResult {
    /// Decoded source image (RGB, pre-processing).
    pub original: RgbImage,

    /// Closed edge map expanded back to three identical channels.
    /// Every pixel is either (0, 0, 0) or (255, 255, 255).
    pub processed: RgbImage,

    /// `original` and `processed` concatenated horizontally.
    /// Same height as the source, twice its width.
    pub composite: RgbImage,

    /// Dimensions of the source image in pixels.
    pub dimensions: Dimensions,
}

/// Errors that can occur during pipeline processing.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The uploaded bytes could not be decoded as a supported image.
    #[error("failed to decode image: {0}")]
    InvalidImage(#[from] image::ImageError),

    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// Two buffers that must share a height did not.
    ///
    /// The pipeline derives `processed` from `original`, so this
    /// indicates an internal invariant violation rather than bad input.
    #[error("image height mismatch: {left} vs {right}")]
    DimensionMismatch {
        /// Height of the left-hand (original) buffer.
        left: u32,
        /// Height of the right-hand (processed) buffer.
        right: u32,
    },
}
