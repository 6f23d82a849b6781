//! hibi-pipeline: Pure crack-detection image pipeline (sans-IO).
//!
//! Turns a raster image into a side-by-side crack visualization through:
//! grayscale -> Gaussian blur -> Canny edge detection ->
//! morphological closing -> three-channel expansion -> compositing.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! byte slices and returns structured data. All browser/filesystem
//! interaction lives in `hibi-io`.

pub mod batch;
pub mod blur;
pub mod compose;
pub mod edge;
pub mod grayscale;
pub mod morphology;
pub mod params;
pub mod types;

pub use batch::{BatchFailure, BatchItem, BatchOutcome, SourceImage, process_batch};
pub use params::{PARAM_SPECS, ParamId, ParamSpec, ParamStore, PipelineParams, effective_odd};
pub use types::{Dimensions, GrayImage, PipelineError, ProcessResult, RgbImage};

/// Run the full crack-detection pipeline on one image.
///
/// Takes raw image bytes (PNG, JPEG) and the current parameter values,
/// then produces a [`ProcessResult`] holding the decoded original, the
/// processed (binary, three-channel) edge map, and the side-by-side
/// composite used for display.
///
/// # Pipeline steps
///
/// 1. Decode image to RGB
/// 2. Convert to grayscale
/// 3. Gaussian blur (kernel size coerced to odd)
/// 4. Canny edge detection with hysteresis thresholds
/// 5. Morphological closing (kernel size coerced to odd)
/// 6. Expand the closed map to three identical channels
/// 7. Composite original and processed horizontally
///
/// The stored parameter values are never mutated; the odd coercion and
/// threshold ordering apply only to the effective values handed to the
/// kernels.
///
/// # Errors
///
/// Returns [`PipelineError::EmptyInput`] if `image_bytes` is empty.
/// Returns [`PipelineError::InvalidImage`] if the image cannot be
/// decoded.
pub fn process(
    image_bytes: &[u8],
    params: &params::PipelineParams,
) -> Result<ProcessResult, PipelineError> {
    // 1. Decode to RGB.
    let original = grayscale::decode_rgb(image_bytes)?;
    let dimensions = Dimensions {
        width: original.width(),
        height: original.height(),
    };

    // 2. Grayscale.
    let gray = grayscale::to_grayscale(&original);

    // 3. Gaussian blur.
    let blurred = blur::kernel_blur(&gray, params.blur);

    // 4. Canny edge detection.
    #[allow(clippy::cast_precision_loss)]
    let edges = edge::canny(&blurred, params.canny_min as f32, params.canny_max as f32);

    // 5. Morphological closing.
    let closed = morphology::close_gaps(&edges, params.kernel);

    // 6. Expand back to three channels.
    let processed = morphology::expand_to_rgb(&closed);

    // 7. Composite original | processed.
    let composite = compose::hstack(&original, &processed)?;

    Ok(ProcessResult {
        original,
        processed,
        composite,
        dimensions,
    })
}
