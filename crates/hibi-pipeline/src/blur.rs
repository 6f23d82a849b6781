//! Gaussian blur driven by an integer kernel size.
//!
//! Wraps [`imageproc::filter::gaussian_blur_f32`] to smooth the
//! luminance image before edge detection, reducing high-frequency
//! noise that would produce spurious edges in the Canny detector.
//!
//! The user-facing parameter is a kernel *size* rather than a sigma.
//! Even sizes are coerced to the next odd value so the kernel has a
//! center pixel, and sigma is derived from the odd size with the
//! standard heuristic `0.3·((k−1)/2 − 1) + 0.8` (the same rule OpenCV
//! applies when given a kernel size with no explicit sigma).

use image::GrayImage;

use crate::params::effective_odd;

/// Apply Gaussian blur with an integer kernel size.
///
/// Even sizes are bumped to the next odd value first. A (coerced)
/// kernel size of 1 is the identity and returns the image unchanged.
#[must_use = "returns the blurred image"]
pub fn kernel_blur(image: &GrayImage, kernel_size: u32) -> GrayImage {
    let k = effective_odd(kernel_size);
    if k <= 1 {
        return image.clone();
    }

    imageproc::filter::gaussian_blur_f32(image, sigma_for_kernel(k))
}

/// Derive a Gaussian sigma from an odd kernel size.
#[allow(clippy::cast_precision_loss)]
fn sigma_for_kernel(k: u32) -> f32 {
    let half = ((k - 1) / 2) as f32;
    0.3f32.mul_add(half - 1.0, 0.8)
}
