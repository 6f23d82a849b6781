//! Canny edge detection.
//!
//! Wraps [`imageproc::edges::canny`] to detect edges in the blurred
//! grayscale image. Returns a binary image where white pixels (255)
//! are edges and black pixels (0) are background.

use image::GrayImage;

/// Detect edges using the Canny algorithm.
///
/// Returns a binary image: 255 for edge pixels, 0 for non-edge.
///
/// Internally, Canny performs Sobel gradient computation, non-maximum
/// suppression, and hysteresis thresholding. Pixels with gradient
/// magnitude above `high_threshold` are definite edges; those between
/// `low_threshold` and `high_threshold` are edges only if connected to
/// a definite edge.
///
/// The stored thresholds carry no ordering constraint, but the
/// detector requires `low <= high`, so `low_threshold` is clamped down
/// to `high_threshold` before invocation. The stored values themselves
/// are never rewritten.
#[must_use = "returns the binary edge map"]
pub fn canny(image: &GrayImage, low_threshold: f32, high_threshold: f32) -> GrayImage {
    let high = high_threshold.max(0.0);
    let low = low_threshold.clamp(0.0, high);
    imageproc::edges::canny(image, low, high)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 20x20 image with a sharp vertical boundary at x = 10.
    fn sharp_edge_image() -> GrayImage {
        GrayImage::from_fn(20, 20, |x, _y| {
            if x < 10 {
                image::Luma([0])
            } else {
                image::Luma([255])
            }
        })
    }

    fn edge_count(edges: &GrayImage) -> u32 {
        edges.pixels().map(|p| u32::from(p.0[0] > 0)).sum()
    }

    #[test]
    fn blank_image_produces_no_edges() {
        let img = GrayImage::from_fn(20, 20, |_, _| image::Luma([128]));
        let edges = canny(&img, 50.0, 150.0);
        assert_eq!(edge_count(&edges), 0, "expected no edges in uniform image");
    }

    #[test]
    fn sharp_edge_detected() {
        let img = sharp_edge_image();
        let edges = canny(&img, 50.0, 150.0);
        assert!(
            edge_count(&edges) > 0,
            "expected edges at sharp boundary, found none"
        );
    }

    #[test]
    fn output_is_binary() {
        let img = sharp_edge_image();
        let edges = canny(&img, 50.0, 150.0);
        for p in edges.pixels() {
            assert!(
                p.0[0] == 0 || p.0[0] == 255,
                "edge map must be binary, got {}",
                p.0[0],
            );
        }
    }

    #[test]
    fn output_dimensions_match_input() {
        let img = GrayImage::new(17, 31);
        let edges = canny(&img, 50.0, 150.0);
        assert_eq!(edges.width(), 17);
        assert_eq!(edges.height(), 31);
    }

    #[test]
    fn low_above_high_is_clamped() {
        // canny(200, 100) must behave as canny(100, 100): low is
        // clamped down to high rather than panicking in the detector.
        let img = sharp_edge_image();
        let edges_inverted = canny(&img, 200.0, 100.0);
        let edges_equal = canny(&img, 100.0, 100.0);
        assert_eq!(edges_inverted, edges_equal);
    }
}
