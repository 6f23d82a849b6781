//! Morphological closing of the binary edge map.
//!
//! Wraps [`imageproc::morphology::close`] (dilate then erode) with a
//! square structuring element to fill small gaps in detected edges
//! without changing their rough shape, and expands the closed
//! single-channel result back to three identical channels for uniform
//! display and storage.

use image::{GrayImage, RgbImage};
use imageproc::distance_transform::Norm;

use crate::params::effective_odd;

/// Apply morphological closing with a square structuring element.
///
/// Even kernel sizes are bumped to the next odd value so the element
/// has a center pixel. A (coerced) size of 1 is a 1×1 element and
/// returns the image unchanged.
///
/// The `LInf` norm with radius `(k−1)/2` yields a k×k square
/// neighborhood.
#[must_use = "returns the closed edge map"]
pub fn close_gaps(edges: &GrayImage, kernel_size: u32) -> GrayImage {
    let k = effective_odd(kernel_size);
    if k <= 1 {
        return edges.clone();
    }

    // Parameter bounds cap k at 21, so the radius always fits in a u8.
    let radius = u8::try_from((k - 1) / 2).unwrap_or(u8::MAX);
    imageproc::morphology::close(edges, Norm::LInf, radius)
}

/// Expand a single-channel image to three identical channels.
///
/// The final pipeline step: the closed binary map becomes an RGB
/// buffer so it can be concatenated with the original and encoded
/// uniformly.
#[must_use = "returns the three-channel image"]
pub fn expand_to_rgb(gray: &GrayImage) -> RgbImage {
    RgbImage::from_fn(gray.width(), gray.height(), |x, y| {
        let v = gray.get_pixel(x, y).0[0];
        image::Rgb([v, v, v])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_size_one_is_identity() {
        let mut img = GrayImage::new(10, 10);
        img.put_pixel(3, 3, image::Luma([255]));
        let closed = close_gaps(&img, 1);
        assert_eq!(img, closed);
    }

    #[test]
    fn even_kernel_size_matches_next_odd() {
        let img = GrayImage::from_fn(12, 12, |x, y| {
            if (x + y) % 5 == 0 {
                image::Luma([255])
            } else {
                image::Luma([0])
            }
        });
        assert_eq!(close_gaps(&img, 4), close_gaps(&img, 5));
    }

    #[test]
    fn closing_fills_single_pixel_gap() {
        // A horizontal line with a one-pixel hole: closing with a 3x3
        // element must bridge the hole.
        let mut img = GrayImage::new(11, 5);
        for x in 0..11 {
            if x != 5 {
                img.put_pixel(x, 2, image::Luma([255]));
            }
        }
        let closed = close_gaps(&img, 3);
        assert_eq!(
            closed.get_pixel(5, 2).0[0],
            255,
            "expected closing to fill the gap at (5, 2)",
        );
    }

    #[test]
    fn closing_preserves_binary_values() {
        let img = GrayImage::from_fn(10, 10, |x, _| {
            if x % 3 == 0 {
                image::Luma([255])
            } else {
                image::Luma([0])
            }
        });
        let closed = close_gaps(&img, 5);
        for p in closed.pixels() {
            assert!(
                p.0[0] == 0 || p.0[0] == 255,
                "closing a binary image must stay binary, got {}",
                p.0[0],
            );
        }
    }

    #[test]
    fn closing_preserves_dimensions() {
        let img = GrayImage::new(13, 29);
        let closed = close_gaps(&img, 7);
        assert_eq!(closed.width(), 13);
        assert_eq!(closed.height(), 29);
    }

    #[test]
    fn expand_duplicates_value_across_channels() {
        let mut img = GrayImage::new(3, 1);
        img.put_pixel(0, 0, image::Luma([0]));
        img.put_pixel(1, 0, image::Luma([128]));
        img.put_pixel(2, 0, image::Luma([255]));

        let rgb = expand_to_rgb(&img);
        assert_eq!(rgb.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(rgb.get_pixel(1, 0).0, [128, 128, 128]);
        assert_eq!(rgb.get_pixel(2, 0).0, [255, 255, 255]);
    }

    #[test]
    fn expand_preserves_dimensions() {
        let img = GrayImage::new(17, 31);
        let rgb = expand_to_rgb(&img);
        assert_eq!(rgb.width(), 17);
        assert_eq!(rgb.height(), 31);
    }
}
