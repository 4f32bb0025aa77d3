// Image preprocessing for recognition accuracy
//
// Screen captures are typically bright text on a dark background at low
// resolution; Tesseract is tuned for the opposite. Three deterministic
// transforms fix both: grayscale, integer upscale with Lanczos resampling,
// then threshold + invert down to exactly two pixel values.

use image::{imageops, imageops::FilterType, DynamicImage, GrayImage};
use tracing::debug;

use crate::core::errors::{PreprocessError, PreprocessResult};

/// Pixel value emitted for recognized "ink" (dark text on light background)
pub const INK: u8 = 0;
/// Pixel value emitted for the background
pub const BACKGROUND: u8 = 255;

/// Prepare a captured image for text recognition.
///
/// Intensity strictly above `threshold` becomes [`INK`], everything else
/// [`BACKGROUND`]; a pixel exactly at the threshold is background. The
/// inversion is intentional, see module docs.
pub fn preprocess(
    image: &DynamicImage,
    threshold: u8,
    scale: u32,
) -> PreprocessResult<GrayImage> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(PreprocessError::InvalidImage { width, height });
    }

    let gray = image.to_luma8();
    let mut upscaled = imageops::resize(
        &gray,
        width * scale,
        height * scale,
        FilterType::Lanczos3,
    );

    for pixel in upscaled.pixels_mut() {
        pixel.0[0] = if pixel.0[0] > threshold { INK } else { BACKGROUND };
    }

    debug!(
        "Preprocessed {}x{} -> {}x{} (threshold {})",
        width,
        height,
        upscaled.width(),
        upscaled.height(),
        threshold
    );
    Ok(upscaled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgba, RgbaImage};
    use std::collections::HashSet;

    fn gradient_image(width: u32, height: u32) -> DynamicImage {
        let img = RgbaImage::from_fn(width, height, |x, y| {
            let v = ((x + y * width) * 7 % 256) as u8;
            Rgba([v, v, v, 255])
        });
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn output_is_binary_and_scaled() {
        let input = gradient_image(13, 9);
        let output = preprocess(&input, 140, 3).unwrap();

        assert_eq!(output.width(), 13 * 3);
        assert_eq!(output.height(), 9 * 3);

        let values: HashSet<u8> = output.pixels().map(|p| p.0[0]).collect();
        assert!(values.is_subset(&HashSet::from([INK, BACKGROUND])));
        // A gradient spanning the threshold must produce both values
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn threshold_boundary_maps_to_background() {
        // Uniform image exactly at the threshold: strict `>` means background
        let input = DynamicImage::ImageLuma8(GrayImage::from_pixel(4, 4, Luma([140])));
        let output = preprocess(&input, 140, 1).unwrap();
        assert!(output.pixels().all(|p| p.0[0] == BACKGROUND));

        // One intensity step above flips to ink
        let input = DynamicImage::ImageLuma8(GrayImage::from_pixel(4, 4, Luma([141])));
        let output = preprocess(&input, 140, 1).unwrap();
        assert!(output.pixels().all(|p| p.0[0] == INK));
    }

    #[test]
    fn bright_text_becomes_ink() {
        // White pixels (bright source text) end up as ink after inversion
        let input = DynamicImage::ImageLuma8(GrayImage::from_pixel(2, 2, Luma([255])));
        let output = preprocess(&input, 140, 2).unwrap();
        assert!(output.pixels().all(|p| p.0[0] == INK));
    }

    #[test]
    fn zero_dimension_input_rejected() {
        let input = DynamicImage::new_luma8(0, 5);
        let err = preprocess(&input, 140, 3).unwrap_err();
        assert!(matches!(
            err,
            PreprocessError::InvalidImage { width: 0, height: 5 }
        ));
    }
}
