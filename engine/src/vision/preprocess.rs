//! Image normalization for digit classification
//!
//! An arbitrary uploaded image becomes a 28x28 single-channel grid of
//! floats in [0,1]: Lanczos resample, grayscale, scale, then a polarity
//! correction. The model expects a light digit on a dark background; a
//! predominantly light image (mean > 0.5) is assumed to follow the
//! opposite convention and is inverted. The heuristic misfires on images
//! that are naturally bright-digit-on-dark with a bright majority.

use image::imageops::FilterType;
use image::DynamicImage;

use crate::error::EngineError;

pub const GRID_SIDE: usize = 28;
const GRID_LEN: usize = GRID_SIDE * GRID_SIDE;
const INVERT_MEAN_THRESHOLD: f32 = 0.5;

/// A normalized 28x28 grid, row-major, values in [0,1]. Built fresh per
/// prediction request and discarded after the forward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DigitGrid {
    pixels: Vec<f32>,
}

impl DigitGrid {
    pub fn from_image(image: &DynamicImage) -> Self {
        let resized = image.resize_exact(GRID_SIDE as u32, GRID_SIDE as u32, FilterType::Lanczos3);
        let gray = resized.to_luma8();
        let pixels: Vec<f32> = gray.as_raw().iter().map(|&v| f32::from(v) / 255.0).collect();

        Self {
            pixels: correct_polarity(pixels),
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        let image = image::load_from_memory(bytes)?;
        Ok(Self::from_image(&image))
    }

    pub fn mean(&self) -> f32 {
        self.pixels.iter().sum::<f32>() / GRID_LEN as f32
    }

    pub fn pixels(&self) -> &[f32] {
        &self.pixels
    }
}

/// Inverts the grid when it is predominantly light. Strictly greater than
/// the threshold: a mean of exactly 0.5 is left alone. The rule is
/// idempotent; an inverted grid's mean lands at or below the threshold,
/// so a second application never flips back.
fn correct_polarity(mut pixels: Vec<f32>) -> Vec<f32> {
    let mean = pixels.iter().sum::<f32>() / pixels.len() as f32;
    if mean > INVERT_MEAN_THRESHOLD {
        for v in &mut pixels {
            *v = 1.0 - *v;
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, RgbImage};

    fn uniform_gray(value: u8) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_pixel(
            GRID_SIDE as u32,
            GRID_SIDE as u32,
            Luma([value]),
        ))
    }

    #[test]
    fn test_white_image_inverts_to_zero() {
        let grid = DigitGrid::from_image(&uniform_gray(255));
        assert!(grid.pixels().iter().all(|&v| v == 0.0));
        assert_eq!(grid.mean(), 0.0);
    }

    #[test]
    fn test_black_image_unchanged() {
        let grid = DigitGrid::from_image(&uniform_gray(0));
        assert!(grid.pixels().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_values_stay_in_unit_range() {
        let mut img = RgbImage::new(64, 48);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            pixel.0 = [(x * 4) as u8, (y * 5) as u8, 128];
        }
        let grid = DigitGrid::from_image(&DynamicImage::ImageRgb8(img));
        assert_eq!(grid.pixels().len(), GRID_LEN);
        assert!(grid.pixels().iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_polarity_mean_exactly_half_does_not_invert() {
        // Half zeros, half ones: mean is exactly 0.5, strict > must not fire.
        let mut pixels = vec![0.0f32; GRID_LEN / 2];
        pixels.extend(vec![1.0f32; GRID_LEN / 2]);
        let corrected = correct_polarity(pixels.clone());
        assert_eq!(corrected, pixels);
    }

    #[test]
    fn test_polarity_is_idempotent() {
        let bright: Vec<f32> = (0..GRID_LEN).map(|i| 0.5 + (i % 128) as f32 / 256.0).collect();
        let once = correct_polarity(bright.clone());
        let twice = correct_polarity(once.clone());
        assert_eq!(once, twice);

        let dark: Vec<f32> = (0..GRID_LEN).map(|i| (i % 100) as f32 / 400.0).collect();
        let once = correct_polarity(dark.clone());
        assert_eq!(once, dark);
        assert_eq!(correct_polarity(once.clone()), once);
    }

    #[test]
    fn test_from_bytes_decodes_png() {
        let mut encoded = Vec::new();
        let img = uniform_gray(255);
        img.write_to(
            &mut std::io::Cursor::new(&mut encoded),
            image::ImageOutputFormat::Png,
        )
        .unwrap();

        let grid = DigitGrid::from_bytes(&encoded).unwrap();
        assert!(grid.pixels().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let result = DigitGrid::from_bytes(b"definitely not an image");
        assert!(matches!(result, Err(EngineError::Image { .. })));
    }

    #[test]
    fn test_resamples_arbitrary_sizes() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(301, 97, Luma([10])));
        let grid = DigitGrid::from_image(&img);
        assert_eq!(grid.pixels().len(), GRID_LEN);
    }
}
