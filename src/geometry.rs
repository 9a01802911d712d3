//! Mapping service geometry into pixel space.
//!
//! Object boxes arrive as fractions of the image size and are mapped with
//! [`normalized_to_pixel`]. OCR boxes already use pixels and only pass
//! through [`Coord::to_pixel_point`](crate::ir::Coord::to_pixel_point).

use crate::error::SightspeakError;
use crate::ir::{Coord, Normalized, PixelPoint};

/// Validated pixel dimensions of an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageDims {
    width: u32,
    height: u32,
}

impl ImageDims {
    /// Creates dimensions, rejecting a zero width or height.
    ///
    /// # Errors
    /// Returns [`SightspeakError::InvalidImageDimensions`] if either side is 0.
    pub fn new(width: u32, height: u32) -> Result<Self, SightspeakError> {
        if width == 0 || height == 0 {
            return Err(SightspeakError::InvalidImageDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Dimensions of a raster buffer.
    pub fn of<I: image::GenericImageView>(image: &I) -> Result<Self, SightspeakError> {
        let (width, height) = image.dimensions();
        Self::new(width, height)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Maps a normalized point to the pixel grid.
///
/// Computes `floor(x * width)` and `floor(y * height)` (truncation, never
/// rounding) and clamps the result into `[0, width - 1] x [0, height - 1]`,
/// so `x = 1.0` lands on the last column rather than one past it.
/// Non-finite inputs map to 0.
pub fn normalized_to_pixel(point: Coord<Normalized>, dims: ImageDims) -> PixelPoint {
    PixelPoint::new(
        scale_axis(point.x, dims.width),
        scale_axis(point.y, dims.height),
    )
}

/// Maps a normalized point against raw dimensions.
///
/// # Errors
/// Returns [`SightspeakError::InvalidImageDimensions`] if either side is 0.
pub fn map_normalized(
    point: Coord<Normalized>,
    width: u32,
    height: u32,
) -> Result<PixelPoint, SightspeakError> {
    Ok(normalized_to_pixel(point, ImageDims::new(width, height)?))
}

fn scale_axis(fraction: f64, extent: u32) -> i32 {
    let max = extent.saturating_sub(1).min(i32::MAX as u32) as f64;
    let scaled = (fraction * extent as f64).floor();
    if scaled.is_nan() {
        return 0;
    }
    scaled.clamp(0.0, max) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: u32, height: u32) -> ImageDims {
        ImageDims::new(width, height).unwrap()
    }

    #[test]
    fn test_maps_by_truncation() {
        let p = normalized_to_pixel(Coord::new(0.1, 0.9), dims(100, 100));
        assert_eq!(p, PixelPoint::new(10, 90));

        // 0.29 * 100 is 28.999999999999996 in f64.
        let p = normalized_to_pixel(Coord::new(0.29, 0.555), dims(100, 200));
        assert_eq!(p, PixelPoint::new(28, 111));
    }

    #[test]
    fn test_clamps_to_last_pixel() {
        let p = normalized_to_pixel(Coord::new(1.0, 1.0), dims(640, 480));
        assert_eq!(p, PixelPoint::new(639, 479));

        let p = normalized_to_pixel(Coord::new(-0.2, 1.7), dims(640, 480));
        assert_eq!(p, PixelPoint::new(0, 479));
    }

    #[test]
    fn test_non_finite_maps_to_origin_or_edge() {
        let p = normalized_to_pixel(Coord::new(f64::NAN, f64::INFINITY), dims(10, 10));
        assert_eq!(p, PixelPoint::new(0, 9));
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(matches!(
            ImageDims::new(0, 10),
            Err(SightspeakError::InvalidImageDimensions { width: 0, height: 10 })
        ));
        assert!(map_normalized(Coord::new(0.5, 0.5), 10, 0).is_err());
        assert_eq!(
            map_normalized(Coord::new(0.5, 0.5), 10, 10).unwrap(),
            PixelPoint::new(5, 5)
        );
    }
}
