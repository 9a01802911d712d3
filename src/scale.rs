//! Aspect-preserving downscale for display.

use std::borrow::Cow;

use image::imageops::{self, FilterType};
use image::RgbImage;
use tracing::debug;

use crate::error::SightspeakError;
use crate::geometry::ImageDims;

/// Default display bounds used by the CLI.
pub const DEFAULT_MAX_WIDTH: u32 = 900;
pub const DEFAULT_MAX_HEIGHT: u32 = 700;

/// Scales `image` down to fit within `max_width` x `max_height`.
///
/// An image that already fits is returned as-is, borrowed. Otherwise
/// exactly one dimension binds: width if the image is too wide, else
/// height. The other side follows from the aspect ratio and is truncated.
///
/// Known limitation: an image that is both too wide and too tall is bound
/// by width only, so an extreme portrait aspect ratio can still come out
/// taller than `max_height`.
///
/// # Errors
/// Returns [`SightspeakError::InvalidImageDimensions`] if the image or the
/// bounds have a zero side.
pub fn scale_to_fit(
    image: &RgbImage,
    max_width: u32,
    max_height: u32,
) -> Result<Cow<'_, RgbImage>, SightspeakError> {
    let dims = ImageDims::of(image)?;
    ImageDims::new(max_width, max_height)?;

    let Some((width, height)) = fit_dimensions(dims, max_width, max_height) else {
        return Ok(Cow::Borrowed(image));
    };

    debug!(
        "Scaling {}x{} to {}x{}",
        dims.width(),
        dims.height(),
        width,
        height
    );
    Ok(Cow::Owned(imageops::resize(
        image,
        width,
        height,
        FilterType::Triangle,
    )))
}

/// Target size for [`scale_to_fit`], or `None` if no resize is needed.
pub fn fit_dimensions(dims: ImageDims, max_width: u32, max_height: u32) -> Option<(u32, u32)> {
    let (width, height) = (dims.width(), dims.height());
    let aspect_ratio = width as f64 / height as f64;

    let (new_width, new_height) = if width > max_width {
        (max_width as f64, max_width as f64 / aspect_ratio)
    } else if height > max_height {
        (max_height as f64 * aspect_ratio, max_height as f64)
    } else {
        return None;
    };

    Some(((new_width as u32).max(1), (new_height as u32).max(1)))
}
