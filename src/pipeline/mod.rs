//! End-to-end analysis of one image.
//!
//! The image is decoded once. Each overlay is drawn on its own copy, the
//! summary is aggregated from the same fully-resolved result sets, and the
//! speech estimate is derived from the summary. Everything runs
//! sequentially on the calling thread.

use std::path::Path;

use image::RgbImage;
use tracing::{info, warn};

use crate::error::SightspeakError;
use crate::ir::AnnotationSet;
use crate::render::{OverlayRenderer, RenderedOverlay};
use crate::scale::{scale_to_fit, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH};
use crate::speech::estimate_speech_duration;
use crate::summary::{aggregate_set, AnnotationSummary};

/// Options for [`analyze`].
#[derive(Clone, Debug)]
pub struct AnalyzeOptions {
    /// Display bounds applied to both overlays, or `None` to keep full size.
    pub fit: Option<(u32, u32)>,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            fit: Some((DEFAULT_MAX_WIDTH, DEFAULT_MAX_HEIGHT)),
        }
    }
}

/// Everything produced for one image.
#[derive(Debug)]
pub struct Analysis {
    /// Object rectangles and names.
    pub objects: RenderedOverlay,
    /// OCR token polygons and text.
    pub texts: RenderedOverlay,
    /// Aggregated text summary.
    pub summary: AnnotationSummary,
    /// Estimated (not measured) narration time of the primary OCR text.
    pub speech_seconds: f64,
}

impl Analysis {
    /// Total annotations skipped across both overlays.
    pub fn skipped_count(&self) -> usize {
        self.objects.skipped.len() + self.texts.skipped.len()
    }
}

/// Decodes an image file into a 3-channel buffer.
///
/// # Errors
/// Returns [`SightspeakError::ImageDecode`] if the file cannot be opened
/// or decoded.
pub fn load_image(path: &Path) -> Result<RgbImage, SightspeakError> {
    let decoded = image::open(path).map_err(|source| SightspeakError::ImageDecode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decoded.to_rgb8())
}

/// Encodes an image to `path`; the format follows the extension.
///
/// # Errors
/// Returns [`SightspeakError::ImageEncode`] on failure.
pub fn save_image(image: &RgbImage, path: &Path) -> Result<(), SightspeakError> {
    image
        .save(path)
        .map_err(|source| SightspeakError::ImageEncode {
            path: path.to_path_buf(),
            source,
        })
}

/// Renders both overlays and aggregates the summary for one image.
///
/// # Errors
/// Fails only if the image itself has invalid dimensions; malformed
/// individual annotations are skipped and reported in the overlays.
pub fn analyze(
    image: &RgbImage,
    annotations: &AnnotationSet,
    renderer: &OverlayRenderer,
    opts: &AnalyzeOptions,
) -> Result<Analysis, SightspeakError> {
    let mut objects = renderer.render_objects(image, &annotations.objects)?;
    let mut texts = renderer.render_texts(image, &annotations.texts)?;

    if let Some((max_width, max_height)) = opts.fit {
        objects.image = fit_owned(objects.image, max_width, max_height)?;
        texts.image = fit_owned(texts.image, max_width, max_height)?;
    }

    let summary = aggregate_set(annotations);
    let speech_seconds = estimate_speech_duration(summary.speech_text());

    let analysis = Analysis {
        objects,
        texts,
        summary,
        speech_seconds,
    };

    if analysis.skipped_count() > 0 {
        warn!(
            "{} annotation(s) could not be drawn",
            analysis.skipped_count()
        );
    }
    info!(
        objects = analysis.objects.drawn,
        texts = analysis.texts.drawn,
        labels = annotations.labels.len(),
        "Analysis complete"
    );

    Ok(analysis)
}

fn fit_owned(
    image: RgbImage,
    max_width: u32,
    max_height: u32,
) -> Result<RgbImage, SightspeakError> {
    let scaled = scale_to_fit(&image, max_width, max_height)?.into_owned();
    Ok(scaled)
}
