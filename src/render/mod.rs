//! Overlay rendering for object and OCR detections.
//!
//! Both modes draw onto a fresh copy of the source image and return it; the
//! caller's buffer is never touched, so several overlays can be produced
//! from one decoded image in any order.
//!
//! - **Rectangle mode** ([`OverlayRenderer::render_objects`]): an
//!   axis-aligned box between vertex 0 and vertex 2 of each normalized
//!   polygon, with the object name above it.
//! - **Polygon mode** ([`OverlayRenderer::render_texts`]): the closed
//!   polygon of each OCR token, with the token text above its first vertex.
//!   Element 0 (the full-text block) is not drawn.
//!
//! A malformed annotation is logged, recorded in
//! [`RenderedOverlay::skipped`] and does not stop the pass. OCR vertices
//! arrive in pixels straight from the results file, so a token whose
//! vertices are non-finite or further than [`PIXEL_RANGE_FACTOR`] image
//! sizes from the origin is malformed too. Only invalid image dimensions
//! fail the whole call.

mod font;
mod style;

pub use font::{load_font, resolve_label_font, FONT_ENV};
pub use style::{OverlayStyle, BLUE, GREEN, RED};

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut, draw_text_mut};
use imageproc::rect::Rect;
use tracing::{debug, warn};

use crate::error::SightspeakError;
use crate::geometry::{normalized_to_pixel, ImageDims};
use crate::ir::{DetectedObject, DetectedText, PixelPoint};

/// How many image widths (heights) an OCR vertex may lie from the origin.
pub const PIXEL_RANGE_FACTOR: f64 = 4.0;

/// An annotated copy of the source image.
#[derive(Debug)]
pub struct RenderedOverlay {
    /// The annotated image.
    pub image: RgbImage,
    /// Number of annotations drawn.
    pub drawn: usize,
    /// Annotations that could not be drawn.
    pub skipped: Vec<SkippedAnnotation>,
}

impl RenderedOverlay {
    /// Returns true if every annotation was drawn.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// An annotation left out of an overlay.
#[derive(Debug)]
pub struct SkippedAnnotation {
    /// Position in the input sequence.
    pub index: usize,
    /// The object name or OCR text of the annotation.
    pub label: String,
    /// Why it was skipped.
    pub error: SightspeakError,
}

/// Draws detection overlays.
///
/// Holds the style and an optional label font. Without a font, boxes and
/// polygons are still drawn but label text is left out.
pub struct OverlayRenderer {
    style: OverlayStyle,
    font: Option<FontVec>,
}

impl Default for OverlayRenderer {
    fn default() -> Self {
        Self::new(OverlayStyle::default())
    }
}

impl OverlayRenderer {
    /// Creates a renderer that draws geometry only.
    pub fn new(style: OverlayStyle) -> Self {
        Self { style, font: None }
    }

    /// Sets the font used for label text.
    pub fn with_font(mut self, font: FontVec) -> Self {
        self.font = Some(font);
        self
    }

    /// Draws object detections as labelled rectangles.
    ///
    /// Vertex 0 is taken as the top-left corner and vertex 2 as the
    /// bottom-right; a polygon with only 2 or 3 vertices uses its last
    /// vertex as the opposite corner.
    ///
    /// # Errors
    /// Returns [`SightspeakError::InvalidImageDimensions`] for an empty image.
    pub fn render_objects(
        &self,
        image: &RgbImage,
        objects: &[DetectedObject],
    ) -> Result<RenderedOverlay, SightspeakError> {
        let dims = ImageDims::of(image)?;
        let mut canvas = image.clone();
        let mut drawn = 0;
        let mut skipped = Vec::new();
        self.note_missing_font(objects.len());

        for (index, object) in objects.iter().enumerate() {
            if let Err(error) = object.polygon.ensure_drawable() {
                warn!("Skipping object {} ('{}'): {}", index, object.name, error);
                skipped.push(SkippedAnnotation {
                    index,
                    label: object.name.clone(),
                    error,
                });
                continue;
            }

            let vertices = object.polygon.vertices();
            let corner = vertices.get(2).unwrap_or(&vertices[vertices.len() - 1]);
            let top_left = normalized_to_pixel(vertices[0], dims);
            let bottom_right = normalized_to_pixel(*corner, dims);

            self.draw_rect(&mut canvas, top_left, bottom_right);

            let scale = self.style.object_font_scale(top_left.x, bottom_right.x);
            self.draw_label(
                &mut canvas,
                &object.name,
                top_left.x,
                top_left.y.saturating_sub(self.style.object_label_offset),
                scale,
                self.style.object_label_color,
            );
            drawn += 1;
        }

        debug!(drawn, skipped = skipped.len(), "Rendered object overlay");
        Ok(RenderedOverlay {
            image: canvas,
            drawn,
            skipped,
        })
    }

    /// Draws OCR token regions as labelled closed polygons.
    ///
    /// `texts` must follow the OCR ordering contract: element 0 is the
    /// full-text block and is not drawn. Tokens with fewer than two vertices
    /// or with out-of-range vertices are skipped.
    ///
    /// # Errors
    /// Returns [`SightspeakError::InvalidImageDimensions`] for an empty image.
    pub fn render_texts(
        &self,
        image: &RgbImage,
        texts: &[DetectedText],
    ) -> Result<RenderedOverlay, SightspeakError> {
        let dims = ImageDims::of(image)?;
        let max_x = f64::from(dims.width()) * PIXEL_RANGE_FACTOR;
        let max_y = f64::from(dims.height()) * PIXEL_RANGE_FACTOR;
        let mut canvas = image.clone();
        let mut drawn = 0;
        let mut skipped = Vec::new();
        self.note_missing_font(texts.len().saturating_sub(1));

        for (index, text) in texts.iter().enumerate().skip(1) {
            let checked = text
                .polygon
                .ensure_drawable()
                .and_then(|()| text.polygon.ensure_bounded(max_x, max_y));
            if let Err(error) = checked {
                warn!("Skipping text {} ('{}'): {}", index, text.description, error);
                skipped.push(SkippedAnnotation {
                    index,
                    label: text.description.clone(),
                    error,
                });
                continue;
            }

            for (a, b) in text.polygon.edges() {
                self.draw_segment(&mut canvas, a.to_pixel_point(), b.to_pixel_point());
            }

            let anchor = text.polygon.vertices()[0].to_pixel_point();
            self.draw_label(
                &mut canvas,
                &text.description,
                anchor.x,
                anchor.y.saturating_sub(self.style.text_label_offset),
                self.style.text_font_scale,
                self.style.text_label_color,
            );
            drawn += 1;
        }

        debug!(drawn, skipped = skipped.len(), "Rendered OCR overlay");
        Ok(RenderedOverlay {
            image: canvas,
            drawn,
            skipped,
        })
    }

    fn note_missing_font(&self, annotations: usize) {
        if self.font.is_none() && annotations > 0 {
            debug!("No label font loaded; drawing geometry without text");
        }
    }

    /// Rectangle between two corners, inclusive, grown inward to the stroke width.
    fn draw_rect(&self, canvas: &mut RgbImage, a: PixelPoint, b: PixelPoint) {
        let (left, right) = (a.x.min(b.x), a.x.max(b.x));
        let (top, bottom) = (a.y.min(b.y), a.y.max(b.y));

        for inset in 0..self.style.stroke_width as i32 {
            let width = right - left + 1 - 2 * inset;
            let height = bottom - top + 1 - 2 * inset;
            if width <= 0 || height <= 0 {
                break;
            }
            let rect = Rect::at(left + inset, top + inset).of_size(width as u32, height as u32);
            draw_hollow_rect_mut(canvas, rect, self.style.stroke_color);
        }
    }

    fn draw_segment(&self, canvas: &mut RgbImage, a: PixelPoint, b: PixelPoint) {
        let stroke = self.style.stroke_width.max(1) as i32;
        for dx in 0..stroke {
            for dy in 0..stroke {
                draw_line_segment_mut(
                    canvas,
                    (a.x.saturating_add(dx) as f32, a.y.saturating_add(dy) as f32),
                    (b.x.saturating_add(dx) as f32, b.y.saturating_add(dy) as f32),
                    self.style.stroke_color,
                );
            }
        }
    }

    /// Draws `text` with its baseline at `baseline_y`.
    fn draw_label(
        &self,
        canvas: &mut RgbImage,
        text: &str,
        x: i32,
        baseline_y: i32,
        scale: f32,
        color: Rgb<u8>,
    ) {
        let Some(font) = self.font.as_ref() else {
            return;
        };
        if text.trim().is_empty() {
            return;
        }

        let px = PxScale::from(self.style.base_font_px * scale);
        let ascent = font.as_scaled(px).ascent().ceil() as i32;
        draw_text_mut(
            canvas,
            color,
            x,
            baseline_y.saturating_sub(ascent),
            px,
            font,
            text,
        );
    }
}
