//! Colors, stroke widths and font sizing for overlays.

use image::Rgb;

pub const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
pub const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
pub const RED: Rgb<u8> = Rgb([255, 0, 0]);

/// Styling for both overlay modes.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayStyle {
    /// Stroke color for object rectangles and OCR polygons.
    pub stroke_color: Rgb<u8>,
    /// Stroke width in pixels.
    pub stroke_width: u32,
    /// Color of object names.
    pub object_label_color: Rgb<u8>,
    /// Color of OCR token text.
    pub text_label_color: Rgb<u8>,
    /// Gap between an object's top-left corner and its label baseline.
    pub object_label_offset: i32,
    /// Gap between an OCR region's first vertex and its text baseline.
    pub text_label_offset: i32,
    /// Font height in pixels at scale 1.0.
    pub base_font_px: f32,
    /// Lower bound of the adaptive object label scale.
    pub min_object_font_scale: f32,
    /// Upper bound of the adaptive object label scale.
    pub max_object_font_scale: f32,
    /// Box width (pixels) that maps to scale 1.0.
    pub object_font_reference_width: f32,
    /// Fixed scale for OCR token text.
    pub text_font_scale: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            stroke_color: GREEN,
            stroke_width: 2,
            object_label_color: BLUE,
            text_label_color: RED,
            object_label_offset: 5,
            text_label_offset: 10,
            base_font_px: 30.0,
            min_object_font_scale: 0.5,
            max_object_font_scale: 1.0,
            object_font_reference_width: 100.0,
            text_font_scale: 0.8,
        }
    }
}

impl OverlayStyle {
    /// Label scale for an object box spanning `x0..x1`.
    ///
    /// Wider boxes get larger text, clamped to the configured range so
    /// labels neither overflow narrow boxes nor shrink past legibility.
    pub fn object_font_scale(&self, x0: i32, x1: i32) -> f32 {
        let span = (x1 - x0) as f32 / self.object_font_reference_width;
        span.clamp(self.min_object_font_scale, self.max_object_font_scale)
    }
}
