//! The aggregated result summary and its text layout.

use std::fmt;

use serde::Serialize;

/// Combined view of one image's object, label and OCR results.
///
/// Built once per analysis by [`aggregate`](super::aggregate) and not
/// modified afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AnnotationSummary {
    object_names: Vec<String>,
    label_text: String,
    primary_ocr_text: String,
}

impl AnnotationSummary {
    pub(crate) fn new(
        object_names: Vec<String>,
        label_text: String,
        primary_ocr_text: String,
    ) -> Self {
        Self {
            object_names,
            label_text,
            primary_ocr_text,
        }
    }

    /// Object names in detection order, duplicates included.
    pub fn object_names(&self) -> &[String] {
        &self.object_names
    }

    /// Label descriptions, one per line.
    pub fn label_text(&self) -> &str {
        &self.label_text
    }

    /// The full OCR text block, or an empty string.
    pub fn primary_ocr_text(&self) -> &str {
        &self.primary_ocr_text
    }

    /// The text to hand to a speech synthesizer.
    pub fn speech_text(&self) -> &str {
        &self.primary_ocr_text
    }

    /// Returns true if all three sections are empty.
    pub fn is_empty(&self) -> bool {
        self.object_names.is_empty()
            && self.label_text.is_empty()
            && self.primary_ocr_text.is_empty()
    }
}

impl fmt::Display for AnnotationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Object Detection Result:")?;
        writeln!(f, "{}", self.object_names.join(", "))?;
        writeln!(f)?;
        writeln!(f, "Image Labeling Result:")?;
        writeln!(f, "{}", self.label_text)?;
        writeln!(f)?;
        writeln!(f, "OCR Result:")?;
        write!(f, "{}", self.primary_ocr_text)
    }
}
