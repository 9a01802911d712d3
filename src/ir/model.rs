//! Detection types produced by the vision service.
//!
//! These are the inputs to both the overlay renderer and the result
//! aggregator. They are created fresh for every analyzed image and never
//! cached across requests.

use serde::{Deserialize, Serialize};

use super::polygon::BoundingPolygon;
use super::space::{Normalized, Pixel};

/// All result sets delivered for a single image.
///
/// Each sequence keeps the order the service returned it in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationSet {
    /// Object localization results.
    #[serde(default)]
    pub objects: Vec<DetectedObject>,

    /// Label detection results (commonly confidence-descending).
    #[serde(default)]
    pub labels: Vec<DetectedLabel>,

    /// OCR results. Element 0 is the full text block, the rest are tokens.
    #[serde(default)]
    pub texts: Vec<DetectedText>,
}

impl AnnotationSet {
    /// Returns true if no result set contains anything.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty() && self.labels.is_empty() && self.texts.is_empty()
    }
}

/// A localized object with a normalized bounding polygon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectedObject {
    /// Object name (e.g., "Cat", "Bicycle wheel").
    pub name: String,

    /// Bounding polygon, vertices as fractions of the image size.
    pub polygon: BoundingPolygon<Normalized>,

    /// Optional confidence score reported by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl DetectedObject {
    pub fn new(name: impl Into<String>, polygon: BoundingPolygon<Normalized>) -> Self {
        Self {
            name: name.into(),
            polygon,
            score: None,
        }
    }

    /// Adds a confidence score to the object.
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }
}

/// A descriptive label for the whole image; carries no geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectedLabel {
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl DetectedLabel {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            score: None,
        }
    }

    /// Adds a confidence score to the label.
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }
}

/// A text region found by OCR, with a pixel-space polygon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectedText {
    /// Transcribed text.
    pub description: String,

    /// Bounding polygon in absolute pixels.
    pub polygon: BoundingPolygon<Pixel>,

    /// Optional BCP-47 locale hint (usually only on the full-text block).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl DetectedText {
    pub fn new(description: impl Into<String>, polygon: BoundingPolygon<Pixel>) -> Self {
        Self {
            description: description.into(),
            polygon,
            locale: None,
        }
    }

    /// Sets the locale hint.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_pattern() {
        let object = DetectedObject::new(
            "Cat",
            BoundingPolygon::from_points(&[(0.1, 0.1), (0.9, 0.1), (0.9, 0.9), (0.1, 0.9)]),
        )
        .with_score(0.92);
        assert_eq!(object.score, Some(0.92));
        assert_eq!(object.polygon.len(), 4);

        let text = DetectedText::new("hello", BoundingPolygon::default()).with_locale("en");
        assert_eq!(text.locale.as_deref(), Some("en"));
    }
}
