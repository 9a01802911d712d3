//! Aggregation of object, label and OCR results into one summary.
//!
//! This is pure data transformation with no knowledge of rendering. Empty
//! inputs are valid and produce empty sections.

mod report;

pub use report::AnnotationSummary;

use crate::ir::{AnnotationSet, DetectedLabel, DetectedObject, DetectedText};

/// Builds the summary for one image.
///
/// - object names are kept in order, duplicates included;
/// - label descriptions are joined with `\n` in service order;
/// - the primary OCR text is the description of element 0 (the full-text
///   block), or empty when there is no OCR result.
pub fn aggregate(
    objects: &[DetectedObject],
    labels: &[DetectedLabel],
    texts: &[DetectedText],
) -> AnnotationSummary {
    let object_names = objects.iter().map(|obj| obj.name.clone()).collect();

    let label_text = labels
        .iter()
        .map(|label| label.description.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let primary_ocr_text = texts
        .first()
        .map(|text| text.description.clone())
        .unwrap_or_default();

    AnnotationSummary::new(object_names, label_text, primary_ocr_text)
}

/// Builds the summary for a full [`AnnotationSet`].
pub fn aggregate_set(annotations: &AnnotationSet) -> AnnotationSummary {
    aggregate(&annotations.objects, &annotations.labels, &annotations.texts)
}
