//! Vision service result JSON reader and writer.
//!
//! Results are stored in the Cloud Vision REST `AnnotateImageResponse`
//! shape, either as a bare response object or wrapped in a batch
//! `{"responses": [...]}` envelope (only the first response is used, since
//! one invocation analyzes one image).
//!
//! # Format Reference
//!
//! - `localizedObjectAnnotations[].boundingPoly.normalizedVertices` are
//!   fractions of the image size.
//! - `textAnnotations[].boundingPoly.vertices` are absolute pixels.
//! - `labelAnnotations[]` carry no geometry.
//!
//! The service drops zero-valued fields, so a vertex at the origin arrives
//! as `{}` and a missing array means "no results".

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::model::{AnnotationSet, DetectedLabel, DetectedObject, DetectedText};
use super::{BoundingPolygon, Coord, Normalized, Pixel};
use crate::error::SightspeakError;

// ============================================================================
// Wire types (internal to this module)
// ============================================================================

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VisionResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    localized_object_annotations: Vec<VisionObject>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    label_annotations: Vec<VisionLabel>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    text_annotations: Vec<VisionText>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<VisionStatus>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VisionObject {
    #[serde(default)]
    name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    score: Option<f64>,

    #[serde(default)]
    bounding_poly: VisionPoly,
}

#[derive(Debug, Serialize, Deserialize)]
struct VisionLabel {
    #[serde(default)]
    description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    score: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VisionText {
    #[serde(default)]
    description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    locale: Option<String>,

    #[serde(default)]
    bounding_poly: VisionPoly,
}

/// `BoundingPoly`: pixel `vertices` and/or `normalizedVertices`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VisionPoly {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    vertices: Vec<Coord<Pixel>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    normalized_vertices: Vec<Coord<Normalized>>,
}

/// `google.rpc.Status` attached to a failed response.
#[derive(Debug, Serialize, Deserialize)]
struct VisionStatus {
    #[serde(default)]
    code: i32,

    #[serde(default)]
    message: String,
}

// ============================================================================
// Public API
// ============================================================================

/// Reads vision results from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or if the stored
/// response carries a service error status.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use sightspeak::ir::io_vision_json::read_vision_json;
///
/// let annotations = read_vision_json(Path::new("response.json"))?;
/// println!("{} object(s)", annotations.objects.len());
/// # Ok::<(), sightspeak::SightspeakError>(())
/// ```
pub fn read_vision_json(path: &Path) -> Result<AnnotationSet, SightspeakError> {
    let file = File::open(path).map_err(SightspeakError::Io)?;
    let reader = BufReader::new(file);

    let response = serde_json::from_reader(reader)
        .and_then(response_from_value)
        .map_err(|source| SightspeakError::VisionJsonParse {
            path: path.to_path_buf(),
            source,
        })?;

    response_to_ir(response)
}

/// Writes an annotation set as a single `AnnotateImageResponse` JSON file.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_vision_json(path: &Path, annotations: &AnnotationSet) -> Result<(), SightspeakError> {
    let file = File::create(path).map_err(SightspeakError::Io)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, &ir_to_response(annotations))
        .map_err(|source| SightspeakError::VisionJsonWrite {
            path: path.to_path_buf(),
            source,
        })
}

/// Reads vision results from a JSON string.
///
/// Useful for testing without file I/O.
pub fn from_vision_json_str(json: &str) -> Result<AnnotationSet, SightspeakError> {
    let response = response_from_value(serde_json::from_str(json)?)?;
    response_to_ir(response)
}

/// Reads vision results from a JSON byte slice.
///
/// Useful for fuzzing and processing raw bytes without UTF-8 validation overhead.
pub fn from_vision_json_slice(bytes: &[u8]) -> Result<AnnotationSet, SightspeakError> {
    let response = response_from_value(serde_json::from_slice(bytes)?)?;
    response_to_ir(response)
}

/// Writes an annotation set to a JSON string.
///
/// Useful for testing without file I/O.
pub fn to_vision_json_string(annotations: &AnnotationSet) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ir_to_response(annotations))
}

// ============================================================================
// Conversion: wire -> IR
// ============================================================================

/// Unwraps a batch envelope (first response) or takes the bare response.
///
/// The envelope is detected by its `responses` key so that a malformed
/// field is reported as such rather than as a shape mismatch.
fn response_from_value(mut document: Value) -> Result<VisionResponse, serde_json::Error> {
    if let Some(responses) = document
        .as_object_mut()
        .and_then(|map| map.remove("responses"))
    {
        let batch: Vec<VisionResponse> = serde_json::from_value(responses)?;
        return Ok(batch.into_iter().next().unwrap_or_default());
    }
    serde_json::from_value(document)
}

fn response_to_ir(response: VisionResponse) -> Result<AnnotationSet, SightspeakError> {
    if let Some(status) = response.error {
        // Code 0 is OK in google.rpc.Status.
        if status.code != 0 {
            return Err(SightspeakError::VisionResponseError {
                code: status.code,
                message: status.message,
            });
        }
    }

    let objects = response
        .localized_object_annotations
        .into_iter()
        .map(|obj| DetectedObject {
            name: obj.name,
            polygon: BoundingPolygon::new(obj.bounding_poly.normalized_vertices),
            score: obj.score,
        })
        .collect();

    let labels = response
        .label_annotations
        .into_iter()
        .map(|label| DetectedLabel {
            description: label.description,
            score: label.score,
        })
        .collect();

    let texts = response
        .text_annotations
        .into_iter()
        .map(|text| DetectedText {
            description: text.description,
            polygon: BoundingPolygon::new(text.bounding_poly.vertices),
            locale: text.locale,
        })
        .collect();

    Ok(AnnotationSet {
        objects,
        labels,
        texts,
    })
}

// ============================================================================
// Conversion: IR -> wire
// ============================================================================

fn ir_to_response(annotations: &AnnotationSet) -> VisionResponse {
    VisionResponse {
        localized_object_annotations: annotations
            .objects
            .iter()
            .map(|obj| VisionObject {
                name: obj.name.clone(),
                score: obj.score,
                bounding_poly: VisionPoly {
                    vertices: Vec::new(),
                    normalized_vertices: obj.polygon.vertices().to_vec(),
                },
            })
            .collect(),
        label_annotations: annotations
            .labels
            .iter()
            .map(|label| VisionLabel {
                description: label.description.clone(),
                score: label.score,
            })
            .collect(),
        text_annotations: annotations
            .texts
            .iter()
            .map(|text| VisionText {
                description: text.description.clone(),
                locale: text.locale.clone(),
                bounding_poly: VisionPoly {
                    vertices: text.polygon.vertices().to_vec(),
                    normalized_vertices: Vec::new(),
                },
            })
            .collect(),
        error: None,
    }
}
