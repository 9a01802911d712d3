//! Data model for vision-service results.
//!
//! This module defines the detections the engine consumes: localized
//! objects, image labels and OCR text regions, together with the geometry
//! they carry.
//!
//! # Design Principles
//!
//! 1. **Type Safety**: Coordinates carry a marker type so normalized object
//!    vertices and pixel OCR vertices cannot be mixed up at compile time.
//!
//! 2. **Order Preservation**: Every result sequence keeps the order the
//!    service produced. For OCR, element 0 is the full text block and the
//!    remaining elements are individual tokens.
//!
//! 3. **Permissive Construction**: Polygons with too few vertices can be
//!    represented, so rendering can skip them instead of the parse failing.
//!
//! # Example
//!
//! ```
//! use sightspeak::ir::{AnnotationSet, BoundingPolygon, DetectedLabel, DetectedObject};
//!
//! let annotations = AnnotationSet {
//!     objects: vec![DetectedObject::new(
//!         "cat",
//!         BoundingPolygon::from_points(&[(0.1, 0.1), (0.9, 0.1), (0.9, 0.9), (0.1, 0.9)]),
//!     )],
//!     labels: vec![DetectedLabel::new("Cat"), DetectedLabel::new("Whiskers")],
//!     ..Default::default()
//! };
//! assert!(!annotations.is_empty());
//! ```

mod coord;
pub mod io_vision_json;
mod model;
mod polygon;
mod space;

pub use coord::{Coord, PixelPoint};
pub use model::{AnnotationSet, DetectedLabel, DetectedObject, DetectedText};
pub use polygon::{BoundingPolygon, MIN_DRAWABLE_VERTICES};
pub use space::{Normalized, Pixel};
