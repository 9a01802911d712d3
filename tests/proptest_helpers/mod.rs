#![allow(dead_code)]

use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

use sightspeak::ir::{
    AnnotationSet, BoundingPolygon, Coord, DetectedLabel, DetectedObject, DetectedText,
    Normalized, Pixel,
};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

pub fn arb_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,15}"
}

pub fn arb_unit_coord() -> impl Strategy<Value = Coord<Normalized>> {
    (0.0f64..=1.0, 0.0f64..=1.0).prop_map(|(x, y)| Coord::new(x, y))
}

pub fn arb_dims() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=4096, 1u32..=4096)
}

/// Axis-aligned normalized quadrilateral in service vertex order.
pub fn arb_object() -> impl Strategy<Value = DetectedObject> {
    (arb_name(), 0.0f64..0.5, 0.0f64..0.5, 0.5f64..=1.0, 0.5f64..=1.0).prop_map(
        |(name, x0, y0, x1, y1)| {
            DetectedObject::new(
                name,
                BoundingPolygon::from_points(&[(x0, y0), (x1, y0), (x1, y1), (x0, y1)]),
            )
        },
    )
}

pub fn arb_text() -> impl Strategy<Value = DetectedText> {
    (arb_name(), 0.0f64..200.0, 0.0f64..200.0, 1.0f64..50.0, 1.0f64..50.0).prop_map(
        |(text, x, y, w, h)| {
            DetectedText::new(
                text,
                BoundingPolygon::<Pixel>::from_points(&[
                    (x, y),
                    (x + w, y),
                    (x + w, y + h),
                    (x, y + h),
                ]),
            )
        },
    )
}

pub fn arb_annotation_set(max_each: usize) -> impl Strategy<Value = AnnotationSet> {
    (
        prop::collection::vec(arb_object(), 0..=max_each),
        prop::collection::vec(arb_name().prop_map(DetectedLabel::new), 0..=max_each),
        prop::collection::vec(arb_text(), 0..=max_each),
    )
        .prop_map(|(objects, labels, texts)| AnnotationSet {
            objects,
            labels,
            texts,
        })
}
