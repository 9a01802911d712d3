//! Criterion microbenches for sightspeak rendering and parsing.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure the performance of:
//! - Vision results JSON parsing (from_vision_json_str)
//! - Object and OCR overlay rendering (geometry only, no font)
//! - Display downscaling (scale_to_fit)

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use image::RgbImage;
use std::hint::black_box;

use sightspeak::ir::io_vision_json::from_vision_json_str;
use sightspeak::render::OverlayRenderer;
use sightspeak::scale::scale_to_fit;

const RESPONSE_FIXTURE: &str = r#"{
  "localizedObjectAnnotations": [
    {"name": "Car", "score": 0.94, "boundingPoly": {"normalizedVertices": [{"x": 0.05, "y": 0.4}, {"x": 0.45, "y": 0.4}, {"x": 0.45, "y": 0.8}, {"x": 0.05, "y": 0.8}]}},
    {"name": "Person", "score": 0.88, "boundingPoly": {"normalizedVertices": [{"x": 0.6, "y": 0.2}, {"x": 0.7, "y": 0.2}, {"x": 0.7, "y": 0.9}, {"x": 0.6, "y": 0.9}]}},
    {"name": "Traffic sign", "score": 0.71, "boundingPoly": {"normalizedVertices": [{"x": 0.8, "y": 0.05}, {"x": 0.95, "y": 0.05}, {"x": 0.95, "y": 0.2}, {"x": 0.8, "y": 0.2}]}}
  ],
  "labelAnnotations": [
    {"description": "Street", "score": 0.97},
    {"description": "Vehicle", "score": 0.95},
    {"description": "Road surface", "score": 0.9}
  ],
  "textAnnotations": [
    {"locale": "en", "description": "ONE WAY", "boundingPoly": {"vertices": [{"x": 500, "y": 40}, {"x": 610, "y": 40}, {"x": 610, "y": 70}, {"x": 500, "y": 70}]}},
    {"description": "ONE", "boundingPoly": {"vertices": [{"x": 500, "y": 40}, {"x": 550, "y": 40}, {"x": 550, "y": 70}, {"x": 500, "y": 70}]}},
    {"description": "WAY", "boundingPoly": {"vertices": [{"x": 560, "y": 40}, {"x": 610, "y": 40}, {"x": 610, "y": 70}, {"x": 560, "y": 70}]}}
  ]
}"#;

/// Benchmark vision JSON parsing from string.
fn bench_vision_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("vision_parse");
    group.throughput(Throughput::Bytes(RESPONSE_FIXTURE.len() as u64));

    group.bench_function("from_vision_json_str", |b| {
        b.iter(|| {
            let set = from_vision_json_str(black_box(RESPONSE_FIXTURE)).unwrap();
            black_box(set)
        })
    });

    group.finish();
}

/// Benchmark both overlay modes on a 640x480 frame.
///
/// The clone of the source image is part of each render call, so it is
/// included in the measurement.
fn bench_render(c: &mut Criterion) {
    let annotations = from_vision_json_str(RESPONSE_FIXTURE).expect("Failed to parse fixture");
    let image = RgbImage::new(640, 480);
    let renderer = OverlayRenderer::default();

    let mut group = c.benchmark_group("render");

    group.bench_function("render_objects", |b| {
        b.iter(|| {
            let overlay = renderer
                .render_objects(black_box(&image), &annotations.objects)
                .unwrap();
            black_box(overlay)
        })
    });

    group.bench_function("render_texts", |b| {
        b.iter(|| {
            let overlay = renderer
                .render_texts(black_box(&image), &annotations.texts)
                .unwrap();
            black_box(overlay)
        })
    });

    group.finish();
}

/// Benchmark downscaling a 1800x900 image to the default display bounds.
fn bench_scale(c: &mut Criterion) {
    let image = RgbImage::new(1800, 900);

    let mut group = c.benchmark_group("scale");
    group.bench_function("scale_to_fit_1800x900", |b| {
        b.iter(|| {
            let scaled = scale_to_fit(black_box(&image), 900, 700).unwrap();
            black_box(scaled.dimensions())
        })
    });
    group.finish();
}

criterion_group!(benches, bench_vision_parse, bench_render, bench_scale);
criterion_main!(benches);
