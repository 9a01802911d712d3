#![allow(dead_code)]

use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};

pub const BACKGROUND: Rgb<u8> = Rgb([40, 40, 40]);

/// One object, two labels and an OCR block with two tokens, sized for a
/// 100x100 image.
pub const SAMPLE_RESPONSE: &str = r#"{
  "localizedObjectAnnotations": [
    {
      "name": "cat",
      "score": 0.91,
      "boundingPoly": {
        "normalizedVertices": [
          {"x": 0.1, "y": 0.1},
          {"x": 0.1, "y": 0.9},
          {"x": 0.9, "y": 0.9},
          {"x": 0.9, "y": 0.1}
        ]
      }
    }
  ],
  "labelAnnotations": [
    {"description": "Cat", "score": 0.98},
    {"description": "Whiskers", "score": 0.9}
  ],
  "textAnnotations": [
    {
      "locale": "en",
      "description": "HELLO WORLD",
      "boundingPoly": {"vertices": [{"x": 20, "y": 30}, {"x": 80, "y": 30}, {"x": 80, "y": 60}, {"x": 20, "y": 60}]}
    },
    {
      "description": "HELLO",
      "boundingPoly": {"vertices": [{"x": 20, "y": 30}, {"x": 45, "y": 30}, {"x": 45, "y": 60}, {"x": 20, "y": 60}]}
    },
    {
      "description": "WORLD",
      "boundingPoly": {"vertices": [{"x": 55, "y": 30}, {"x": 80, "y": 30}, {"x": 80, "y": 60}, {"x": 55, "y": 60}]}
    }
  ]
}"#;

pub fn write_png(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    RgbImage::from_pixel(width, height, BACKGROUND)
        .save(path)
        .expect("write png file");
}

pub fn write_response(path: &Path, json: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, json).expect("write response json");
}
