use std::path::PathBuf;
use thiserror::Error;

/// The main error type for sightspeak operations.
#[derive(Debug, Error)]
pub enum SightspeakError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid image dimensions {width}x{height} (must be positive)")]
    InvalidImageDimensions { width: u32, height: u32 },

    #[error("Polygon has {points} point(s); at least 2 are required")]
    EmptyPolygon { points: usize },

    #[error("Vertex ({x}, {y}) lies outside the drawable range")]
    VertexOutOfRange { x: f64, y: f64 },

    #[error("Failed to decode image {path}: {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write image {path}: {source}")]
    ImageEncode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to parse vision results from {path}: {source}")]
    VisionJsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write vision results to {path}: {source}")]
    VisionJsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Vision service reported error {code}: {message}")]
    VisionResponseError { code: i32, message: String },

    #[error("Failed to load font {path}: {reason}")]
    FontLoad { path: PathBuf, reason: String },

    #[error("No usable label font found (pass --font or set SIGHTSPEAK_FONT)")]
    NoFontFound,

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
