//! Label font loading.
//!
//! Text labels need a TrueType/OpenType font. The caller can name one
//! explicitly; otherwise a short list of common system font locations is
//! probed.

use std::path::{Path, PathBuf};

use ab_glyph::FontVec;
use tracing::debug;

use crate::error::SightspeakError;

/// Environment variable the CLI reads for a label font path.
pub const FONT_ENV: &str = "SIGHTSPEAK_FONT";

const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Loads a font file from disk.
///
/// # Errors
/// Returns [`SightspeakError::FontLoad`] if the file cannot be read or is
/// not a font `ab_glyph` can parse.
pub fn load_font(path: &Path) -> Result<FontVec, SightspeakError> {
    let data = std::fs::read(path).map_err(|err| SightspeakError::FontLoad {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    FontVec::try_from_vec(data).map_err(|err| SightspeakError::FontLoad {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}

/// Resolves the label font.
///
/// An explicit path must load; failures there are reported rather than
/// silently replaced. Without one, the first parseable system candidate
/// wins.
///
/// # Errors
/// Returns [`SightspeakError::FontLoad`] for a bad explicit path, or
/// [`SightspeakError::NoFontFound`] if no candidate is usable.
pub fn resolve_label_font(explicit: Option<&Path>) -> Result<FontVec, SightspeakError> {
    if let Some(path) = explicit {
        return load_font(path);
    }

    for candidate in SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from) {
        if !candidate.is_file() {
            continue;
        }
        match load_font(&candidate) {
            Ok(font) => {
                debug!("Using label font {}", candidate.display());
                return Ok(font);
            }
            Err(err) => debug!("Skipping font candidate: {}", err),
        }
    }

    Err(SightspeakError::NoFontFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_explicit_font_is_reported() {
        let err = resolve_label_font(Some(Path::new("does/not/exist.ttf"))).unwrap_err();
        assert!(matches!(err, SightspeakError::FontLoad { .. }));
    }

    #[test]
    fn test_non_font_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a-font.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();

        let err = load_font(&path).unwrap_err();
        assert!(err.to_string().contains("not-a-font.ttf"));
    }
}
