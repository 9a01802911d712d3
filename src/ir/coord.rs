//! Typed vertex coordinates and integer pixel points.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use super::space::Pixel;

/// A polygon vertex as reported by the vision service.
///
/// The `TSpace` parameter is either [`Pixel`] or
/// [`Normalized`](super::Normalized), so a normalized object vertex cannot
/// be handed to code expecting OCR pixel vertices.
#[derive(Clone, Copy, PartialEq)]
pub struct Coord<TSpace> {
    pub x: f64,
    pub y: f64,
    _space: PhantomData<TSpace>,
}

impl<TSpace> Coord<TSpace> {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            _space: PhantomData,
        }
    }

    /// Returns true if both coordinates are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Coord<Pixel> {
    /// Passes a service-supplied pixel vertex through to integer space.
    ///
    /// Fractional parts are truncated toward zero. No clamping happens here:
    /// OCR vertices may legitimately sit on or past the image edge and the
    /// drawing primitives clip. Out-of-range values saturate, so callers
    /// check [`BoundingPolygon::ensure_bounded`](super::BoundingPolygon::ensure_bounded)
    /// before drawing.
    #[inline]
    pub fn to_pixel_point(&self) -> PixelPoint {
        PixelPoint::new(self.x as i32, self.y as i32)
    }
}

impl<TSpace> std::fmt::Debug for Coord<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coord")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl<TSpace> Default for Coord<TSpace> {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

// Manual serde impls so TSpace needs no Serialize/Deserialize bounds.
impl<TSpace> Serialize for Coord<TSpace> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Coord", 2)?;
        state.serialize_field("x", &self.x)?;
        state.serialize_field("y", &self.y)?;
        state.end()
    }
}

impl<'de, TSpace> Deserialize<'de> for Coord<TSpace> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // The service omits zero-valued fields, so `{}` is the origin.
        #[derive(Deserialize)]
        struct CoordData {
            #[serde(default)]
            x: f64,
            #[serde(default)]
            y: f64,
        }
        let data = CoordData::deserialize(deserializer)?;
        Ok(Coord::new(data.x, data.y))
    }
}

/// An integer pixel position on a raster buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Normalized;

    #[test]
    fn test_coord_is_finite() {
        let finite: Coord<Normalized> = Coord::new(0.25, 0.5);
        assert!(finite.is_finite());

        let nan: Coord<Normalized> = Coord::new(f64::NAN, 0.5);
        assert!(!nan.is_finite());

        let inf: Coord<Pixel> = Coord::new(10.0, f64::INFINITY);
        assert!(!inf.is_finite());
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let coord: Coord<Pixel> = serde_json::from_str(r#"{"y": 12}"#).unwrap();
        assert_eq!(coord.x, 0.0);
        assert_eq!(coord.y, 12.0);

        let origin: Coord<Normalized> = serde_json::from_str("{}").unwrap();
        assert_eq!(origin, Coord::new(0.0, 0.0));
    }

    #[test]
    fn test_pixel_passthrough_truncates() {
        let coord: Coord<Pixel> = Coord::new(12.9, -3.7);
        assert_eq!(coord.to_pixel_point(), PixelPoint::new(12, -3));
    }
}
