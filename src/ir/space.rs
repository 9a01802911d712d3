//! Coordinate space markers.
//!
//! The vision service mixes two coordinate systems in one response:
//! `localizedObjectAnnotations` use `normalizedVertices` (fractions of the
//! image size) while `textAnnotations` use `vertices` in absolute pixels.
//! Each [`Coord`](super::Coord) carries one of these uninhabited markers so
//! an object vertex can only reach the canvas through
//! [`normalized_to_pixel`](crate::geometry::normalized_to_pixel), and an OCR
//! vertex can never be scaled by the image size a second time.

use std::fmt;

/// OCR vertices: absolute pixels of the analyzed image, origin top-left.
///
/// Values may be fractional or lie past the image edge.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {}

/// Object vertices: `x / width` and `y / height`, nominally in `[0, 1]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Normalized {}

macro_rules! uninhabited_debug {
    ($($space:ty),+) => {
        $(
            impl fmt::Debug for $space {
                fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
                    match *self {}
                }
            }
        )+
    };
}

uninhabited_debug!(Pixel, Normalized);
