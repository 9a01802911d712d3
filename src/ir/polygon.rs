//! Bounding polygons as reported by the vision service.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use crate::error::SightspeakError;

/// Minimum vertex count for a polygon to be drawable.
pub const MIN_DRAWABLE_VERTICES: usize = 2;

/// An ordered sequence of vertices; insertion order is drawing order.
///
/// Edges connect consecutive vertices and the last vertex closes back to
/// the first. Detections are normally quadrilaterals (top-left, top-right,
/// bottom-right, bottom-left) but the type does not enforce a vertex count,
/// so malformed service output can be represented and skipped at render
/// time instead of failing the whole parse.
#[derive(Clone, PartialEq)]
pub struct BoundingPolygon<TSpace> {
    vertices: Vec<Coord<TSpace>>,
}

impl<TSpace> BoundingPolygon<TSpace> {
    pub fn new(vertices: Vec<Coord<TSpace>>) -> Self {
        Self { vertices }
    }

    /// Builds a polygon from `(x, y)` pairs.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        Self::new(points.iter().map(|&(x, y)| Coord::new(x, y)).collect())
    }

    #[inline]
    pub fn vertices(&self) -> &[Coord<TSpace>] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertex at `index`, if present.
    #[inline]
    pub fn vertex(&self, index: usize) -> Option<&Coord<TSpace>> {
        self.vertices.get(index)
    }

    /// Checks that every vertex is finite and within `max_x`/`max_y` of the
    /// origin on each axis.
    ///
    /// # Errors
    /// Returns [`SightspeakError::VertexOutOfRange`] for the first vertex
    /// that is not.
    pub fn ensure_bounded(&self, max_x: f64, max_y: f64) -> Result<(), SightspeakError> {
        let outside = self
            .vertices
            .iter()
            .find(|v| !v.is_finite() || v.x.abs() > max_x || v.y.abs() > max_y);

        match outside {
            Some(v) => Err(SightspeakError::VertexOutOfRange { x: v.x, y: v.y }),
            None => Ok(()),
        }
    }

    /// Checks that the polygon has enough vertices to draw.
    ///
    /// # Errors
    /// Returns [`SightspeakError::EmptyPolygon`] for fewer than two vertices.
    pub fn ensure_drawable(&self) -> Result<(), SightspeakError> {
        if self.vertices.len() < MIN_DRAWABLE_VERTICES {
            return Err(SightspeakError::EmptyPolygon {
                points: self.vertices.len(),
            });
        }
        Ok(())
    }

    /// Iterates over closed edges: `(v[i], v[(i + 1) % n])`.
    pub fn edges(&self) -> impl Iterator<Item = (&Coord<TSpace>, &Coord<TSpace>)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (&self.vertices[i], &self.vertices[(i + 1) % n]))
    }
}

impl<TSpace> std::fmt::Debug for BoundingPolygon<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.vertices.iter()).finish()
    }
}

impl<TSpace> Default for BoundingPolygon<TSpace> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

// Manual serde impls so TSpace needs no Serialize/Deserialize bounds.
impl<TSpace> Serialize for BoundingPolygon<TSpace> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.vertices.serialize(serializer)
    }
}

impl<'de, TSpace> Deserialize<'de> for BoundingPolygon<TSpace> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Coord<TSpace>>::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Normalized, Pixel};

    #[test]
    fn test_edges_close_last_to_first() {
        let poly: BoundingPolygon<Pixel> =
            BoundingPolygon::from_points(&[(0.0, 0.0), (10.0, 0.0), (10.0, 5.0)]);
        let edges: Vec<_> = poly.edges().map(|(a, b)| (a.x, b.x)).collect();
        assert_eq!(edges, vec![(0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]);
    }

    #[test]
    fn test_ensure_drawable() {
        let single: BoundingPolygon<Normalized> = BoundingPolygon::from_points(&[(0.5, 0.5)]);
        assert!(matches!(
            single.ensure_drawable(),
            Err(SightspeakError::EmptyPolygon { points: 1 })
        ));

        let empty: BoundingPolygon<Normalized> = BoundingPolygon::default();
        assert!(empty.ensure_drawable().is_err());

        let segment: BoundingPolygon<Normalized> =
            BoundingPolygon::from_points(&[(0.1, 0.1), (0.9, 0.9)]);
        assert!(segment.ensure_drawable().is_ok());
    }

    #[test]
    fn test_ensure_bounded() {
        let inside: BoundingPolygon<Pixel> =
            BoundingPolygon::from_points(&[(-5.0, 0.0), (80.0, 80.0)]);
        assert!(inside.ensure_bounded(80.0, 80.0).is_ok());

        let far: BoundingPolygon<Pixel> =
            BoundingPolygon::from_points(&[(1.0, 1.0), (1e12, 5.0)]);
        assert!(matches!(
            far.ensure_bounded(80.0, 80.0),
            Err(SightspeakError::VertexOutOfRange { x, y }) if x == 1e12 && y == 5.0
        ));

        let below: BoundingPolygon<Pixel> =
            BoundingPolygon::from_points(&[(5.0, -1e12), (6.0, -1e12)]);
        assert!(below.ensure_bounded(80.0, 80.0).is_err());

        let nan: BoundingPolygon<Pixel> =
            BoundingPolygon::from_points(&[(f64::NAN, 1.0), (2.0, 2.0)]);
        assert!(nan.ensure_bounded(80.0, 80.0).is_err());
    }

    #[test]
    fn test_serializes_as_vertex_list() {
        let poly: BoundingPolygon<Pixel> = BoundingPolygon::from_points(&[(1.0, 2.0)]);
        let json = serde_json::to_string(&poly).unwrap();
        assert_eq!(json, r#"[{"x":1.0,"y":2.0}]"#);
    }
}
