use spade::{
    ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation,
};

use crate::error::GeometryError;
use crate::math::polygon_2d::point_in_polygon;
use crate::math::Point2;

/// Triangulates a closed boundary ring into a navigable triangle set.
///
/// The ring edges are inserted as constraints so no triangle crosses the
/// boundary; triangles whose centroid falls outside the (possibly concave)
/// ring are discarded.
///
/// # Errors
///
/// Returns [`GeometryError::Triangulation`] if the ring is degenerate or a
/// point cannot be inserted.
pub fn triangulate_ring(ring: &[Point2]) -> Result<Vec<[Point2; 3]>, GeometryError> {
    if ring.len() < 3 {
        return Err(GeometryError::Triangulation(
            "boundary ring needs at least 3 points".into(),
        ));
    }

    let mut cdt = ConstrainedDelaunayTriangulation::<SpadePoint2<f64>>::new();
    let mut handles = Vec::with_capacity(ring.len());
    for p in ring {
        let h = cdt
            .insert(SpadePoint2::new(p.x, p.y))
            .map_err(|e: InsertionError| GeometryError::Triangulation(e.to_string()))?;
        handles.push(h);
    }
    for i in 0..handles.len() {
        let from = handles[i];
        let to = handles[(i + 1) % handles.len()];
        if from != to {
            cdt.add_constraint(from, to);
        }
    }

    let mut triangles = Vec::new();
    for face in cdt.inner_faces() {
        let [a, b, c] = face.positions();
        let centroid = Point2::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0);
        if point_in_polygon(&centroid, ring) {
            triangles.push([
                Point2::new(a.x, a.y),
                Point2::new(b.x, b.y),
                Point2::new(c.x, c.y),
            ]);
        }
    }
    Ok(triangles)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn tri_area(t: &[Point2; 3]) -> f64 {
        ((t[1].x - t[0].x) * (t[2].y - t[0].y) - (t[2].x - t[0].x) * (t[1].y - t[0].y)).abs() / 2.0
    }

    #[test]
    fn square_produces_two_triangles() {
        let ring = [
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ];
        let tris = triangulate_ring(&ring).unwrap();
        assert_eq!(tris.len(), 2);
        let total: f64 = tris.iter().map(tri_area).sum();
        assert!((total - 16.0).abs() < 1e-9);
    }

    #[test]
    fn concave_ring_excludes_the_notch() {
        let ring = [
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 2.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 4.0),
            Point2::new(0.0, 4.0),
        ];
        let tris = triangulate_ring(&ring).unwrap();
        let total: f64 = tris.iter().map(tri_area).sum();
        // L-shape area, the cut-out quadrant contributes nothing.
        assert!((total - 12.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_ring_is_rejected() {
        assert!(triangulate_ring(&[Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]).is_err());
    }
}
