use std::fmt;

use crate::error::GeometryError;
use crate::math::segment_2d::{point_to_segment_dist, segment_segment_intersect_2d};
use crate::math::{nearly_equal, Point2, Vector2, POINT_EPS, TOLERANCE};

/// An undirected boundary segment between two points.
///
/// The endpoint order is preserved for construction and splitting, but
/// equality treats `(p1, p2)` and `(p2, p1)` as the same segment.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    p1: Point2,
    p2: Point2,
}

impl Segment {
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    #[must_use]
    pub fn p1(&self) -> Point2 {
        self.p1
    }

    #[must_use]
    pub fn p2(&self) -> Point2 {
        self.p2
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        Point2::new((self.p1.x + self.p2.x) / 2.0, (self.p1.y + self.p2.y) / 2.0)
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        (self.p2 - self.p1).norm()
    }

    /// Unit normal of the segment (left of the `p1 → p2` direction).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroLength`] for a degenerate segment.
    pub fn unit_normal(&self) -> Result<Vector2, GeometryError> {
        let d = self.p2 - self.p1;
        let len = d.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroLength);
        }
        Ok(Vector2::new(-d.y, d.x) / len)
    }

    /// Checks whether `p` coincides with one of the two endpoints.
    #[must_use]
    pub fn has_endpoint(&self, p: &Point2) -> bool {
        nearly_equal(&self.p1, p) || nearly_equal(&self.p2, p)
    }

    /// Checks whether this segment and `other` share at least one endpoint.
    #[must_use]
    pub fn shares_endpoint_with(&self, other: &Segment) -> bool {
        self.has_endpoint(&other.p1) || self.has_endpoint(&other.p2)
    }

    /// Collinear containment: `p` lies on the segment within [`POINT_EPS`].
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        point_to_segment_dist(p, &self.p1, &self.p2) < POINT_EPS
    }

    /// Proper segment-segment intersection point, if one exists.
    ///
    /// Parallel or collinear-overlapping pairs yield `None`.
    #[must_use]
    pub fn intersection_with(&self, other: &Segment) -> Option<Point2> {
        segment_segment_intersect_2d(&self.p1, &self.p2, &other.p1, &other.p2)
            .map(|(pt, _, _)| pt)
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        (nearly_equal(&self.p1, &other.p1) && nearly_equal(&self.p2, &other.p2))
            || (nearly_equal(&self.p1, &other.p2) && nearly_equal(&self.p2, &other.p1))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})--({}, {})",
            self.p1.x, self.p1.y, self.p2.x, self.p2.y
        )
    }
}
