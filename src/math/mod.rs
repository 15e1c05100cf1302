pub mod polygon_2d;
pub mod segment_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for parametric floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Metric tolerance (in metres) for "nearly equal" point predicates.
///
/// Hand-authored floor plans carry coordinates rounded to a few decimal
/// places, so coincidence tests must be looser than [`TOLERANCE`].
pub const POINT_EPS: f64 = 1e-6;

/// Checks whether two points coincide within [`POINT_EPS`].
#[must_use]
pub fn nearly_equal(a: &Point2, b: &Point2) -> bool {
    (a - b).norm_squared() < POINT_EPS * POINT_EPS
}
