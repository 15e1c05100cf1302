use crate::error::GeometryError;
use crate::geometry::{Segment, Wall};
use crate::math::{Point2, Vector2};

/// Half-length of the probe rays cast from train door endpoints onto the
/// track. Far larger than any plausible floor plan.
pub const RAY_SCALE: f64 = 1000.0;

/// One point where a train door endpoint projects onto a track wall.
#[derive(Debug, Clone, Copy)]
pub struct TrackHit {
    pub point: Point2,
    pub wall: Wall,
}

fn ray_through(origin: &Point2, normal: &Vector2) -> Segment {
    Segment::new(origin - normal * RAY_SCALE, origin + normal * RAY_SCALE)
}

/// Hits of one probe ray against the track walls.
///
/// A ray passing exactly through the joint of two adjacent track walls
/// intersects both; the joint is attributed to the wall the companion ray
/// also crosses, so each door counts the wall it actually spans.
fn ray_hits(ray: &Segment, companion: &Segment, track: &[Wall]) -> Vec<TrackHit> {
    let mut hits = Vec::new();
    for wall in track {
        let Some(point) = ray.intersection_with(wall.segment()) else {
            continue;
        };
        if wall.segment().has_endpoint(&point)
            && companion.intersection_with(wall.segment()).is_none()
        {
            continue;
        }
        hits.push(TrackHit { point, wall: *wall });
    }
    hits
}

/// Projects each train door onto the track walls.
///
/// Both endpoints of a door are cast perpendicular to the door across the
/// track; each ray must hit the track exactly once. Returns one hit pair per
/// door, in door order.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroLength`] for a degenerate door segment and
/// [`GeometryError::WrongIntersectionCount`] when a door does not project
/// cleanly onto the track.
pub fn intersection_points(
    doors: &[Segment],
    track: &[Wall],
) -> Result<Vec<(TrackHit, TrackHit)>, GeometryError> {
    let mut pairs = Vec::with_capacity(doors.len());
    for (door_index, door) in doors.iter().enumerate() {
        let normal = door.unit_normal()?;
        let ray1 = ray_through(&door.p1(), &normal);
        let ray2 = ray_through(&door.p2(), &normal);
        let hits1 = ray_hits(&ray1, &ray2, track);
        let hits2 = ray_hits(&ray2, &ray1, track);
        if hits1.len() != 1 || hits2.len() != 1 {
            return Err(GeometryError::WrongIntersectionCount {
                door_index,
                found: hits1.len() + hits2.len(),
            });
        }
        pairs.push((hits1[0], hits2[0]));
    }
    Ok(pairs)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::WallKind;
    use crate::math::nearly_equal;

    fn track() -> Vec<Wall> {
        vec![
            Wall::new(
                Segment::new(Point2::new(0.0, 0.0), Point2::new(5.0, 0.0)),
                WallKind::Track(1),
            ),
            Wall::new(
                Segment::new(Point2::new(5.0, 0.0), Point2::new(10.0, 0.0)),
                WallKind::Track(1),
            ),
        ]
    }

    fn door(x1: f64, x2: f64) -> Segment {
        Segment::new(Point2::new(x1, 1.0), Point2::new(x2, 1.0))
    }

    #[test]
    fn door_projects_onto_a_single_wall() {
        let pairs = intersection_points(&[door(1.0, 3.0)], &track()).unwrap();
        assert_eq!(pairs.len(), 1);
        let (a, b) = &pairs[0];
        assert!(nearly_equal(&a.point, &Point2::new(1.0, 0.0)));
        assert!(nearly_equal(&b.point, &Point2::new(3.0, 0.0)));
    }

    #[test]
    fn door_spanning_the_joint_hits_both_walls() {
        let pairs = intersection_points(&[door(4.0, 6.0)], &track()).unwrap();
        let (a, b) = &pairs[0];
        assert!(nearly_equal(&a.point, &Point2::new(4.0, 0.0)));
        assert!(nearly_equal(&b.point, &Point2::new(6.0, 0.0)));
        assert_ne!(a.wall.segment(), b.wall.segment());
    }

    #[test]
    fn endpoint_over_the_joint_is_counted_once() {
        let pairs = intersection_points(&[door(5.0, 7.0)], &track()).unwrap();
        let (a, b) = &pairs[0];
        assert!(nearly_equal(&a.point, &Point2::new(5.0, 0.0)));
        // The joint hit belongs to the wall the door spans.
        assert_eq!(a.wall.segment(), b.wall.segment());
    }

    #[test]
    fn door_off_the_track_is_fatal() {
        let err = intersection_points(&[door(20.0, 22.0)], &track()).unwrap_err();
        assert!(matches!(
            err,
            GeometryError::WrongIntersectionCount {
                door_index: 0,
                found: 0
            }
        ));
    }

    #[test]
    fn later_door_reports_its_own_index() {
        let doors = [door(1.0, 3.0), door(20.0, 22.0)];
        let err = intersection_points(&doors, &track()).unwrap_err();
        assert!(matches!(
            err,
            GeometryError::WrongIntersectionCount { door_index: 1, .. }
        ));
    }
}
