use crate::building::SubRoom;
use crate::error::GeometryError;
use crate::geometry::Segment;
use crate::math::{nearly_equal, Point2};

/// Chains the subroom's walls and doors into one closed boundary ring.
///
/// Starts at an arbitrary segment and repeatedly appends the segment whose
/// endpoint matches the current tail. The ring is closed when the tail
/// returns to the start with no segment left over.
///
/// # Errors
///
/// Returns [`GeometryError::OpenBoundary`] if the segments do not form
/// exactly one closed loop.
pub fn derive_polygon(subroom: &SubRoom, doors: &[Segment]) -> Result<Vec<Point2>, GeometryError> {
    let open = || GeometryError::OpenBoundary {
        room_id: subroom.room_id(),
        subroom_id: subroom.subroom_id(),
    };

    let mut remaining: Vec<Segment> = subroom
        .walls()
        .iter()
        .map(|w| *w.segment())
        .chain(doors.iter().copied())
        .collect();
    if remaining.is_empty() {
        return Err(open());
    }

    let first = remaining.swap_remove(0);
    let start = first.p1();
    let mut tail = first.p2();
    let mut ring = vec![start];

    while !remaining.is_empty() {
        let next = remaining
            .iter()
            .position(|s| nearly_equal(&s.p1(), &tail) || nearly_equal(&s.p2(), &tail))
            .ok_or_else(open)?;
        let seg = remaining.swap_remove(next);
        ring.push(tail);
        tail = if nearly_equal(&seg.p1(), &tail) {
            seg.p2()
        } else {
            seg.p1()
        };
    }

    if !nearly_equal(&tail, &start) || ring.len() < 3 {
        return Err(open());
    }
    Ok(ring)
}
