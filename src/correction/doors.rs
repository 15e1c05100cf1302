use std::collections::VecDeque;

use tracing::debug;

use crate::building::SubRoom;
use crate::geometry::{Segment, Wall};
use crate::math::POINT_EPS;

/// Cuts door-sized gaps out of walls that a door segment lies on.
///
/// Floor plans frequently draw a wall straight across an opening; any wall
/// containing both endpoints of an exit is replaced by the two remainder
/// pieces outside the opening. Remainders go back on the worklist since a
/// single wall can carry several doors. Returns whether any wall changed.
pub fn resolve_overlapping_doors(subroom: &mut SubRoom, exits: &[Segment]) -> bool {
    let mut exits: Vec<Segment> = exits.to_vec();
    let mut queue: VecDeque<Wall> = subroom.walls().iter().copied().collect();
    let mut kept: Vec<Wall> = Vec::with_capacity(queue.len());
    let mut changed = false;

    while let Some(wall) = queue.pop_front() {
        let overlapping = exits.iter().position(|exit| {
            wall.segment().contains_point(&exit.p1()) && wall.segment().contains_point(&exit.p2())
        });
        let Some(idx) = overlapping else {
            kept.push(wall);
            continue;
        };
        let exit = exits.remove(idx);
        changed = true;
        debug!(
            room = subroom.room_id(),
            subroom = subroom.subroom_id(),
            wall = %wall,
            exit = %exit,
            "wall overlaps an exit, cutting the opening"
        );

        // Pair each wall endpoint with the closer exit endpoint so the
        // remainders do not cross the opening.
        let (near1, near2) = if (exit.p1() - wall.p1()).norm_squared()
            < (exit.p2() - wall.p1()).norm_squared()
        {
            (exit.p1(), exit.p2())
        } else {
            (exit.p2(), exit.p1())
        };

        for (a, b) in [(wall.p1(), near1), (wall.p2(), near2)] {
            // A wall fully consumed by the opening leaves no remainder.
            if (b - a).norm() > POINT_EPS {
                queue.push_back(Wall::new(Segment::new(a, b), wall.kind()));
            }
        }
    }

    if changed {
        subroom.set_walls(kept);
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::building::SubroomKind;
    use crate::math::Point2;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    fn subroom_with_walls(walls: &[Segment]) -> SubRoom {
        let mut sub = SubRoom::new(0, 0, SubroomKind::Normal);
        for s in walls {
            sub.add_wall(Wall::new(*s, crate::geometry::WallKind::Plain));
        }
        sub
    }

    #[test]
    fn wall_containing_a_door_is_cut_open() {
        let mut sub = subroom_with_walls(&[seg(0.0, 0.0, 10.0, 0.0)]);
        let changed = resolve_overlapping_doors(&mut sub, &[seg(2.0, 0.0, 4.0, 0.0)]);
        assert!(changed);
        assert_eq!(sub.walls().len(), 2);
        assert!(sub.walls().contains(&Wall::plain(
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0)
        )));
        assert!(sub.walls().contains(&Wall::plain(
            Point2::new(4.0, 0.0),
            Point2::new(10.0, 0.0)
        )));
    }

    #[test]
    fn remainders_are_reexamined_for_further_doors() {
        let mut sub = subroom_with_walls(&[seg(0.0, 0.0, 10.0, 0.0)]);
        let exits = [seg(2.0, 0.0, 3.0, 0.0), seg(6.0, 0.0, 7.0, 0.0)];
        assert!(resolve_overlapping_doors(&mut sub, &exits));
        assert_eq!(sub.walls().len(), 3);
        assert!(sub.walls().contains(&Wall::plain(
            Point2::new(3.0, 0.0),
            Point2::new(6.0, 0.0)
        )));
    }

    #[test]
    fn wall_equal_to_the_door_vanishes() {
        let mut sub = subroom_with_walls(&[seg(2.0, 0.0, 4.0, 0.0)]);
        assert!(resolve_overlapping_doors(&mut sub, &[seg(2.0, 0.0, 4.0, 0.0)]));
        assert!(sub.walls().is_empty());
    }

    #[test]
    fn unrelated_walls_are_untouched() {
        let mut sub = subroom_with_walls(&[seg(0.0, 0.0, 10.0, 0.0), seg(0.0, 0.0, 0.0, 5.0)]);
        let changed = resolve_overlapping_doors(&mut sub, &[seg(0.0, 2.0, 0.0, 3.0)]);
        assert!(changed);
        assert_eq!(sub.walls().len(), 3);
        assert!(sub.walls().contains(&Wall::plain(
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0)
        )));
    }

    #[test]
    fn no_overlap_leaves_walls_alone() {
        let mut sub = subroom_with_walls(&[seg(0.0, 0.0, 10.0, 0.0)]);
        assert!(!resolve_overlapping_doors(
            &mut sub,
            &[seg(0.0, 5.0, 2.0, 5.0)]
        ));
        assert_eq!(sub.walls().len(), 1);
    }
}
