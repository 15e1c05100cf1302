//! Transactional geometry mutation for train arrivals.
//!
//! When a train docks, its doors become openings in the platform's track
//! walls. Every wall added or removed and every door created is logged under
//! the event id, so departure restores the exact prior geometry.

use tracing::info;

use crate::building::Building;
use crate::error::{EventError, Result};
use crate::geometry::{Door, DoorId, Segment, Wall};
use crate::math::POINT_EPS;
use crate::platform::{find_track, intersection_points};

use super::EventId;

/// Door ids created for an event: the event id leaves room for the per-door
/// index, so ids never collide across events.
const DOORS_PER_EVENT: i32 = 1000;

fn event_door_id(event: EventId, index: usize) -> std::result::Result<DoorId, EventError> {
    i32::try_from(index)
        .ok()
        .and_then(|i| event.0.checked_mul(DOORS_PER_EVENT)?.checked_add(i))
        .map(DoorId)
        .ok_or(EventError::DoorIdRange(event))
}

/// Wall edits needed to open a gap along `span`.
fn plan_opening(walls: &[Wall], span: &Segment) -> (Vec<Wall>, Vec<Wall>) {
    let mut removed = Vec::new();
    let mut added = Vec::new();

    for wall in walls {
        let inside1 = span.contains_point(&wall.p1());
        let inside2 = span.contains_point(&wall.p2());
        if inside1 && inside2 {
            // Wall lies entirely within the opening.
            removed.push(*wall);
            continue;
        }

        let covers1 = wall.segment().contains_point(&span.p1());
        let covers2 = wall.segment().contains_point(&span.p2());
        if covers1 && covers2 {
            // The opening lies within this wall; keep the two outer pieces.
            removed.push(*wall);
            let (near1, near2) = if (span.p1() - wall.p1()).norm_squared()
                < (span.p2() - wall.p1()).norm_squared()
            {
                (span.p1(), span.p2())
            } else {
                (span.p2(), span.p1())
            };
            for (a, b) in [(wall.p1(), near1), (wall.p2(), near2)] {
                if (b - a).norm() > POINT_EPS {
                    added.push(Wall::new(Segment::new(a, b), wall.kind()));
                }
            }
            continue;
        }

        if covers1 || covers2 {
            // The opening crosses one end of this wall; trim that end back.
            let cut = if covers1 { span.p1() } else { span.p2() };
            let outer = if inside1 { wall.p2() } else { wall.p1() };
            let trimmed = Wall::new(Segment::new(outer, cut), wall.kind());
            if trimmed != *wall {
                removed.push(*wall);
                added.push(trimmed);
            }
        }
    }
    (removed, added)
}

/// Opens the platform walls for a docking train and registers one transition
/// per train door.
///
/// All changes are recorded under `event` for [`reset_event`].
///
/// # Errors
///
/// Fails if the event, its train type or its track cannot be resolved, if a
/// train door does not project cleanly onto the track, or if a generated
/// door id collides with an existing door.
pub fn apply_event(building: &mut Building, event: EventId) -> Result<()> {
    let entry = building.timetable_entry(event)?.clone();
    let train = building.train_type(&entry.train_type)?.clone();
    let track = find_track(building, &entry.track_start, &entry.track_end)?;
    let pairs = intersection_points(&train.doors, &track.walls)?;

    info!(
        event = %event,
        train = %train.name,
        room = track.room_id,
        subroom = track.subroom_id,
        doors = pairs.len(),
        "train docks, opening platform walls"
    );

    for (index, (hit1, hit2)) in pairs.iter().enumerate() {
        let span = Segment::new(hit1.point, hit2.point);

        let subroom = building.subroom_mut(track.room_id, track.subroom_id)?;
        let (removed, added) = plan_opening(subroom.walls(), &span);
        for wall in &removed {
            subroom.remove_wall(wall);
        }
        for wall in &added {
            subroom.add_wall(*wall);
        }

        let id = event_door_id(event, index)?;
        let door = Door::transition(
            id,
            format!("train-{event}-{index}"),
            span,
            subroom.to_ref(),
            None,
        );
        subroom.add_door(id);
        building.doors_mut().insert(door)?;

        for wall in removed {
            building.log_removed_wall(event, wall);
        }
        for wall in added {
            building.log_added_wall(event, wall);
        }
        building.log_added_door(event, id);
    }
    Ok(())
}

/// Undoes every geometry change recorded for `event`.
///
/// An event with no recorded changes is a no-op.
///
/// # Errors
///
/// Returns [`EventError::RollbackFailed`] if a logged wall is no longer
/// present, and propagates lookup failures.
pub fn reset_event(building: &mut Building, event: EventId) -> Result<()> {
    let mut added = building.take_added_walls(event);
    let mut removed = building.take_removed_walls(event);
    let doors = building.take_added_doors(event);
    if added.is_empty() && removed.is_empty() && doors.is_empty() {
        return Ok(());
    }

    // A wall added for one train door and consumed again by the next door's
    // opening shows up in both logs; the two entries cancel.
    added.retain(|wall| {
        if let Some(i) = removed.iter().position(|r| r == wall) {
            removed.remove(i);
            false
        } else {
            true
        }
    });

    let entry = building.timetable_entry(event)?.clone();
    let track = find_track(building, &entry.track_start, &entry.track_end)?;

    info!(
        event = %event,
        room = track.room_id,
        subroom = track.subroom_id,
        "train departs, restoring platform walls"
    );

    let subroom = building.subroom_mut(track.room_id, track.subroom_id)?;
    for wall in &added {
        if !subroom.remove_wall(wall) {
            return Err(EventError::RollbackFailed(event).into());
        }
    }
    for wall in removed {
        subroom.add_wall(wall);
    }
    for id in doors {
        building
            .subroom_mut(track.room_id, track.subroom_id)?
            .remove_door(id);
        building.doors_mut().remove(id);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::building::{Room, SubRoom, SubroomKind};
    use crate::events::{TimetableEntry, TrainType};
    use crate::geometry::WallKind;
    use crate::math::Point2;
    use crate::platform::init_platforms;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    fn station() -> Building {
        let mut building = Building::new("station");
        let mut room = Room::new(0, "platform hall");
        let mut sub = SubRoom::new(0, 0, SubroomKind::Platform);
        sub.add_wall(Wall::new(seg(0.0, 0.0, 5.0, 0.0), WallKind::Track(1)));
        sub.add_wall(Wall::new(seg(5.0, 0.0, 10.0, 0.0), WallKind::Track(1)));
        sub.add_wall(Wall::plain(Point2::new(0.0, 0.0), Point2::new(0.0, 3.0)));
        sub.add_wall(Wall::plain(Point2::new(0.0, 3.0), Point2::new(10.0, 3.0)));
        sub.add_wall(Wall::plain(Point2::new(10.0, 3.0), Point2::new(10.0, 0.0)));
        room.add_subroom(sub).unwrap();
        building.add_room(room).unwrap();
        init_platforms(&mut building);

        building.add_train_type(TrainType {
            name: "RE".into(),
            length: 60.0,
            max_agents: 300,
            doors: vec![seg(1.0, 1.0, 3.0, 1.0), seg(6.0, 1.0, 8.0, 1.0)],
        });
        building
            .add_timetable_entry(TimetableEntry {
                id: EventId(2),
                train_type: "RE".into(),
                track_start: Point2::new(0.0, 0.0),
                track_end: Point2::new(10.0, 0.0),
                arrival: 60.0,
                departure: 120.0,
            })
            .unwrap();
        building
    }

    #[test]
    fn generated_door_ids_do_not_wrap_around() {
        assert_eq!(event_door_id(EventId(2), 1).unwrap(), DoorId(2001));
        assert!(matches!(
            event_door_id(EventId(i32::MAX), 0),
            Err(EventError::DoorIdRange(_))
        ));
        assert!(event_door_id(EventId(1), usize::MAX).is_err());
    }

    #[test]
    fn docking_opens_the_track_walls() {
        let mut building = station();
        apply_event(&mut building, EventId(2)).unwrap();

        let sub = building.subroom(0, 0).unwrap();
        assert!(!sub.walls().iter().any(|w| *w.segment() == seg(0.0, 0.0, 5.0, 0.0)));
        assert!(sub.walls().iter().any(|w| *w.segment() == seg(0.0, 0.0, 1.0, 0.0)));
        assert!(sub.walls().iter().any(|w| *w.segment() == seg(3.0, 0.0, 5.0, 0.0)));
        assert!(sub.walls().iter().any(|w| *w.segment() == seg(5.0, 0.0, 6.0, 0.0)));
        assert!(sub.walls().iter().any(|w| *w.segment() == seg(8.0, 0.0, 10.0, 0.0)));
    }

    #[test]
    fn docking_registers_one_transition_per_train_door() {
        let mut building = station();
        apply_event(&mut building, EventId(2)).unwrap();

        let first = building.doors().get(DoorId(2000)).unwrap();
        assert_eq!(first.caption(), "train-2-0");
        assert!(first.leads_outside());
        assert!(building.doors().contains(DoorId(2001)));
        assert_eq!(building.subroom(0, 0).unwrap().doors().len(), 2);
    }

    #[test]
    fn departure_restores_the_prior_geometry() {
        let mut building = station();
        let before: Vec<Wall> = building.subroom(0, 0).unwrap().walls().to_vec();

        apply_event(&mut building, EventId(2)).unwrap();
        reset_event(&mut building, EventId(2)).unwrap();

        let after = building.subroom(0, 0).unwrap().walls();
        assert_eq!(after.len(), before.len());
        for wall in &before {
            assert!(after.contains(wall));
        }
        assert!(!building.doors().contains(DoorId(2000)));
        assert!(building.subroom(0, 0).unwrap().doors().is_empty());
    }

    #[test]
    fn reset_without_apply_is_a_no_op() {
        let mut building = station();
        let before = building.subroom(0, 0).unwrap().walls().len();
        reset_event(&mut building, EventId(2)).unwrap();
        assert_eq!(building.subroom(0, 0).unwrap().walls().len(), before);
    }

    #[test]
    fn track_walls_keep_their_label_when_trimmed() {
        let mut building = station();
        apply_event(&mut building, EventId(2)).unwrap();
        let sub = building.subroom(0, 0).unwrap();
        let piece = sub
            .walls()
            .iter()
            .find(|w| *w.segment() == seg(0.0, 0.0, 1.0, 0.0))
            .unwrap();
        assert_eq!(piece.kind(), WallKind::Track(1));
    }
}
