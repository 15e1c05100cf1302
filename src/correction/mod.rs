//! Geometry correction pass.
//!
//! Floor plans drawn by hand routinely contain walls that run straight
//! across door openings or past the corner they should stop at. This pass
//! cuts openings out of walls, splits over-long walls where other boundary
//! elements cross them, and keeps only the pieces that actually connect to
//! the rest of the boundary.

pub mod doors;
pub mod select;
pub mod split;

pub use doors::resolve_overlapping_doors;
pub use select::replace_big_wall;
pub use split::{split_point, split_wall};

use tracing::{debug, info};

use crate::building::Building;
use crate::error::{LoadError, Result};
use crate::geometry::Wall;

/// Repairs every subroom of the building in place.
///
/// Returns whether any geometry changed, so callers can re-export the
/// corrected floor plan.
///
/// # Errors
///
/// Returns [`LoadError::UnresolvedWallSplit`] when a split wall has no piece
/// connected to the remaining boundary, and propagates lookup failures.
pub fn correct_building(building: &mut Building) -> Result<bool> {
    let mut changed = false;
    for (room_id, subroom_id) in building.subroom_keys() {
        let doors = building.door_segments_for(room_id, subroom_id);
        let subroom = building.subroom_mut(room_id, subroom_id)?;

        if resolve_overlapping_doors(subroom, &doors) {
            changed = true;
        }

        // Walls already present before splitting; each may turn out to be an
        // over-long one that needs to be cut down.
        let originals: Vec<Wall> = subroom.walls().to_vec();
        for big in originals {
            // Split to a fixpoint: pieces can themselves be cut by further
            // walls or doors.
            let mut pieces = split_wall(subroom.walls(), &doors, &big);
            if pieces.is_empty() {
                continue;
            }
            loop {
                let mut next = Vec::with_capacity(pieces.len());
                let mut split_any = false;
                for piece in &pieces {
                    let sub_pieces = split_wall(subroom.walls(), &doors, piece);
                    if sub_pieces.is_empty() {
                        next.push(*piece);
                    } else {
                        split_any = true;
                        next.extend(sub_pieces);
                    }
                }
                pieces = next;
                if !split_any {
                    break;
                }
            }

            // Repeated cuts produce the same sub-segment more than once.
            let mut deduped: Vec<Wall> = Vec::with_capacity(pieces.len());
            for piece in pieces {
                if !deduped.contains(&piece) {
                    deduped.push(piece);
                }
            }

            debug!(
                room = room_id,
                subroom = subroom_id,
                wall = %big,
                pieces = deduped.len(),
                "over-long wall split into pieces"
            );

            if !subroom.remove_wall(&big) {
                return Err(LoadError::WallNotFound {
                    room_id,
                    subroom_id,
                    wall: big.to_string(),
                }
                .into());
            }
            replace_big_wall(subroom, &doors, &big, &deduped)?;
            changed = true;
        }
    }

    if changed {
        info!("floor plan geometry was corrected");
    }
    Ok(changed)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::building::{Room, SubRoom, SubroomKind};
    use crate::geometry::{Door, DoorId, Segment, SubroomRef};
    use crate::math::Point2;

    fn wall(x1: f64, y1: f64, x2: f64, y2: f64) -> Wall {
        Wall::plain(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Unit square room whose bottom wall is drawn across a door opening.
    fn building_with_overlapping_door() -> Building {
        let mut building = Building::new("test");
        let mut room = Room::new(0, "hall");
        let mut sub = SubRoom::new(0, 0, SubroomKind::Normal);
        sub.add_wall(wall(0.0, 0.0, 10.0, 0.0));
        sub.add_wall(wall(10.0, 0.0, 10.0, 10.0));
        sub.add_wall(wall(10.0, 10.0, 0.0, 10.0));
        sub.add_wall(wall(0.0, 10.0, 0.0, 0.0));
        sub.add_door(DoorId(1));
        room.add_subroom(sub).unwrap();
        building.add_room(room).unwrap();
        building
            .doors_mut()
            .insert(Door::transition(
                DoorId(1),
                "exit",
                Segment::new(Point2::new(2.0, 0.0), Point2::new(4.0, 0.0)),
                SubroomRef::new(0, 0),
                None,
            ))
            .unwrap();
        building
    }

    #[test]
    fn door_opening_is_cut_out_of_the_wall() {
        let mut building = building_with_overlapping_door();
        assert!(correct_building(&mut building).unwrap());
        let sub = building.subroom(0, 0).unwrap();
        assert!(sub.walls().contains(&wall(0.0, 0.0, 2.0, 0.0)));
        assert!(sub.walls().contains(&wall(4.0, 0.0, 10.0, 0.0)));
        assert!(!sub.walls().contains(&wall(0.0, 0.0, 10.0, 0.0)));
    }

    #[test]
    fn correction_is_idempotent() {
        let mut building = building_with_overlapping_door();
        assert!(correct_building(&mut building).unwrap());
        let after_first: Vec<Wall> = building.subroom(0, 0).unwrap().walls().to_vec();
        assert!(!correct_building(&mut building).unwrap());
        assert_eq!(building.subroom(0, 0).unwrap().walls(), after_first);
    }

    #[test]
    fn overshooting_wall_is_trimmed_to_the_connected_piece() {
        // Square room whose left wall overshoots above the top corner.
        let mut building = Building::new("test");
        let mut room = Room::new(0, "hall");
        let mut sub = SubRoom::new(0, 0, SubroomKind::Normal);
        sub.add_wall(wall(0.0, -2.0, 0.0, 10.0));
        sub.add_wall(wall(-5.0, 0.0, 5.0, 0.0));
        sub.add_wall(wall(-5.0, 0.0, -5.0, 8.0));
        sub.add_wall(wall(-5.0, 8.0, 0.0, 8.0));
        room.add_subroom(sub).unwrap();
        building.add_room(room).unwrap();

        assert!(correct_building(&mut building).unwrap());
        let sub = building.subroom(0, 0).unwrap();
        // The overshooting ends beyond the crossings are gone.
        assert!(!sub.walls().contains(&wall(0.0, -2.0, 0.0, 10.0)));
        assert!(sub.walls().contains(&wall(0.0, 0.0, 0.0, 8.0)));
    }

    #[test]
    fn clean_geometry_is_left_alone() {
        let mut building = Building::new("test");
        let mut room = Room::new(0, "hall");
        let mut sub = SubRoom::new(0, 0, SubroomKind::Normal);
        sub.add_wall(wall(0.0, 0.0, 4.0, 0.0));
        sub.add_wall(wall(4.0, 0.0, 4.0, 4.0));
        sub.add_wall(wall(4.0, 4.0, 0.0, 4.0));
        sub.add_wall(wall(0.0, 4.0, 0.0, 0.0));
        room.add_subroom(sub).unwrap();
        building.add_room(room).unwrap();

        assert!(!correct_building(&mut building).unwrap());
        assert_eq!(building.subroom(0, 0).unwrap().walls().len(), 4);
    }
}
