//! Platforms and the track edges that bound them.

pub mod track;

pub use track::{intersection_points, TrackHit};

use std::collections::BTreeMap;

use tracing::debug;

use crate::building::{Building, SubroomKind};
use crate::error::GeometryError;
use crate::geometry::Wall;
use crate::math::{nearly_equal, Point2};

/// A platform: one subroom of kind [`SubroomKind::Platform`] with its track
/// walls grouped by track number.
#[derive(Debug, Clone)]
pub struct Platform {
    pub id: i32,
    pub room_id: i32,
    pub subroom_id: i32,
    pub tracks: BTreeMap<u32, Vec<Wall>>,
}

/// Where a scheduled train's track lives.
#[derive(Debug, Clone)]
pub struct TrackLocation {
    pub room_id: i32,
    pub subroom_id: i32,
    pub walls: Vec<Wall>,
}

/// Collects every platform subroom's track walls into the building's
/// platform table. Ids are assigned in subroom order.
pub fn init_platforms(building: &mut Building) {
    let mut platforms = Vec::new();
    let mut next_id = 0;
    for (room_id, subroom_id) in building.subroom_keys() {
        let Ok(subroom) = building.subroom(room_id, subroom_id) else {
            continue;
        };
        if subroom.kind() != SubroomKind::Platform {
            continue;
        }
        let mut tracks: BTreeMap<u32, Vec<Wall>> = BTreeMap::new();
        for wall in subroom.walls() {
            if let Some(n) = wall.kind().track_index() {
                tracks.entry(n).or_default().push(*wall);
            }
        }
        debug!(
            platform = next_id,
            room = room_id,
            subroom = subroom_id,
            tracks = tracks.len(),
            "registered platform"
        );
        platforms.push(Platform {
            id: next_id,
            room_id,
            subroom_id,
            tracks,
        });
        next_id += 1;
    }
    for platform in platforms {
        building.insert_platform(platform);
    }
}

/// Finds the track bounded by `start` and `end`.
///
/// A track matches when exactly two of its wall endpoints coincide with the
/// given bounds, one for each.
///
/// # Errors
///
/// Returns [`GeometryError::TrackNotFound`] if no registered track matches.
pub fn find_track(
    building: &Building,
    start: &Point2,
    end: &Point2,
) -> Result<TrackLocation, GeometryError> {
    for platform in building.platforms().values() {
        for walls in platform.tracks.values() {
            let matches = walls
                .iter()
                .flat_map(|w| [w.p1(), w.p2()])
                .filter(|p| nearly_equal(p, start) || nearly_equal(p, end))
                .count();
            if matches == 2 {
                return Ok(TrackLocation {
                    room_id: platform.room_id,
                    subroom_id: platform.subroom_id,
                    walls: walls.clone(),
                });
            }
        }
    }
    Err(GeometryError::TrackNotFound {
        x1: start.x,
        y1: start.y,
        x2: end.x,
        y2: end.y,
    })
}
