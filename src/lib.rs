pub mod building;
pub mod config;
pub mod correction;
pub mod error;
pub mod events;
pub mod export;
pub mod geometry;
pub mod math;
pub mod platform;
pub mod topology;

pub use building::{Building, Room, SubRoom, SubroomKind};
pub use config::GeometryConfig;
pub use error::{ConcourseError, Result};
pub use events::{apply_event, reset_event, EventId, TimetableEntry, TrainType};
pub use geometry::{Door, DoorId, DoorKind, Goal, Segment, SubroomRef, Wall, WallKind};

use tracing::info;

/// Runs the whole preparation pipeline on a freshly loaded building.
///
/// Corrects the wall geometry, derives each subroom's closed boundary
/// polygon, links neighboring subrooms through their doors, attaches inside
/// goals, and registers platforms. If anything was corrected and the config
/// asks for it, the repaired plan is written back out.
///
/// # Errors
///
/// Fails on any unrepairable inconsistency: an unresolvable wall split, a
/// boundary that does not close, or a duplicate identifier.
pub fn prepare_building(building: &mut Building, config: &GeometryConfig) -> Result<()> {
    let changed = correction::correct_building(building)?;

    for (room_id, subroom_id) in building.subroom_keys() {
        let doors = building.door_segments_for(room_id, subroom_id);
        let subroom = building.subroom_mut(room_id, subroom_id)?;
        let ring = topology::derive_polygon(subroom, &doors)?;
        subroom.set_polygon(ring);
    }

    topology::link_neighbors(building);
    building.init_inside_goals()?;
    platform::init_platforms(building);

    if changed && config.write_corrected {
        export::save_geometry(building, &config.corrected_path)?;
    }
    info!(caption = building.caption(), "building prepared");
    Ok(())
}
