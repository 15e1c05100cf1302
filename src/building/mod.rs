pub mod doors;
pub mod room;
pub mod subroom;

pub use doors::{DoorKey, DoorStore};
pub use room::Room;
pub use subroom::{SubRoom, SubroomKind};

use std::collections::BTreeMap;

use tracing::warn;

use crate::error::LoadError;
use crate::events::{EventId, TimetableEntry, TrainType};
use crate::geometry::{Door, DoorId, Goal, Segment, SubroomRef, Wall};
use crate::math::polygon_2d::bounding_box;
use crate::math::Point2;
use crate::platform::Platform;

/// The whole built environment: rooms, the door registry, platforms, goals,
/// the train schedule, and the per-event undo logs.
///
/// Geometry is immutable after [`crate::prepare_building`] except through
/// the event-scoped transactional mutation in [`crate::events`].
#[derive(Debug, Default)]
pub struct Building {
    caption: String,
    rooms: BTreeMap<i32, Room>,
    doors: DoorStore,
    goals: BTreeMap<i32, Goal>,
    platforms: BTreeMap<i32, Platform>,
    train_types: BTreeMap<String, TrainType>,
    timetable: BTreeMap<EventId, TimetableEntry>,
    added_walls: BTreeMap<EventId, Vec<Wall>>,
    removed_walls: BTreeMap<EventId, Vec<Wall>>,
    added_doors: BTreeMap<EventId, Vec<DoorId>>,
}

impl Building {
    #[must_use]
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    // --- Rooms ---

    /// Adds a room.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::DuplicateRoomId`] if the id is already taken.
    pub fn add_room(&mut self, room: Room) -> Result<(), LoadError> {
        let id = room.id();
        if self.rooms.contains_key(&id) {
            return Err(LoadError::DuplicateRoomId(id));
        }
        self.rooms.insert(id, room);
        Ok(())
    }

    /// Looks up a room by id.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::RoomNotFound`] if absent.
    pub fn room(&self, id: i32) -> Result<&Room, LoadError> {
        self.rooms.get(&id).ok_or(LoadError::RoomNotFound(id))
    }

    /// Mutable room lookup.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::RoomNotFound`] if absent.
    pub fn room_mut(&mut self, id: i32) -> Result<&mut Room, LoadError> {
        self.rooms.get_mut(&id).ok_or(LoadError::RoomNotFound(id))
    }

    #[must_use]
    pub fn room_by_caption(&self, caption: &str) -> Option<&Room> {
        self.rooms.values().find(|r| r.caption() == caption)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn rooms_mut(&mut self) -> impl Iterator<Item = &mut Room> {
        self.rooms.values_mut()
    }

    // --- Subrooms ---

    /// Looks up a subroom by room and subroom id.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::RoomNotFound`] or [`LoadError::SubroomNotFound`].
    pub fn subroom(&self, room_id: i32, subroom_id: i32) -> Result<&SubRoom, LoadError> {
        self.room(room_id)?
            .subroom(subroom_id)
            .ok_or(LoadError::SubroomNotFound {
                room_id,
                subroom_id,
            })
    }

    /// Mutable subroom lookup.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::RoomNotFound`] or [`LoadError::SubroomNotFound`].
    pub fn subroom_mut(
        &mut self,
        room_id: i32,
        subroom_id: i32,
    ) -> Result<&mut SubRoom, LoadError> {
        self.room_mut(room_id)?
            .subroom_mut(subroom_id)
            .ok_or(LoadError::SubroomNotFound {
                room_id,
                subroom_id,
            })
    }

    /// All `(room_id, subroom_id)` pairs, in id order.
    #[must_use]
    pub fn subroom_keys(&self) -> Vec<(i32, i32)> {
        self.rooms
            .values()
            .flat_map(|room| room.subrooms().map(|sub| (room.id(), sub.subroom_id())))
            .collect()
    }

    // --- Doors ---

    #[must_use]
    pub fn doors(&self) -> &DoorStore {
        &self.doors
    }

    pub fn doors_mut(&mut self) -> &mut DoorStore {
        &mut self.doors
    }

    /// Segments of every door referenced by the given subroom, resolved
    /// through the registry. Dangling ids are skipped.
    #[must_use]
    pub fn door_segments_for(&self, room_id: i32, subroom_id: i32) -> Vec<Segment> {
        let Ok(subroom) = self.subroom(room_id, subroom_id) else {
            return Vec::new();
        };
        subroom
            .doors()
            .iter()
            .filter_map(|id| self.doors.get(*id))
            .map(|door| *door.segment())
            .collect()
    }

    // --- Goals ---

    /// Registers a goal.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::DuplicateGoalId`] if the id is already taken.
    pub fn add_goal(&mut self, goal: Goal) -> Result<(), LoadError> {
        let id = goal.id();
        if self.goals.contains_key(&id) {
            return Err(LoadError::DuplicateGoalId(id));
        }
        self.goals.insert(id, goal);
        Ok(())
    }

    pub fn goals(&self) -> impl Iterator<Item = &Goal> {
        self.goals.values()
    }

    /// Attaches each inside goal's centre crossing to its subroom and to the
    /// door registry. A goal whose subroom cannot be resolved (or does not
    /// contain the goal centre) is left unattached with a warning.
    ///
    /// Must run after boundary polygons have been derived.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::DuplicateDoorId`] if a goal's centre-door id
    /// collides with an existing door.
    pub fn init_inside_goals(&mut self) -> Result<(), LoadError> {
        let goals: Vec<Goal> = self.goals.values().cloned().collect();
        for goal in goals {
            if goal.is_outside() {
                continue;
            }
            let matched = self
                .room(goal.room_id())
                .ok()
                .and_then(|room| room.subroom(goal.subroom_id()))
                .is_some_and(|sub| sub.contains_point(&goal.centre()));
            if matched {
                let side = SubroomRef::new(goal.room_id(), goal.subroom_id());
                let door = Door::crossing(
                    goal.door_id(),
                    format!("goal-{}", goal.id()),
                    *goal.door_segment(),
                    side,
                    side,
                );
                self.doors.insert(door)?;
                if let Ok(sub) = self.subroom_mut(goal.room_id(), goal.subroom_id()) {
                    sub.add_door(goal.door_id());
                }
            } else {
                warn!(
                    goal = goal.id(),
                    room = goal.room_id(),
                    subroom = goal.subroom_id(),
                    "goal has no matching subroom and is not outside; leaving it unattached"
                );
            }
        }
        Ok(())
    }

    // --- Platforms ---

    /// Registers a platform, overwriting (with a warning) an existing one.
    pub fn insert_platform(&mut self, platform: Platform) {
        if self.platforms.contains_key(&platform.id) {
            warn!(platform = platform.id, "duplicate platform, overwriting");
        }
        self.platforms.insert(platform.id, platform);
    }

    #[must_use]
    pub fn platforms(&self) -> &BTreeMap<i32, Platform> {
        &self.platforms
    }

    // --- Train schedule ---

    /// Registers a train type, overwriting (with a warning) an existing one.
    pub fn add_train_type(&mut self, train_type: TrainType) {
        if self.train_types.contains_key(&train_type.name) {
            warn!(train_type = %train_type.name, "duplicate train type, overwriting");
        }
        self.train_types.insert(train_type.name.clone(), train_type);
    }

    /// Looks up a train type by name.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::TrainTypeNotFound`] if absent.
    pub fn train_type(&self, name: &str) -> Result<&TrainType, LoadError> {
        self.train_types
            .get(name)
            .ok_or_else(|| LoadError::TrainTypeNotFound(name.to_owned()))
    }

    /// Adds a timetable entry, repairing a backwards arrival/departure pair.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::DuplicateEvent`] if the id is already taken.
    pub fn add_timetable_entry(&mut self, entry: TimetableEntry) -> Result<(), LoadError> {
        let entry = entry.normalized();
        let id = entry.id;
        if self.timetable.contains_key(&id) {
            return Err(LoadError::DuplicateEvent(id));
        }
        self.timetable.insert(id, entry);
        Ok(())
    }

    /// Looks up a timetable entry.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::EventNotFound`] if absent.
    pub fn timetable_entry(&self, id: EventId) -> Result<&TimetableEntry, LoadError> {
        self.timetable.get(&id).ok_or(LoadError::EventNotFound(id))
    }

    pub fn timetable(&self) -> impl Iterator<Item = &TimetableEntry> {
        self.timetable.values()
    }

    // --- Event undo logs ---

    pub fn log_added_wall(&mut self, event: EventId, wall: Wall) {
        self.added_walls.entry(event).or_default().push(wall);
    }

    pub fn log_removed_wall(&mut self, event: EventId, wall: Wall) {
        self.removed_walls.entry(event).or_default().push(wall);
    }

    pub fn log_added_door(&mut self, event: EventId, door: DoorId) {
        self.added_doors.entry(event).or_default().push(door);
    }

    #[must_use]
    pub fn added_walls(&self, event: EventId) -> &[Wall] {
        self.added_walls.get(&event).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn removed_walls(&self, event: EventId) -> &[Wall] {
        self.removed_walls.get(&event).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn added_doors(&self, event: EventId) -> &[DoorId] {
        self.added_doors.get(&event).map_or(&[], Vec::as_slice)
    }

    pub(crate) fn take_added_walls(&mut self, event: EventId) -> Vec<Wall> {
        self.added_walls.remove(&event).unwrap_or_default()
    }

    pub(crate) fn take_removed_walls(&mut self, event: EventId) -> Vec<Wall> {
        self.removed_walls.remove(&event).unwrap_or_default()
    }

    pub(crate) fn take_added_doors(&mut self, event: EventId) -> Vec<DoorId> {
        self.added_doors.remove(&event).unwrap_or_default()
    }

    // --- Queries ---

    /// Corner vertices of the geometry's outer bounding rectangle, counter
    /// clockwise starting at the minimum corner.
    #[must_use]
    pub fn bounding_vertices(&self) -> Vec<Point2> {
        let points: Vec<Point2> = self
            .rooms
            .values()
            .flat_map(Room::subrooms)
            .flat_map(|sub| sub.walls())
            .flat_map(|w| [w.p1(), w.p2()])
            .collect();
        match bounding_box(&points) {
            Some((min, max)) => vec![
                Point2::new(min.x, min.y),
                Point2::new(max.x, min.y),
                Point2::new(max.x, max.y),
                Point2::new(min.x, max.y),
            ],
            None => Vec::new(),
        }
    }
}
