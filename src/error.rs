use thiserror::Error;

use crate::events::EventId;
use crate::geometry::DoorId;

/// Top-level error type for the Concourse geometry engine.
#[derive(Debug, Error)]
pub enum ConcourseError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Event(#[from] EventError),

    #[error("geometry export failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Fatal conditions while building or repairing the static floor plan.
///
/// Any of these aborts the whole load; there is no partial acceptance.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("duplicate door id {0}")]
    DuplicateDoorId(DoorId),

    #[error("duplicate room id {0}")]
    DuplicateRoomId(i32),

    #[error("duplicate subroom id {subroom_id} in room {room_id}")]
    DuplicateSubroomId { room_id: i32, subroom_id: i32 },

    #[error("duplicate goal id {0}")]
    DuplicateGoalId(i32),

    #[error("duplicate timetable entry {0}")]
    DuplicateEvent(EventId),

    #[error("room {0} not found")]
    RoomNotFound(i32),

    #[error("subroom {subroom_id} in room {room_id} not found")]
    SubroomNotFound { room_id: i32, subroom_id: i32 },

    #[error("no usable replacement piece for wall {wall} in room {room_id} subroom {subroom_id}")]
    UnresolvedWallSplit {
        room_id: i32,
        subroom_id: i32,
        wall: String,
    },

    #[error("wall {wall} not found in room {room_id} subroom {subroom_id}")]
    WallNotFound {
        room_id: i32,
        subroom_id: i32,
        wall: String,
    },

    #[error("timetable entry {0} not found")]
    EventNotFound(EventId),

    #[error("train type {0:?} not found")]
    TrainTypeNotFound(String),
}

/// Structural inconsistencies detected in otherwise loadable geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length segment")]
    ZeroLength,

    #[error("boundary of room {room_id} subroom {subroom_id} does not close into a polygon")]
    OpenBoundary { room_id: i32, subroom_id: i32 },

    #[error("train door {door_index} intersects the track {found} times, expected 2")]
    WrongIntersectionCount { door_index: usize, found: usize },

    #[error("no track bounded by ({x1}, {y1}) and ({x2}, {y2})")]
    TrackNotFound { x1: f64, y1: f64, x2: f64, y2: f64 },

    #[error("triangulation failed: {0}")]
    Triangulation(String),
}

/// Errors raised by the transactional event mutator.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("rollback for event {0} could not restore the prior geometry")]
    RollbackFailed(EventId),

    #[error("generated door ids for event {0} exceed the id range")]
    DoorIdRange(EventId),
}

/// Convenience type alias for results using [`ConcourseError`].
pub type Result<T> = std::result::Result<T, ConcourseError>;
