use crate::math::Point2;

use super::{DoorId, Segment};

/// A target area inside the building.
///
/// The centre crossing it exposes to routing is owned by the building door
/// registry; the goal stores only the id and the segment needed to create it.
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    id: i32,
    room_id: i32,
    subroom_id: i32,
    centre: Point2,
    door_id: DoorId,
    door_segment: Segment,
}

impl Goal {
    #[must_use]
    pub fn new(
        id: i32,
        room_id: i32,
        subroom_id: i32,
        centre: Point2,
        door_id: DoorId,
        door_segment: Segment,
    ) -> Self {
        Self {
            id,
            room_id,
            subroom_id,
            centre,
            door_id,
            door_segment,
        }
    }

    #[must_use]
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Room the goal claims to lie in; `-1` marks an outside goal.
    #[must_use]
    pub fn room_id(&self) -> i32 {
        self.room_id
    }

    #[must_use]
    pub fn subroom_id(&self) -> i32 {
        self.subroom_id
    }

    #[must_use]
    pub fn centre(&self) -> Point2 {
        self.centre
    }

    #[must_use]
    pub fn door_id(&self) -> DoorId {
        self.door_id
    }

    #[must_use]
    pub fn door_segment(&self) -> &Segment {
        &self.door_segment
    }

    #[must_use]
    pub fn is_outside(&self) -> bool {
        self.room_id == -1
    }
}
