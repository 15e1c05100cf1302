use std::fmt;

use super::Segment;

/// Stable integer identifier of a door, unique across the whole building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DoorId(pub i32);

impl fmt::Display for DoorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Location of one side of a door.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubroomRef {
    pub room_id: i32,
    pub subroom_id: i32,
}

impl SubroomRef {
    #[must_use]
    pub fn new(room_id: i32, subroom_id: i32) -> Self {
        Self { room_id, subroom_id }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorKind {
    /// Connects two subrooms (the same subroom twice for an internal opening).
    Crossing,
    /// Connects a subroom to another room or, with no second side, outside.
    Transition,
}

/// A passable boundary segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Door {
    id: DoorId,
    caption: String,
    kind: DoorKind,
    segment: Segment,
    side1: SubroomRef,
    side2: Option<SubroomRef>,
}

impl Door {
    #[must_use]
    pub fn crossing(
        id: DoorId,
        caption: impl Into<String>,
        segment: Segment,
        side1: SubroomRef,
        side2: SubroomRef,
    ) -> Self {
        Self {
            id,
            caption: caption.into(),
            kind: DoorKind::Crossing,
            segment,
            side1,
            side2: Some(side2),
        }
    }

    #[must_use]
    pub fn transition(
        id: DoorId,
        caption: impl Into<String>,
        segment: Segment,
        side1: SubroomRef,
        side2: Option<SubroomRef>,
    ) -> Self {
        Self {
            id,
            caption: caption.into(),
            kind: DoorKind::Transition,
            segment,
            side1,
            side2,
        }
    }

    #[must_use]
    pub fn id(&self) -> DoorId {
        self.id
    }

    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    #[must_use]
    pub fn kind(&self) -> DoorKind {
        self.kind
    }

    #[must_use]
    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    #[must_use]
    pub fn side1(&self) -> SubroomRef {
        self.side1
    }

    #[must_use]
    pub fn side2(&self) -> Option<SubroomRef> {
        self.side2
    }

    /// A transition with no second side leads out of the building.
    #[must_use]
    pub fn leads_outside(&self) -> bool {
        self.kind == DoorKind::Transition && self.side2.is_none()
    }
}
