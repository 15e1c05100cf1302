use crate::geometry::{DoorId, SubroomRef, Wall};
use crate::math::polygon_2d::{point_in_polygon, signed_area_2d};
use crate::math::Point2;

/// Usage class of a subroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubroomKind {
    #[default]
    Normal,
    /// Subroom bounded on one or more sides by train track edges.
    Platform,
}

/// The smallest navigable polygonal area.
///
/// Owns its wall set; doors are non-owning references into the building door
/// registry. After correction the walls and doors form one simple closed
/// boundary, captured in `polygon`.
#[derive(Debug, Clone)]
pub struct SubRoom {
    room_id: i32,
    subroom_id: i32,
    kind: SubroomKind,
    walls: Vec<Wall>,
    doors: Vec<DoorId>,
    neighbors: Vec<SubroomRef>,
    polygon: Vec<Point2>,
}

impl SubRoom {
    #[must_use]
    pub fn new(room_id: i32, subroom_id: i32, kind: SubroomKind) -> Self {
        Self {
            room_id,
            subroom_id,
            kind,
            walls: Vec::new(),
            doors: Vec::new(),
            neighbors: Vec::new(),
            polygon: Vec::new(),
        }
    }

    #[must_use]
    pub fn room_id(&self) -> i32 {
        self.room_id
    }

    #[must_use]
    pub fn subroom_id(&self) -> i32 {
        self.subroom_id
    }

    #[must_use]
    pub fn to_ref(&self) -> SubroomRef {
        SubroomRef::new(self.room_id, self.subroom_id)
    }

    #[must_use]
    pub fn kind(&self) -> SubroomKind {
        self.kind
    }

    #[must_use]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Adds a wall unless an equal one is already present.
    ///
    /// Returns whether the wall set changed.
    pub fn add_wall(&mut self, wall: Wall) -> bool {
        if self.walls.contains(&wall) {
            return false;
        }
        self.walls.push(wall);
        true
    }

    /// Removes the first wall equal to `wall`. Returns whether one was found.
    pub fn remove_wall(&mut self, wall: &Wall) -> bool {
        match self.walls.iter().position(|w| w == wall) {
            Some(idx) => {
                self.walls.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Replaces the whole wall set (used by the correction pass).
    pub fn set_walls(&mut self, walls: Vec<Wall>) {
        self.walls = walls;
    }

    #[must_use]
    pub fn doors(&self) -> &[DoorId] {
        &self.doors
    }

    pub fn add_door(&mut self, id: DoorId) -> bool {
        if self.doors.contains(&id) {
            return false;
        }
        self.doors.push(id);
        true
    }

    pub fn remove_door(&mut self, id: DoorId) -> bool {
        match self.doors.iter().position(|d| *d == id) {
            Some(idx) => {
                self.doors.remove(idx);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn neighbors(&self) -> &[SubroomRef] {
        &self.neighbors
    }

    /// Records an adjacent subroom; self-references and duplicates are ignored.
    pub fn add_neighbor(&mut self, other: SubroomRef) {
        if other == self.to_ref() || self.neighbors.contains(&other) {
            return;
        }
        self.neighbors.push(other);
    }

    /// The derived closed boundary ring, empty until correction has run.
    #[must_use]
    pub fn polygon(&self) -> &[Point2] {
        &self.polygon
    }

    pub fn set_polygon(&mut self, polygon: Vec<Point2>) {
        self.polygon = polygon;
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area_2d(&self.polygon).abs()
    }

    /// Whether `p` lies inside the derived boundary polygon.
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        point_in_polygon(p, &self.polygon)
    }
}
