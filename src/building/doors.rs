use std::collections::BTreeMap;

use slotmap::SlotMap;

use crate::error::LoadError;
use crate::geometry::{Door, DoorId, DoorKind};

slotmap::new_key_type! {
    /// Arena key of a door in the registry.
    pub struct DoorKey;
}

/// Central arena that owns every door in the building.
///
/// All other structures reference doors by their stable [`DoorId`] and
/// resolve through this registry, so a door is never owned twice. Iteration
/// is in id order for deterministic output.
#[derive(Debug, Default)]
pub struct DoorStore {
    doors: SlotMap<DoorKey, Door>,
    by_id: BTreeMap<DoorId, DoorKey>,
}

impl DoorStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a door.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::DuplicateDoorId`] if the id is already taken.
    pub fn insert(&mut self, door: Door) -> Result<DoorKey, LoadError> {
        let id = door.id();
        if self.by_id.contains_key(&id) {
            return Err(LoadError::DuplicateDoorId(id));
        }
        let key = self.doors.insert(door);
        self.by_id.insert(id, key);
        Ok(key)
    }

    #[must_use]
    pub fn get(&self, id: DoorId) -> Option<&Door> {
        self.by_id.get(&id).and_then(|key| self.doors.get(*key))
    }

    #[must_use]
    pub fn get_mut(&mut self, id: DoorId) -> Option<&mut Door> {
        self.by_id
            .get(&id)
            .and_then(|key| self.doors.get_mut(*key))
    }

    /// Removes and returns the door with the given id, if present.
    pub fn remove(&mut self, id: DoorId) -> Option<Door> {
        let key = self.by_id.remove(&id)?;
        self.doors.remove(key)
    }

    #[must_use]
    pub fn contains(&self, id: DoorId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// First door whose caption matches, in id order.
    #[must_use]
    pub fn by_caption(&self, caption: &str) -> Option<&Door> {
        self.iter().find(|door| door.caption() == caption)
    }

    /// All doors in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Door> {
        self.by_id.values().filter_map(|key| self.doors.get(*key))
    }

    pub fn crossings(&self) -> impl Iterator<Item = &Door> {
        self.iter().filter(|d| d.kind() == DoorKind::Crossing)
    }

    pub fn transitions(&self) -> impl Iterator<Item = &Door> {
        self.iter().filter(|d| d.kind() == DoorKind::Transition)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
