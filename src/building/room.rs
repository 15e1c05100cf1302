use std::collections::BTreeMap;

use crate::error::LoadError;

use super::subroom::SubRoom;

/// A room: a keyed collection of subrooms with a caption.
#[derive(Debug, Clone)]
pub struct Room {
    id: i32,
    caption: String,
    subrooms: BTreeMap<i32, SubRoom>,
}

impl Room {
    #[must_use]
    pub fn new(id: i32, caption: impl Into<String>) -> Self {
        Self {
            id,
            caption: caption.into(),
            subrooms: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> i32 {
        self.id
    }

    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Adds a subroom.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::DuplicateSubroomId`] if the id is already taken
    /// within this room.
    pub fn add_subroom(&mut self, subroom: SubRoom) -> Result<(), LoadError> {
        let id = subroom.subroom_id();
        if self.subrooms.contains_key(&id) {
            return Err(LoadError::DuplicateSubroomId {
                room_id: self.id,
                subroom_id: id,
            });
        }
        self.subrooms.insert(id, subroom);
        Ok(())
    }

    #[must_use]
    pub fn subroom(&self, id: i32) -> Option<&SubRoom> {
        self.subrooms.get(&id)
    }

    #[must_use]
    pub fn subroom_mut(&mut self, id: i32) -> Option<&mut SubRoom> {
        self.subrooms.get_mut(&id)
    }

    pub fn subrooms(&self) -> impl Iterator<Item = &SubRoom> {
        self.subrooms.values()
    }

    pub fn subrooms_mut(&mut self) -> impl Iterator<Item = &mut SubRoom> {
        self.subrooms.values_mut()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::building::subroom::SubroomKind;

    #[test]
    fn duplicate_subroom_id_is_rejected() {
        let mut room = Room::new(0, "hall");
        room.add_subroom(SubRoom::new(0, 1, SubroomKind::Normal))
            .unwrap();
        assert!(matches!(
            room.add_subroom(SubRoom::new(0, 1, SubroomKind::Platform)),
            Err(LoadError::DuplicateSubroomId {
                room_id: 0,
                subroom_id: 1
            })
        ));
    }
}
