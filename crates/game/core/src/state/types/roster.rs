use super::{Entity, EntityId};
use crate::state::StateError;

/// Ordered collection of every entity taking part in a dispatch.
///
/// Iteration follows insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RosterFields")
)]
pub struct Roster {
    entities: Vec<Entity>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster, rejecting duplicate ids.
    pub fn from_entities(entities: impl IntoIterator<Item = Entity>) -> Result<Self, StateError> {
        let mut roster = Self::new();
        for entity in entities {
            roster.insert(entity)?;
        }
        Ok(roster)
    }

    pub fn insert(&mut self, entity: Entity) -> Result<(), StateError> {
        if self.contains(entity.id()) {
            return Err(StateError::DuplicateEntity(entity.id()));
        }
        self.entities.push(entity);
        Ok(())
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.iter().any(|entity| entity.id() == id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id() == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|entity| entity.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.iter().map(Entity::id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RosterFields {
    entities: Vec<Entity>,
}

#[cfg(feature = "serde")]
impl TryFrom<RosterFields> for Roster {
    type Error = StateError;

    fn try_from(fields: RosterFields) -> Result<Self, Self::Error> {
        Self::from_entities(fields.entities)
    }
}
