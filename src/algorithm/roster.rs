//! Ordered roster of uniquely named entities

use std::collections::HashMap;
use std::fmt;

use crate::io::error::{Result, SeatError};

/// Dense identifier for a roster entry, equal to its position in the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub usize);

impl EntityId {
    /// Position of the entity in roster order
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Names in placement order with reverse lookup
#[derive(Debug, Clone, Default)]
pub struct Roster {
    names: Vec<String>,
    ids: HashMap<String, EntityId>,
}

impl Roster {
    /// Build a roster, rejecting repeated names
    ///
    /// # Errors
    ///
    /// Returns `SeatError::DuplicateEntity` for the first name seen twice
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut roster = Self::default();
        for name in names {
            let name = name.into();
            if roster.ids.contains_key(&name) {
                return Err(SeatError::DuplicateEntity { name });
            }
            roster.ids.insert(name.clone(), EntityId(roster.names.len()));
            roster.names.push(name);
        }
        Ok(roster)
    }

    /// Number of entities
    pub const fn len(&self) -> usize {
        self.names.len()
    }

    /// Check whether the roster is empty
    pub const fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolve a name to its identifier
    pub fn id_of(&self, name: &str) -> Option<EntityId> {
        self.ids.get(name).copied()
    }

    /// Resolve a name, failing for names outside the roster
    ///
    /// # Errors
    ///
    /// Returns `SeatError::UnknownEntity` when the name is not on the roster
    pub fn require(&self, name: &str) -> Result<EntityId> {
        self.id_of(name).ok_or_else(|| SeatError::UnknownEntity {
            name: name.to_string(),
        })
    }

    /// Name of an entity
    pub fn name(&self, id: EntityId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    /// Entity at a roster position
    pub fn get(&self, index: usize) -> Option<EntityId> {
        (index < self.names.len()).then_some(EntityId(index))
    }

    /// Names in roster order
    pub fn names(&self) -> &[String] {
        &self.names
    }
}
