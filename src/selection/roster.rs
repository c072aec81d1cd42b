//! In-memory rosters handed to the workflow.

use crate::framework::ActorEntity;

/// An immutable snapshot of one table, in creation order.
///
/// Rosters are built from what the store returned, so every entry already
/// carries its identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster<T> {
    entries: Vec<T>,
}

impl<T: ActorEntity> Roster<T> {
    pub fn new(entries: Vec<T>) -> Self {
        Self { entries }
    }

    /// Linear scan in roster order; the first entry whose key equals `id` wins.
    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: ActorEntity> From<Vec<T>> for Roster<T> {
    fn from(entries: Vec<T>) -> Self {
        Self::new(entries)
    }
}
