//! Ordered in-memory record collection with last-writer-wins updates.

use relaydesk_core::{Entity, EntityId};

/// Result of an upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    Replaced,
}

/// In-memory collection of one entity type.
///
/// Insertion order is preserved (it is the display order). There is a single
/// writer per session, so updates simply replace the stored record.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Entity> Collection<T> {
    pub fn get(&self, id: &EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: &EntityId) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Replace the record with the same id, or append it.
    pub fn upsert(&mut self, item: T) -> Upsert {
        match self.items.iter().position(|existing| existing.id() == item.id()) {
            Some(idx) => {
                self.items[idx] = item;
                Upsert::Replaced
            }
            None => {
                self.items.push(item);
                Upsert::Inserted
            }
        }
    }

    pub fn remove(&mut self, id: &EntityId) -> Option<T> {
        let idx = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(idx))
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> core::ops::Deref for Collection<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: EntityId,
        value: u32,
    }

    impl Entity for Row {
        fn id(&self) -> &EntityId {
            &self.id
        }
    }

    fn row(id: &str, value: u32) -> Row {
        Row { id: EntityId::new(id), value }
    }

    #[test]
    fn upsert_replaces_in_place_and_keeps_order() {
        let mut rows = Collection::from(vec![row("a", 1), row("b", 2)]);
        assert_eq!(rows.upsert(row("a", 10)), Upsert::Replaced);
        assert_eq!(rows.upsert(row("c", 3)), Upsert::Inserted);

        let values: Vec<u32> = rows.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![10, 2, 3]);
    }

    #[test]
    fn last_writer_wins() {
        let mut rows = Collection::new();
        rows.upsert(row("a", 1));
        rows.upsert(row("a", 2));
        rows.upsert(row("a", 3));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows.get(&EntityId::new("a")).map(|r| r.value), Some(3));
    }

    #[test]
    fn remove_missing_is_none() {
        let mut rows = Collection::from(vec![row("a", 1)]);
        assert!(rows.remove(&EntityId::new("zzz")).is_none());
        assert_eq!(rows.remove(&EntityId::new("a")).map(|r| r.value), Some(1));
        assert!(rows.is_empty());
    }
}
