//! The two primitive tables.
//!
//! Neither table checks anything. The existence guard on edges needs both
//! tables at once and lives in [`GraphStore::set_edge`](crate::GraphStore::set_edge).

use std::collections::HashMap;

use smelt_types::{EdgeMap, ItemId};

/// Item id to scalar value. A missing entry is the absent value.
#[derive(Clone, Debug, Default)]
pub struct ValueTable {
    values: HashMap<ItemId, String>,
}

impl ValueTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &ItemId) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// Write `value`, or remove the entry when `value` is `None`.
    pub fn set(&mut self, id: ItemId, value: Option<String>) {
        match value {
            Some(value) => {
                self.values.insert(id, value);
            }
            None => {
                self.values.remove(&id);
            }
        }
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.values.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, &str)> {
        self.values.iter().map(|(id, v)| (id, v.as_str()))
    }
}

/// Owner id to outgoing edge set.
///
/// Owners whose last edge is removed are dropped from the table, so an
/// empty set and a missing owner read the same.
#[derive(Clone, Debug, Default)]
pub struct ConnectionTable {
    edges: HashMap<ItemId, EdgeMap>,
}

impl ConnectionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the edge set of `owner`, if it has any edges.
    pub fn get(&self, owner: &ItemId) -> Option<&EdgeMap> {
        self.edges.get(owner)
    }

    pub fn insert(&mut self, owner: ItemId, from: ItemId, to: ItemId) {
        self.edges.entry(owner).or_default().insert(from, to);
    }

    /// Remove the edge leaving `from`. Returns the old target, if any.
    pub fn remove(&mut self, owner: &ItemId, from: &ItemId) -> Option<ItemId> {
        let set = self.edges.get_mut(owner)?;
        let removed = set.remove(from);
        if set.is_empty() {
            self.edges.remove(owner);
        }
        removed
    }

    /// Drop the whole edge set of `owner`. Returns how many edges it held.
    pub fn clear(&mut self, owner: &ItemId) -> usize {
        self.edges.remove(owner).map_or(0, |set| set.len())
    }

    /// Number of owners with at least one edge.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, &EdgeMap)> {
        self.edges.iter()
    }
}
