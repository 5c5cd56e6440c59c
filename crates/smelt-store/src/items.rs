//! The item layer: create, read, update and delete single items.
//!
//! This is the only code above [`GraphStore`] that touches the tables. An
//! item's role (scalar, key label, object, relation field) is never recorded
//! here; it follows from how other items' edges point at it.

use smelt_types::{EdgeMap, Item, ItemId, ItemUpdate};
use tracing::debug;

use crate::memory::InMemoryGraphStore;
use crate::traits::{EdgeWrite, GraphStore};

/// Item-level CRUD over a [`GraphStore`] backend.
#[derive(Clone, Debug, Default)]
pub struct ItemStore<S = InMemoryGraphStore> {
    backend: S,
}

impl ItemStore<InMemoryGraphStore> {
    /// Item layer over a fresh in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: GraphStore> ItemStore<S> {
    pub fn with_backend(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Allocate a fresh id and store `value` under it.
    pub fn create_item(&mut self, value: impl Into<String>) -> Item {
        let id = ItemId::new();
        let value = value.into();
        self.backend.set_value(id, Some(value.clone()));
        debug!(id = %id, "item created");
        Item {
            id,
            value: Some(value),
            edges: EdgeMap::new(),
        }
    }

    /// Read an item. Unknown ids read as an absent value with no edges.
    pub fn read_item(&self, id: &ItemId) -> Item {
        Item {
            id: *id,
            value: self.backend.value(id).map(str::to_string),
            edges: self.backend.edges(id),
        }
    }

    /// Returns `true` if `id` currently holds a value.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.backend.has_value(id)
    }

    /// Read every target of `id`'s own edges, one hop, in edge order.
    pub fn connected_items(&self, id: &ItemId) -> Vec<Item> {
        self.backend
            .edges(id)
            .values()
            .map(|to| self.read_item(to))
            .collect()
    }

    /// Apply a partial update.
    ///
    /// No-op without an id. A present value is written even when empty;
    /// edges then go through the guarded edge write, entry by entry. Returns
    /// the outcome of each edge write.
    pub fn update_item(&mut self, update: &ItemUpdate) -> Vec<EdgeWrite> {
        let Some(id) = update.id else {
            return Vec::new();
        };
        if let Some(value) = &update.value {
            self.backend.set_value(id, Some(value.clone()));
        }
        self.backend.set_edges_from_map(id, &update.edges)
    }

    /// Clear the value and the owned edge set of `id`. Idempotent.
    pub fn delete_item(&mut self, id: &ItemId) {
        self.backend.set_value(*id, None);
        self.backend.clear_edges(id);
        debug!(id = %id, "item deleted");
    }
}
