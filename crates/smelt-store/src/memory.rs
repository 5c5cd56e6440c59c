use smelt_types::{EdgeMap, ItemId};

use crate::dump::TableDump;
use crate::tables::{ConnectionTable, ValueTable};
use crate::traits::GraphStore;

/// In-memory, HashMap-based graph store.
///
/// Holds one [`ValueTable`] and one [`ConnectionTable`]. All state lives for
/// as long as the store does; there is no load or save path. Each instance is
/// independent, so tests can build as many as they like.
#[derive(Clone, Default)]
pub struct InMemoryGraphStore {
    values: ValueTable,
    connections: ConnectionTable,
}

impl InMemoryGraphStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items currently holding a value.
    pub fn item_count(&self) -> usize {
        self.values.len()
    }

    /// Number of items currently owning at least one edge.
    pub fn owner_count(&self) -> usize {
        self.connections.len()
    }

    /// Total number of stored edges across all owners.
    pub fn edge_count(&self) -> usize {
        self.connections.iter().map(|(_, set)| set.len()).sum()
    }

    /// Returns `true` if both tables are empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.connections.is_empty()
    }

    /// Ordered snapshot of both tables for debugging.
    pub fn dump(&self) -> TableDump {
        TableDump::from_tables(&self.values, &self.connections)
    }
}

impl GraphStore for InMemoryGraphStore {
    fn value(&self, id: &ItemId) -> Option<&str> {
        self.values.get(id)
    }

    fn set_value(&mut self, id: ItemId, value: Option<String>) {
        self.values.set(id, value);
    }

    fn edges(&self, owner: &ItemId) -> EdgeMap {
        self.connections.get(owner).cloned().unwrap_or_default()
    }

    fn insert_edge(&mut self, owner: ItemId, from: ItemId, to: ItemId) {
        self.connections.insert(owner, from, to);
    }

    fn remove_edge(&mut self, owner: &ItemId, from: &ItemId) {
        self.connections.remove(owner, from);
    }

    fn clear_edges(&mut self, owner: &ItemId) {
        self.connections.clear(owner);
    }
}

impl std::fmt::Debug for InMemoryGraphStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryGraphStore")
            .field("item_count", &self.item_count())
            .field("owner_count", &self.owner_count())
            .field("edge_count", &self.edge_count())
            .finish()
    }
}
