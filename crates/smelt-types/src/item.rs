use serde::{Deserialize, Serialize};

use crate::edge::{EdgeMap, EdgePatch};
use crate::id::ItemId;

/// One item of the graph as seen by a reader.
///
/// `value: None` means the item was deleted or never created; it is a
/// different state from `Some("")`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub value: Option<String>,
    #[serde(default)]
    pub edges: EdgeMap,
}

impl Item {
    /// Returns `true` if the item currently holds a value.
    pub fn exists(&self) -> bool {
        self.value.is_some()
    }
}

/// Partial update applied by the item layer.
///
/// An update without an `id` is a no-op. `value: None` leaves the stored
/// value untouched (use a delete to clear it). Edges are applied one entry
/// at a time, in map order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemUpdate {
    pub id: Option<ItemId>,
    pub value: Option<String>,
    pub edges: EdgePatch,
}

impl ItemUpdate {
    /// Start an update targeting `id`.
    pub fn new(id: ItemId) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Request the edge `from -> to`.
    pub fn edge(mut self, from: ItemId, to: ItemId) -> Self {
        self.edges.insert(from, Some(to));
        self
    }

    /// Request removal of the edge leaving `from`.
    pub fn remove_edge(mut self, from: ItemId) -> Self {
        self.edges.insert(from, None);
        self
    }

    /// Merge a whole patch into the request.
    pub fn edges(mut self, patch: EdgePatch) -> Self {
        self.edges.extend(patch);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_still_exists() {
        let item = Item {
            id: ItemId::new(),
            value: Some(String::new()),
            edges: EdgeMap::new(),
        };
        assert!(item.exists());
    }

    #[test]
    fn builder_collects_writes_and_removals() {
        let owner = ItemId::new();
        let a = ItemId::new();
        let b = ItemId::new();
        let update = ItemUpdate::new(owner).value("v").edge(a, b).remove_edge(b);

        assert_eq!(update.id, Some(owner));
        assert_eq!(update.value.as_deref(), Some("v"));
        assert_eq!(update.edges[&a], Some(b));
        assert_eq!(update.edges[&b], None);
    }

    #[test]
    fn default_update_has_no_target() {
        assert!(ItemUpdate::default().id.is_none());
    }

    #[test]
    fn item_json_shape() {
        let id = ItemId::new();
        let to = ItemId::new();
        let mut edges = EdgeMap::new();
        edges.insert(id, to);
        let item = Item {
            id,
            value: Some("name".into()),
            edges,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["value"], "name");
        assert_eq!(json["edges"][id.to_string()], to.to_string());
    }
}
