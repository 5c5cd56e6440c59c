//! Object codec: scalar fields encoded as key/value item pairs.

use std::collections::BTreeMap;

use smelt_store::{GraphStore, InMemoryGraphStore, ItemStore};
use smelt_types::{Edge, ItemId, ItemUpdate};
use tracing::{debug, trace};

use crate::config::ObjectConfig;
use crate::record::{FieldFilter, Fields, Object, Record};

/// Objects and relations over an item layer.
///
/// The codec half lives in this module, the relation half in
/// [`relation`](crate::relation). Every method degrades to a no-op or an
/// empty result on unknown ids; nothing here returns an error.
#[derive(Clone, Debug, Default)]
pub struct ObjectStore<S = InMemoryGraphStore> {
    pub(crate) items: ItemStore<S>,
    config: ObjectConfig,
}

impl ObjectStore<InMemoryGraphStore> {
    /// Object layer over a fresh in-memory store with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ObjectConfig) -> Self {
        Self::from_items(ItemStore::new(), config)
    }
}

impl<S: GraphStore> ObjectStore<S> {
    pub fn from_items(items: ItemStore<S>, config: ObjectConfig) -> Self {
        Self { items, config }
    }

    /// The underlying item layer.
    pub fn items(&self) -> &ItemStore<S> {
        &self.items
    }

    pub fn config(&self) -> &ObjectConfig {
        &self.config
    }

    /// Encode `fields` as a new object tagged by the configured tag policy.
    pub fn create_object(&mut self, fields: &Fields) -> Object {
        let tags = self.config.default_tags.tags();
        self.create_object_with_tags(fields, &tags)
    }

    /// Encode `fields` as a new object whose item value is `tags` joined
    /// by the configured separator.
    ///
    /// Every field gets its own key item and value item, even when another
    /// object already holds the same name or value.
    pub fn create_object_with_tags(&mut self, fields: &Fields, tags: &[String]) -> Object {
        let object = self.items.create_item(tags.join(&self.config.tag_separator));
        for (name, value) in fields {
            let key = self.items.create_item(name.as_str());
            let value = self.items.create_item(value.as_str());
            self.items
                .update_item(&ItemUpdate::new(object.id).edge(key.id, value.id));
        }
        debug!(id = %object.id, fields = fields.len(), "object created");
        Object {
            id: object.id,
            fields: fields.clone(),
        }
    }

    /// Split the object item's value back into tags.
    ///
    /// Empty if the object is absent or was created with no tags. Tags must
    /// not contain the separator: such a tag reads back as several. With an
    /// empty separator the whole value is one tag.
    pub fn object_tags(&self, id: &ItemId) -> Vec<String> {
        let Some(value) = self.items.read_item(id).value else {
            return Vec::new();
        };
        if value.is_empty() {
            return Vec::new();
        }
        let separator = self.config.tag_separator.as_str();
        if separator.is_empty() {
            return vec![value];
        }
        value.split(separator).map(str::to_string).collect()
    }

    /// Decode the scalar fields of `id`.
    ///
    /// Relation edges are never surfaced. Attribute edges whose key or value
    /// item has since been deleted are left out.
    pub fn read_object(&self, id: &ItemId) -> Object {
        let mut fields = Fields::new();
        for (key, value) in self.attribute_edges(id) {
            let name = self.items.read_item(&key).value;
            let value = self.items.read_item(&value).value;
            match (name, value) {
                (Some(name), Some(value)) => {
                    fields.insert(name, value);
                }
                _ => trace!(object = %id, key = %key, "stale attribute edge skipped"),
            }
        }
        Object { id: *id, fields }
    }

    /// Field name to value item id, for every attribute edge of `id`.
    pub fn value_item_ids(&self, id: &ItemId) -> BTreeMap<String, ItemId> {
        self.attribute_edges(id)
            .into_iter()
            .filter_map(|(key, value)| {
                let name = self.items.read_item(&key).value?;
                Some((name, value))
            })
            .collect()
    }

    /// Write `record.fields` into an existing object.
    ///
    /// Known fields are overwritten in place, keeping their value item id.
    /// New names get a fresh key/value pair unless they name a relational
    /// field, in which case they are skipped. No-op without an id.
    pub fn update_object(&mut self, record: &Record) {
        let Some(id) = record.id else {
            return;
        };
        let value_ids = self.value_item_ids(&id);
        let relational = self.relational_field_item_ids(&id, &FieldFilter::All);

        for (name, value) in &record.fields {
            if let Some(value_id) = value_ids.get(name) {
                self.items
                    .update_item(&ItemUpdate::new(*value_id).value(value.as_str()));
            } else if relational.contains_key(name) {
                debug!(object = %id, field = %name, "update skipped: relational field");
            } else {
                let key = self.items.create_item(name.as_str());
                let value = self.items.create_item(value.as_str());
                self.items
                    .update_item(&ItemUpdate::new(id).edge(key.id, value.id));
            }
        }
        debug!(id = %id, fields = record.fields.len(), "object updated");
    }

    /// Delete the object item and both endpoints of each of its edges.
    ///
    /// One hop only. For a relation edge the endpoint is the relation-field
    /// item, so the field item and its member set go, while the related
    /// objects themselves stay intact.
    /// [`delete_object_deep`](Self::delete_object_deep) also removes them.
    pub fn delete_object(&mut self, id: &ItemId) {
        let edges = self.items.read_item(id).edges;
        for (from, to) in &edges {
            self.items.delete_item(from);
            if from != to {
                self.items.delete_item(to);
            }
        }
        self.items.delete_item(id);
        debug!(id = %id, edges = edges.len(), "object deleted");
    }

    fn attribute_edges(&self, id: &ItemId) -> Vec<(ItemId, ItemId)> {
        let edges = self.items.read_item(id).edges;
        Edge::classify_all(&edges)
            .filter_map(|edge| match edge {
                Edge::Attribute { key, value } => Some((key, value)),
                Edge::Relation { .. } => None,
            })
            .collect()
    }
}
