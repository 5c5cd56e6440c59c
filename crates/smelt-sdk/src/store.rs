use std::collections::BTreeMap;

use smelt_object::{FieldFilter, Fields, Object, ObjectStore, Record, RelationMap};
use smelt_store::{InMemoryGraphStore, ItemStore, TableDump};
use smelt_types::ItemId;

use crate::config::SmeltConfig;
use crate::error::SdkResult;

/// High-level Smelt API.
///
/// One value is one independent store. Mutating calls take `&mut self`;
/// share it across threads only behind a lock held for the whole call.
#[derive(Debug, Default)]
pub struct Smelt {
    objects: ObjectStore<InMemoryGraphStore>,
}

impl Smelt {
    /// Empty store with default configuration.
    pub fn init() -> Self {
        Self::default()
    }

    pub fn with_config(config: SmeltConfig) -> Self {
        Self {
            objects: ObjectStore::from_items(ItemStore::new(), config.objects),
        }
    }

    // ---- Object operations ----

    pub fn create_object(&mut self, fields: &Fields) -> Object {
        self.objects.create_object(fields)
    }

    pub fn create_object_with_tags(&mut self, fields: &Fields, tags: &[String]) -> Object {
        self.objects.create_object_with_tags(fields, tags)
    }

    pub fn read_object(&self, id: &ItemId) -> Object {
        self.objects.read_object(id)
    }

    pub fn update_object(&mut self, record: &Record) {
        self.objects.update_object(record)
    }

    pub fn delete_object(&mut self, id: &ItemId) {
        self.objects.delete_object(id)
    }

    pub fn delete_object_deep(&mut self, id: &ItemId) {
        self.objects.delete_object_deep(id)
    }

    pub fn object_tags(&self, id: &ItemId) -> Vec<String> {
        self.objects.object_tags(id)
    }

    // ---- Relation operations ----

    pub fn relate_objects(&mut self, id: &ItemId, relations: &RelationMap) {
        self.objects.relate_objects(id, relations)
    }

    pub fn unrelate_objects(&mut self, id: &ItemId, relations: &RelationMap) {
        self.objects.unrelate_objects(id, relations)
    }

    pub fn related_objects(
        &self,
        id: &ItemId,
        filter: &FieldFilter,
    ) -> BTreeMap<String, Vec<Object>> {
        self.objects.related_objects(id, filter)
    }

    // ---- Inspection ----

    pub fn dump(&self) -> TableDump {
        self.objects.items().backend().dump()
    }

    pub fn dump_json(&self) -> SdkResult<String> {
        Ok(self.dump().to_json_pretty()?)
    }

    pub fn item_count(&self) -> usize {
        self.objects.items().backend().item_count()
    }

    /// Items owning at least one edge.
    pub fn owner_count(&self) -> usize {
        self.objects.items().backend().owner_count()
    }

    pub fn edge_count(&self) -> usize {
        self.objects.items().backend().edge_count()
    }

    pub fn objects(&self) -> &ObjectStore<InMemoryGraphStore> {
        &self.objects
    }
}
