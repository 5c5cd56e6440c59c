//! Relation manager: one-to-one and one-to-many links between objects.
//!
//! A relational field is an item whose value is the field name. The object
//! item points at it with a self-loop `field -> field`, and the field item
//! owns one self-loop `member -> member` per related object. Self-loops are
//! how relation edges are told apart from attribute edges, so relational
//! fields never show up in [`read_object`](ObjectStore::read_object).

use std::collections::{BTreeMap, HashSet};

use smelt_store::GraphStore;
use smelt_types::{Edge, ItemId, ItemUpdate};
use tracing::debug;

use crate::codec::ObjectStore;
use crate::record::{FieldFilter, Object, RelationMap, RelationTarget};

impl<S: GraphStore> ObjectStore<S> {
    /// Field name to relation-field item id, for the relational fields of
    /// `id` that pass `filter`.
    ///
    /// If two field items carry the same name, the later one (in id order,
    /// i.e. creation order) wins.
    pub fn relational_field_item_ids(
        &self,
        id: &ItemId,
        filter: &FieldFilter,
    ) -> BTreeMap<String, ItemId> {
        self.self_loops(id)
            .into_iter()
            .filter_map(|field_id| {
                let name = self.items.read_item(&field_id).value?;
                filter.matches(&name).then_some((name, field_id))
            })
            .collect()
    }

    /// Link `id` to other objects, one relational field per map entry.
    ///
    /// Each entry creates a new relation-field item named after the field,
    /// attaches it to the object and writes one member self-loop per id.
    /// Entries naming an existing scalar field are skipped. Members that do
    /// not exist are dropped by the edge guard.
    pub fn relate_objects(&mut self, id: &ItemId, relations: &RelationMap) {
        let value_ids = self.value_item_ids(id);
        for (name, target) in relations {
            if value_ids.contains_key(name) {
                debug!(object = %id, field = %name, "relate skipped: scalar field");
                continue;
            }
            let field = self.items.create_item(name.as_str());
            self.items
                .update_item(&ItemUpdate::new(*id).edge(field.id, field.id));
            self.items
                .update_item(&ItemUpdate::new(field.id).edges(Edge::relation_patch(target.ids())));
            debug!(object = %id, field = %name, members = target.ids().len(), "objects related");
        }
    }

    /// Remove links from `id`.
    ///
    /// Only fields that are currently relational are touched.
    ///
    /// - A member list removes those members one by one. Once the field has
    ///   no members left, the field item and its edge on the object go too.
    ///   An empty list removes nothing.
    /// - A single id clears the whole field regardless of which id it is.
    pub fn unrelate_objects(&mut self, id: &ItemId, relations: &RelationMap) {
        let relational = self.relational_field_item_ids(id, &FieldFilter::All);
        for (name, target) in relations {
            let Some(&field_id) = relational.get(name) else {
                continue;
            };
            let remove_field = match target {
                RelationTarget::Many(members) => {
                    let mut emptied = false;
                    for member in members {
                        self.items
                            .update_item(&ItemUpdate::new(field_id).remove_edge(*member));
                        if self.items.read_item(&field_id).edges.is_empty() {
                            emptied = true;
                        }
                    }
                    emptied
                }
                RelationTarget::One(_) => true,
            };
            if remove_field {
                self.items
                    .update_item(&ItemUpdate::new(*id).remove_edge(field_id));
                self.items.delete_item(&field_id);
                debug!(object = %id, field = %name, "relational field removed");
            }
        }
    }

    /// Resolve every related object, per relational field.
    ///
    /// Always returns a list per field, even for a single member.
    pub fn related_objects(
        &self,
        id: &ItemId,
        filter: &FieldFilter,
    ) -> BTreeMap<String, Vec<Object>> {
        self.relational_field_item_ids(id, filter)
            .into_iter()
            .map(|(name, field_id)| {
                let objects = self
                    .self_loops(&field_id)
                    .iter()
                    .map(|member| self.read_object(member))
                    .collect();
                (name, objects)
            })
            .collect()
    }

    /// Delete `id` and, recursively, every object reachable through its
    /// relational fields. Each object is deleted once, so cycles are fine.
    pub fn delete_object_deep(&mut self, id: &ItemId) {
        let mut pending = vec![*id];
        let mut visited = HashSet::new();
        while let Some(next) = pending.pop() {
            if !visited.insert(next) {
                continue;
            }
            for field_id in self.self_loops(&next) {
                pending.extend(self.self_loops(&field_id));
            }
            self.delete_object(&next);
        }
        debug!(id = %id, objects = visited.len(), "object deleted deep");
    }

    /// Ids that `owner` holds a self-loop for, in edge order.
    fn self_loops(&self, owner: &ItemId) -> Vec<ItemId> {
        let edges = self.items.read_item(owner).edges;
        Edge::classify_all(&edges)
            .filter_map(|edge| match edge {
                Edge::Relation { member } => Some(member),
                Edge::Attribute { .. } => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::codec::ObjectStore;
    use crate::record::{FieldFilter, Fields, Record, RelationMap, RelationTarget};
    use smelt_types::ItemId;

    fn fields(pairs: &[(&str, &str)]) -> Fields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn relation(name: &str, target: impl Into<RelationTarget>) -> RelationMap {
        RelationMap::from([(name.to_string(), target.into())])
    }

    /// Contact `A` related to address `B` through `address`.
    fn contact_with_address(store: &mut ObjectStore) -> (ItemId, ItemId) {
        let a = store.create_object(&fields(&[("firstName", "Ryan"), ("lastName", "X")]));
        let b = store.create_object(&fields(&[("city", "Y")]));
        store.relate_objects(&a.id, &relation("address", b.id));
        (a.id, b.id)
    }

    // -----------------------------------------------------------------------
    // Relate / query
    // -----------------------------------------------------------------------

    #[test]
    fn related_object_is_resolved() {
        let mut store = ObjectStore::new();
        let (a, b) = contact_with_address(&mut store);

        let related = store.related_objects(&a, &FieldFilter::only(["address"]));
        let address = &related["address"];
        assert_eq!(address.len(), 1);
        assert_eq!(address[0].id, b);
        assert_eq!(address[0].get("city"), Some("Y"));
    }

    #[test]
    fn read_object_hides_relations() {
        let mut store = ObjectStore::new();
        let (a, _) = contact_with_address(&mut store);

        let read = store.read_object(&a);
        assert_eq!(read.fields, fields(&[("firstName", "Ryan"), ("lastName", "X")]));
        assert!(read.get("address").is_none());
    }

    #[test]
    fn relational_field_map_lists_field() {
        let mut store = ObjectStore::new();
        let (a, _) = contact_with_address(&mut store);

        let map = store.relational_field_item_ids(&a, &FieldFilter::All);
        assert_eq!(map.len(), 1);
        let field_id = map["address"];
        assert_eq!(store.items().read_item(&field_id).value.as_deref(), Some("address"));
    }

    #[test]
    fn filter_excludes_other_fields() {
        let mut store = ObjectStore::new();
        let (a, _) = contact_with_address(&mut store);
        let employer = store.create_object(&fields(&[("name", "Acme")]));
        store.relate_objects(&a, &relation("employer", employer.id));

        let related = store.related_objects(&a, &FieldFilter::only(["employer"]));
        assert_eq!(related.len(), 1);
        assert_eq!(related["employer"][0].id, employer.id);
        assert_eq!(store.related_objects(&a, &FieldFilter::All).len(), 2);
    }

    #[test]
    fn relate_many_members() {
        let mut store = ObjectStore::new();
        let owner = store.create_object(&fields(&[("name", "team")]));
        let members: Vec<ItemId> = (0..3)
            .map(|i| {
                let n = i.to_string();
                store.create_object(&fields(&[("n", n.as_str())])).id
            })
            .collect();
        store.relate_objects(&owner.id, &relation("members", members.clone()));

        let related = store.related_objects(&owner.id, &FieldFilter::All);
        let mut ids: Vec<ItemId> = related["members"].iter().map(|o| o.id).collect();
        ids.sort();
        let mut expected = members;
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[test]
    fn relate_skips_scalar_field_names() {
        let mut store = ObjectStore::new();
        let a = store.create_object(&fields(&[("address", "inline")]));
        let b = store.create_object(&fields(&[("city", "Y")]));
        store.relate_objects(&a.id, &relation("address", b.id));

        assert!(store.relational_field_item_ids(&a.id, &FieldFilter::All).is_empty());
        assert_eq!(store.read_object(&a.id).get("address"), Some("inline"));
    }

    #[test]
    fn relate_to_missing_object_keeps_empty_field() {
        let mut store = ObjectStore::new();
        let a = store.create_object(&fields(&[("name", "a")]));
        store.relate_objects(&a.id, &relation("ghost", ItemId::new()));

        let related = store.related_objects(&a.id, &FieldFilter::All);
        assert!(related["ghost"].is_empty());
    }

    #[test]
    fn relate_to_deleted_object_writes_no_member() {
        let mut store = ObjectStore::new();
        let a = store.create_object(&fields(&[("name", "a")]));
        let b = store.create_object(&fields(&[("city", "Y")]));
        store.delete_object(&b.id);

        store.relate_objects(&a.id, &relation("former", b.id));

        let related = store.related_objects(&a.id, &FieldFilter::All);
        assert!(related["former"].is_empty());
        let field_id = store.relational_field_item_ids(&a.id, &FieldFilter::All)["former"];
        assert!(store.items().read_item(&field_id).edges.is_empty());
        assert!(!store.items().contains(&b.id));
    }

    #[test]
    fn update_skips_relational_names() {
        let mut store = ObjectStore::new();
        let (a, b) = contact_with_address(&mut store);
        store.update_object(&Record::for_object(a).field("address", "scalar now"));

        assert!(store.read_object(&a).get("address").is_none());
        assert_eq!(
            store.related_objects(&a, &FieldFilter::All)["address"][0].id,
            b
        );
    }

    // -----------------------------------------------------------------------
    // Unrelate
    // -----------------------------------------------------------------------

    #[test]
    fn unrelate_last_member_removes_field() {
        let mut store = ObjectStore::new();
        let (a, b) = contact_with_address(&mut store);
        let field_id = store.relational_field_item_ids(&a, &FieldFilter::All)["address"];

        store.unrelate_objects(&a, &relation("address", vec![b]));

        assert!(store.relational_field_item_ids(&a, &FieldFilter::All).is_empty());
        assert!(!store.items().contains(&field_id));
        assert!(store.related_objects(&a, &FieldFilter::All).is_empty());
        // the related object itself is untouched
        assert_eq!(store.read_object(&b).get("city"), Some("Y"));
    }

    #[test]
    fn unrelate_some_members_keeps_field() {
        let mut store = ObjectStore::new();
        let owner = store.create_object(&fields(&[("name", "team")]));
        let x = store.create_object(&fields(&[("n", "x")])).id;
        let y = store.create_object(&fields(&[("n", "y")])).id;
        store.relate_objects(&owner.id, &relation("members", vec![x, y]));

        store.unrelate_objects(&owner.id, &relation("members", vec![x]));

        let related = store.related_objects(&owner.id, &FieldFilter::All);
        let ids: Vec<ItemId> = related["members"].iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![y]);
    }

    #[test]
    fn unrelate_single_id_clears_whole_field() {
        let mut store = ObjectStore::new();
        let owner = store.create_object(&fields(&[("name", "team")]));
        let x = store.create_object(&fields(&[("n", "x")])).id;
        let y = store.create_object(&fields(&[("n", "y")])).id;
        store.relate_objects(&owner.id, &relation("members", vec![x, y]));

        store.unrelate_objects(&owner.id, &relation("members", x));

        assert!(store
            .relational_field_item_ids(&owner.id, &FieldFilter::All)
            .is_empty());
    }

    #[test]
    fn unrelate_empty_list_removes_nothing() {
        let mut store = ObjectStore::new();
        let (a, _) = contact_with_address(&mut store);
        store.unrelate_objects(&a, &relation("address", Vec::<ItemId>::new()));
        assert_eq!(store.related_objects(&a, &FieldFilter::All)["address"].len(), 1);
    }

    #[test]
    fn unrelate_non_relational_field_is_noop() {
        let mut store = ObjectStore::new();
        let (a, b) = contact_with_address(&mut store);
        let before = store.items().backend().dump();

        store.unrelate_objects(&a, &relation("firstName", b));
        store.unrelate_objects(&a, &relation("nothing", vec![b]));

        assert_eq!(store.items().backend().dump(), before);
    }

    #[test]
    fn unrelate_of_deleted_member_is_blocked_by_guard() {
        let mut store = ObjectStore::new();
        let (a, b) = contact_with_address(&mut store);
        store.delete_object(&b);

        store.unrelate_objects(&a, &relation("address", vec![b]));

        // the member self-loop cannot be removed once its source is gone
        assert!(store
            .relational_field_item_ids(&a, &FieldFilter::All)
            .contains_key("address"));
    }

    // -----------------------------------------------------------------------
    // Delete
    // -----------------------------------------------------------------------

    #[test]
    fn delete_removes_relation_field_but_not_related_object() {
        let mut store = ObjectStore::new();
        let (a, b) = contact_with_address(&mut store);
        let field_id = store.relational_field_item_ids(&a, &FieldFilter::All)["address"];

        store.delete_object(&a);

        assert!(store.read_object(&a).fields.is_empty());
        assert!(!store.items().contains(&field_id));
        assert!(store.items().read_item(&field_id).edges.is_empty());
        assert_eq!(store.read_object(&b).fields, fields(&[("city", "Y")]));
        assert!(store.items().contains(&b));
    }

    #[test]
    fn deep_delete_follows_relations() {
        let mut store = ObjectStore::new();
        let (a, b) = contact_with_address(&mut store);
        store.delete_object_deep(&a);

        assert!(store.read_object(&b).fields.is_empty());
        assert!(store.items().backend().is_empty());
    }

    #[test]
    fn deep_delete_survives_cycles() {
        let mut store = ObjectStore::new();
        let (a, b) = contact_with_address(&mut store);
        store.relate_objects(&b, &relation("resident", a));

        store.delete_object_deep(&b);
        assert!(store.items().backend().is_empty());
    }
}
