//! Record shapes exchanged with callers of the object layer.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use smelt_types::ItemId;

/// Scalar fields of an object, by name.
pub type Fields = BTreeMap<String, String>;

/// Relation request: field name to one member or a member list.
pub type RelationMap = BTreeMap<String, RelationTarget>;

/// A decoded object: its id plus its scalar fields.
///
/// Serializes flat, as `{"id": "...", "<field>": "<value>", ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Object {
    pub id: ItemId,
    #[serde(flatten)]
    pub fields: Fields,
}

impl Object {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

/// Input to `update_object`: an optional id plus the fields to write.
///
/// A record without an id updates nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    #[serde(flatten)]
    pub fields: Fields,
}

impl Record {
    /// Empty record addressed to `id`.
    pub fn for_object(id: ItemId) -> Self {
        Self {
            id: Some(id),
            fields: Fields::new(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }
}

impl From<Object> for Record {
    fn from(object: Object) -> Self {
        Self {
            id: Some(object.id),
            fields: object.fields,
        }
    }
}

/// Member argument of relate/unrelate.
///
/// Parses from either a bare id or an id list. The two forms are not
/// interchangeable when unrelating: see
/// [`ObjectStore::unrelate_objects`](crate::ObjectStore::unrelate_objects).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationTarget {
    One(ItemId),
    Many(Vec<ItemId>),
}

impl RelationTarget {
    pub fn ids(&self) -> &[ItemId] {
        match self {
            Self::One(id) => std::slice::from_ref(id),
            Self::Many(ids) => ids,
        }
    }
}

impl From<ItemId> for RelationTarget {
    fn from(id: ItemId) -> Self {
        Self::One(id)
    }
}

impl From<Vec<ItemId>> for RelationTarget {
    fn from(ids: Vec<ItemId>) -> Self {
        Self::Many(ids)
    }
}

/// Restricts which relational fields a query looks at.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FieldFilter {
    #[default]
    All,
    Only(BTreeSet<String>),
}

impl FieldFilter {
    pub fn only<I, T>(names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::Only(names.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(names) => names.contains(name),
        }
    }
}
