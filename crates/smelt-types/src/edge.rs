//! Edge sets and the attribute/relation discriminator.
//!
//! Every owner item stores its outgoing edges as a map `from -> to`. Two
//! kinds of edge share that one map:
//!
//! - `from != to` is an *attribute* edge: `from` is a key item holding a
//!   field name and `to` is the value item holding the field value.
//! - `from == to` is a *relation* edge: a self-loop marking `from` as a
//!   member of the owner's relation set.
//!
//! Endpoint equality is the only discriminator. [`Edge`] names the two cases
//! for code reading an edge set; storage keeps the self-loop form.

use std::collections::BTreeMap;

use crate::id::ItemId;

/// Stored edge set of one owner item, `from -> to`.
pub type EdgeMap = BTreeMap<ItemId, ItemId>;

/// Edge write request, `from -> Some(to)` to write or `from -> None` to remove.
pub type EdgePatch = BTreeMap<ItemId, Option<ItemId>>;

/// A stored edge, classified by endpoint equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// `key -> value`, one scalar field of an object.
    Attribute { key: ItemId, value: ItemId },
    /// `member -> member`, membership in a relation set.
    Relation { member: ItemId },
}

impl Edge {
    /// Classify a stored `from -> to` pair.
    pub fn classify(from: ItemId, to: ItemId) -> Self {
        if from == to {
            Self::Relation { member: from }
        } else {
            Self::Attribute {
                key: from,
                value: to,
            }
        }
    }

    /// The stored `(from, to)` form of this edge.
    pub fn endpoints(&self) -> (ItemId, ItemId) {
        match *self {
            Self::Attribute { key, value } => (key, value),
            Self::Relation { member } => (member, member),
        }
    }

    pub fn is_relation(&self) -> bool {
        matches!(self, Self::Relation { .. })
    }

    /// Classify every edge of a stored set, in map order.
    pub fn classify_all(edges: &EdgeMap) -> impl Iterator<Item = Edge> + '_ {
        edges.iter().map(|(from, to)| Self::classify(*from, *to))
    }

    /// Build the self-loop patch that makes every id a relation member.
    pub fn relation_patch<'a>(members: impl IntoIterator<Item = &'a ItemId>) -> EdgePatch {
        members.into_iter().map(|m| (*m, Some(*m))).collect()
    }
}
