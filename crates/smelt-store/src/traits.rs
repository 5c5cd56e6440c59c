use smelt_types::{EdgeMap, EdgePatch, ItemId};
use tracing::{debug, trace};

/// Outcome of a single edge write.
///
/// Callers are free to ignore it: a rejected write leaves the edge set
/// exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeWrite {
    /// The edge `from -> to` was stored.
    Written,
    /// The edge leaving `from` was removed (or was already absent).
    Removed,
    /// Dropped: the source item holds no value.
    MissingSource,
    /// Dropped: the target item holds no value.
    MissingTarget,
}

impl EdgeWrite {
    /// Returns `true` if the write changed, or was allowed to change, the set.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Written | Self::Removed)
    }
}

/// Storage backend for the value and connection tables.
///
/// Backends provide raw table access; the existence guard is provided here
/// so every backend enforces it the same way:
///
/// - a write or removal is considered only if `from` holds a value;
/// - a removal (`to == None`) then drops the edge leaving `from`;
/// - a write is stored only if `to` holds a value as well.
///
/// The guard is checked at write time only. Deleting an item later does not
/// touch edges other owners hold to it.
pub trait GraphStore {
    /// Read the value of `id`. `None` is the absent value.
    fn value(&self, id: &ItemId) -> Option<&str>;

    /// Write the value of `id`, or remove it when `value` is `None`.
    fn set_value(&mut self, id: ItemId, value: Option<String>);

    /// Copy of the edge set owned by `owner`. Empty if it owns none.
    fn edges(&self, owner: &ItemId) -> EdgeMap;

    /// Store `from -> to` under `owner` without any check.
    fn insert_edge(&mut self, owner: ItemId, from: ItemId, to: ItemId);

    /// Remove the edge leaving `from` under `owner` without any check.
    fn remove_edge(&mut self, owner: &ItemId, from: &ItemId);

    /// Remove the whole edge set owned by `owner`.
    fn clear_edges(&mut self, owner: &ItemId);

    /// Returns `true` if `id` currently holds a value.
    fn has_value(&self, id: &ItemId) -> bool {
        self.value(id).is_some()
    }

    /// Guarded edge write. See the trait docs for the rules.
    fn set_edge(&mut self, owner: ItemId, from: ItemId, to: Option<ItemId>) -> EdgeWrite {
        if !self.has_value(&from) {
            debug!(owner = %owner, from = %from, "edge dropped: source has no value");
            return EdgeWrite::MissingSource;
        }
        match to {
            None => {
                self.remove_edge(&owner, &from);
                trace!(owner = %owner, from = %from, "edge removed");
                EdgeWrite::Removed
            }
            Some(to) if self.has_value(&to) => {
                self.insert_edge(owner, from, to);
                trace!(owner = %owner, from = %from, to = %to, "edge written");
                EdgeWrite::Written
            }
            Some(to) => {
                debug!(owner = %owner, from = %from, to = %to, "edge dropped: target has no value");
                EdgeWrite::MissingTarget
            }
        }
    }

    /// Apply `set_edge` once per patch entry, in map order.
    fn set_edges_from_map(&mut self, owner: ItemId, patch: &EdgePatch) -> Vec<EdgeWrite> {
        patch
            .iter()
            .map(|(from, to)| self.set_edge(owner, *from, *to))
            .collect()
    }
}
