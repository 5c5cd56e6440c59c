use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smelt_types::{EdgeMap, ItemId};

use crate::error::StoreResult;
use crate::tables::{ConnectionTable, ValueTable};

/// Ordered snapshot of both tables.
///
/// A debugging view, not a persistence format: there is no way to load a
/// dump back into a store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDump {
    pub values: BTreeMap<ItemId, String>,
    pub connections: BTreeMap<ItemId, EdgeMap>,
}

impl TableDump {
    pub(crate) fn from_tables(values: &ValueTable, connections: &ConnectionTable) -> Self {
        Self {
            values: values
                .iter()
                .map(|(id, v)| (*id, v.to_string()))
                .collect(),
            connections: connections
                .iter()
                .map(|(owner, set)| (*owner, set.clone()))
                .collect(),
        }
    }

    /// Pretty JSON rendering of both tables.
    pub fn to_json_pretty(&self) -> StoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
