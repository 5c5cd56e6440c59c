//! High-level SDK for the Smelt object graph.
//!
//! [`Smelt`] bundles an in-memory store with the object layer and is the
//! entry point for applications embedding Smelt. Everything lives in memory
//! for the lifetime of the value; there is no persistence.

pub mod config;
pub mod error;
pub mod store;

pub use config::SmeltConfig;
pub use error::{SdkError, SdkResult};
pub use store::Smelt;

// Re-export key types
pub use smelt_object::{
    FieldFilter, Fields, Object, ObjectConfig, Record, RelationMap, RelationTarget, TagPolicy,
};
pub use smelt_store::TableDump;
pub use smelt_types::ItemId;
