//! Structured records on top of the Smelt item graph.
//!
//! An *object* is not stored anywhere as such. It is one object item plus
//! the items its edges reach:
//!
//! ```text
//! object item (value: tags)
//!   key item "firstName" -> value item "Ryan"        attribute edge
//!   key item "lastName"  -> value item "X"           attribute edge
//!   field item "address" -> field item "address"     relation edge
//!                             member B -> member B   (owned by the field item)
//! ```
//!
//! [`ObjectStore`] implements both halves: the codec (create, read, update,
//! delete of scalar fields) and the relation manager (relate, unrelate, and
//! resolve linked objects). Both reach the tables only through
//! [`smelt_store::ItemStore`].

pub mod codec;
pub mod config;
pub mod record;
pub mod relation;

pub use codec::ObjectStore;
pub use config::{ObjectConfig, TagPolicy};
pub use record::{FieldFilter, Fields, Object, Record, RelationMap, RelationTarget};
