//! Foundation types for the Smelt item graph.
//!
//! Everything in Smelt is an *item*: an opaque id, an optional string value,
//! and an owned set of edges. Objects and relations are not stored types;
//! they are read out of the shape of those edges.
//!
//! # Key Types
//!
//! - [`ItemId`] — Time-ordered UUID v7 identifier, never reused
//! - [`Item`] — One row of the graph: id, value, owned edges
//! - [`ItemUpdate`] — Partial update applied by the item layer
//! - [`EdgeMap`] / [`EdgePatch`] — Stored edge sets and edge write requests
//! - [`Edge`] — Attribute vs. relation classification of a stored edge

pub mod edge;
pub mod error;
pub mod id;
pub mod item;

pub use edge::{Edge, EdgeMap, EdgePatch};
pub use error::TypeError;
pub use id::ItemId;
pub use item::{Item, ItemUpdate};
