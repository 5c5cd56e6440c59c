//! Item storage for the Smelt graph.
//!
//! The store is two tables and nothing else:
//!
//! - [`ValueTable`] -- item id to scalar string
//! - [`ConnectionTable`] -- owner id to its outgoing edge set
//!
//! [`GraphStore`] is the seam over those tables, with
//! [`InMemoryGraphStore`] as the only backend. [`ItemStore`] is the item
//! layer built on top; higher layers go through it and never see the tables.
//!
//! # Design Rules
//!
//! 1. An edge is written only when both endpoints hold a value at write time.
//! 2. Edges that go stale later are tolerated; they are removed only when
//!    their owner is deleted or the edge is removed explicitly.
//! 3. Nothing fails loudly. Unknown ids read as empty items, rejected edge
//!    writes are dropped and reported as an [`EdgeWrite`] outcome.
//! 4. Single writer. Mutation takes `&mut self`; sharing needs an outer lock.

pub mod dump;
pub mod error;
pub mod items;
pub mod memory;
pub mod tables;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use dump::TableDump;
pub use error::{StoreError, StoreResult};
pub use items::ItemStore;
pub use memory::InMemoryGraphStore;
pub use tables::{ConnectionTable, ValueTable};
pub use traits::{EdgeWrite, GraphStore};
