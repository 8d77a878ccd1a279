//! # Storage Layer
//!
//! This module defines the storage abstraction for pantry. The [`InventoryStore`]
//! trait is the adapter between inventory operations and a keyed-document
//! collection.
//!
//! ## Collection Model
//!
//! One collection (named `inventory` by default) holds one document per item:
//!
//! ```text
//! inventory/
//! ├── "apple" → { "category": "fruit", "quantity": 3 }
//! └── "egg"   → { "category": "dairy", "quantity": 1 }
//! ```
//!
//! The document key is the item name; the body is a [`Document`].
//!
//! ## Failure Semantics
//!
//! Every operation that cannot reach or execute against the collection fails with
//! [`PantryError::StoreUnavailable`](crate::error::PantryError::StoreUnavailable).
//! A missing document is not a failure: `read_one` returns `Ok(None)` and
//! `delete_one` on an absent key is a no-op.
//!
//! There are no transactions. A read followed by a write is two separate calls.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Persistent collection kept as a JSON document map on disk.
//! - [`memory::InMemoryStore`]: For testing logic without filesystem I/O.

use crate::error::Result;
use crate::model::{Document, InventoryItem};

pub mod fs;
pub mod memory;

/// Name of the default document collection.
pub const DEFAULT_COLLECTION: &str = "inventory";

/// Abstract interface for the inventory document collection.
pub trait InventoryStore {
    /// Every document in the collection, as items. No ordering is promised.
    fn fetch_all(&self) -> Result<Vec<InventoryItem>>;

    /// The document stored under `name`, or `None` if there is none.
    fn read_one(&self, name: &str) -> Result<Option<Document>>;

    /// Create or fully replace the document stored under `name`.
    fn write_one(&mut self, name: &str, doc: &Document) -> Result<()>;

    /// Remove the document stored under `name`. Absent keys are ignored.
    fn delete_one(&mut self, name: &str) -> Result<()>;
}
