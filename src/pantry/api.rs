//! # Inventory Service
//!
//! The service is the single entry point for all pantry operations, regardless of
//! the UI being used. It owns the store and the in-memory snapshot.
//!
//! ## Snapshot Lifecycle
//!
//! - `refresh()` replaces the snapshot with a full fetch of the collection.
//!   Call it once at startup.
//! - `increment()` and `decrement()` mutate the store, then refresh.
//! - `snapshot()`, `search()` and `summary()` read the snapshot only; they never
//!   touch the store.
//!
//! If any store call fails the error is returned as-is and the snapshot keeps
//! its last successfully fetched value. Nothing is retried.
//!
//! ## Concurrency
//!
//! Mutations are a read followed by a separate write or delete. Two clients
//! mutating the same item can lose an update; the service is meant for a single
//! user session.
//!
//! ## Generic Over InventoryStore
//!
//! `InventoryService<S: InventoryStore>` is generic over the storage backend:
//! - Production: `InventoryService<FileStore>`
//! - Testing: `InventoryService<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{Category, InventoryItem};
use crate::store::InventoryStore;

/// The main service for pantry operations.
///
/// Presentation code observes the snapshot through `snapshot()` and the
/// read-only queries; it never mutates it directly.
pub struct InventoryService<S: InventoryStore> {
    store: S,
    paths: commands::PantryPaths,
    snapshot: Vec<InventoryItem>,
    default_category: Category,
}

impl<S: InventoryStore> InventoryService<S> {
    pub fn new(store: S, paths: commands::PantryPaths) -> Self {
        Self {
            store,
            paths,
            snapshot: Vec::new(),
            default_category: Category::default(),
        }
    }

    /// Category used by `increment` for new items when none is given.
    pub fn with_default_category(mut self, category: Category) -> Self {
        self.default_category = category;
        self
    }

    /// Adds one unit of `name`, then refreshes.
    ///
    /// `category` applies only when the item does not exist yet, and is only
    /// validated then; `None` falls back to the configured default category.
    pub fn increment(
        &mut self,
        name: &str,
        category: Option<&str>,
    ) -> Result<commands::CmdResult> {
        tracing::debug!(name, category, "increment");
        let result =
            commands::increment::run(&mut self.store, name, category, self.default_category)?;
        self.refresh()?;
        Ok(result)
    }

    /// Removes one unit of `name`, deleting it at zero, then refreshes.
    pub fn decrement(&mut self, name: &str) -> Result<commands::CmdResult> {
        tracing::debug!(name, "decrement");
        let result = commands::decrement::run(&mut self.store, name)?;
        self.refresh()?;
        Ok(result)
    }

    /// Replaces the snapshot with a full fetch of the collection.
    pub fn refresh(&mut self) -> Result<&[InventoryItem]> {
        let result = commands::list::run(&self.store).inspect_err(|e| {
            tracing::warn!(error = %e, "refresh failed, keeping previous snapshot");
        })?;
        self.snapshot = result.listed_items;
        tracing::info!(items = self.snapshot.len(), "snapshot refreshed");
        Ok(&self.snapshot)
    }

    pub fn snapshot(&self) -> &[InventoryItem] {
        &self.snapshot
    }

    pub fn search(&self, query: &str) -> SearchResult {
        commands::search::filter(&self.snapshot, query)
    }

    pub fn summary(&self) -> Summary {
        commands::summary::run(&self.snapshot)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::search::SearchResult;
pub use commands::summary::Summary;
pub use commands::{CmdMessage, CmdResult, MessageLevel, PantryPaths};
