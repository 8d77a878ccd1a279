use super::InventoryStore;
use crate::error::{PantryError, Result};
use crate::model::{Document, InventoryItem};
use std::collections::HashMap;

/// In-memory collection for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    docs: HashMap<String, Document>,
    unavailable: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the store could not be reached.
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    /// Whether no documents are stored, bypassing the unavailable switch.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    fn check(&self) -> Result<()> {
        if self.unavailable {
            return Err(PantryError::StoreUnavailable(
                "Simulated transport error".to_string(),
            ));
        }
        Ok(())
    }
}

impl InventoryStore for InMemoryStore {
    fn fetch_all(&self) -> Result<Vec<InventoryItem>> {
        self.check()?;
        tracing::debug!(count = self.docs.len(), "fetched collection");
        Ok(self
            .docs
            .iter()
            .map(|(name, doc)| doc.clone().into_item(name.as_str()))
            .collect())
    }

    fn read_one(&self, name: &str) -> Result<Option<Document>> {
        self.check()?;
        let doc = self.docs.get(name).cloned();
        tracing::debug!(name, found = doc.is_some(), "read document");
        Ok(doc)
    }

    fn write_one(&mut self, name: &str, doc: &Document) -> Result<()> {
        self.check()?;
        self.docs.insert(name.to_string(), doc.clone());
        tracing::debug!(name, quantity = doc.quantity, "wrote document");
        Ok(())
    }

    fn delete_one(&mut self, name: &str) -> Result<()> {
        self.check()?;
        let removed = self.docs.remove(name).is_some();
        tracing::debug!(name, removed, "deleted document");
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Category;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_item(mut self, name: &str, category: Category, quantity: u32) -> Self {
            self.store
                .write_one(name, &Document::new(category, quantity))
                .unwrap();
            self
        }

        /// Stores a document with a raw category tag, as older collections may hold.
        pub fn with_raw_item(mut self, name: &str, category: &str, quantity: u32) -> Self {
            let doc = Document {
                category: category.to_string(),
                quantity,
            };
            self.store.write_one(name, &doc).unwrap();
            self
        }

        pub fn with_pantry(self) -> Self {
            self.with_item("apple", Category::Fruit, 3)
                .with_item("banana", Category::Fruit, 1)
                .with_item("rice", Category::Grain, 2)
                .with_item("egg", Category::Dairy, 12)
        }
    }
}
