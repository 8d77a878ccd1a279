use super::{InventoryStore, DEFAULT_COLLECTION};
use crate::error::{PantryError, Result};
use crate::model::{Document, InventoryItem};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A document collection kept as one JSON map on disk: `<root>/<collection>.json`.
///
/// Every I/O or decode failure surfaces as `StoreUnavailable`; callers never see
/// the underlying `io::Error`.
pub struct FileStore {
    root: PathBuf,
    collection: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }

    pub fn with_collection(mut self, collection: &str) -> Self {
        self.collection = collection.to_string();
        self
    }

    pub fn collection_path(&self) -> PathBuf {
        self.root.join(format!("{}.json", self.collection))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(unavailable)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<BTreeMap<String, Document>> {
        let path = self.collection_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&path).map_err(unavailable)?;
        serde_json::from_str(&content).map_err(unavailable)
    }

    fn save(&self, docs: &BTreeMap<String, Document>) -> Result<()> {
        self.ensure_dir(&self.root)?;

        let content = serde_json::to_string_pretty(docs).map_err(unavailable)?;

        // Write to a sibling temp file, then rename over the collection.
        let tmp_file = self
            .root
            .join(format!(".{}-{}.tmp", self.collection, std::process::id()));
        fs::write(&tmp_file, content).map_err(unavailable)?;
        if let Err(e) = fs::rename(&tmp_file, self.collection_path()) {
            let _ = fs::remove_file(&tmp_file);
            return Err(unavailable(e));
        }
        Ok(())
    }
}

fn unavailable<E: std::fmt::Display>(err: E) -> PantryError {
    tracing::warn!(error = %err, "inventory store call failed");
    PantryError::StoreUnavailable(err.to_string())
}

impl InventoryStore for FileStore {
    fn fetch_all(&self) -> Result<Vec<InventoryItem>> {
        let docs = self.load()?;
        tracing::debug!(collection = %self.collection, count = docs.len(), "fetched collection");
        Ok(docs
            .into_iter()
            .map(|(name, doc)| doc.into_item(name))
            .collect())
    }

    fn read_one(&self, name: &str) -> Result<Option<Document>> {
        let mut docs = self.load()?;
        let doc = docs.remove(name);
        tracing::debug!(name, found = doc.is_some(), "read document");
        Ok(doc)
    }

    fn write_one(&mut self, name: &str, doc: &Document) -> Result<()> {
        let mut docs = self.load()?;
        docs.insert(name.to_string(), doc.clone());
        self.save(&docs)?;
        tracing::debug!(name, quantity = doc.quantity, "wrote document");
        Ok(())
    }

    fn delete_one(&mut self, name: &str) -> Result<()> {
        let mut docs = self.load()?;
        if docs.remove(name).is_none() {
            tracing::debug!(name, "delete of absent document");
            return Ok(());
        }
        self.save(&docs)?;
        tracing::debug!(name, "deleted document");
        Ok(())
    }
}
