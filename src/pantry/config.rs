use crate::error::{PantryError, Result};
use crate::model::Category;
use crate::store::DEFAULT_COLLECTION;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by `get`/`set`, in display order.
pub const CONFIG_KEYS: [&str; 2] = ["collection", "default-category"];

/// Configuration for pantry, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PantryConfig {
    /// Name of the document collection holding the items
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Category given to new items added without one
    #[serde(default)]
    pub default_category: Category,
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

impl Default for PantryConfig {
    fn default() -> Self {
        Self {
            collection: default_collection(),
            default_category: Category::default(),
        }
    }
}

impl PantryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PantryError::Io)?;
        let config: PantryConfig =
            serde_json::from_str(&content).map_err(PantryError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PantryError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PantryError::Serialization)?;
        fs::write(config_path, content).map_err(PantryError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "collection" => Some(self.collection.clone()),
            "default-category" => Some(self.default_category.to_string()),
            _ => None,
        }
    }

    /// Set a value by key. Errors are user-facing messages.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "collection" => {
                let value = value.trim();
                if value.is_empty() || value.contains(['/', '\\']) {
                    return Err(format!("Invalid collection name: {:?}", value));
                }
                self.collection = value.to_string();
                Ok(())
            }
            "default-category" => {
                self.default_category = value.parse().map_err(|e: PantryError| e.to_string())?;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
