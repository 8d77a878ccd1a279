use crate::config::PantryConfig;
use crate::model::InventoryItem;
use std::path::PathBuf;

pub mod config;
pub mod decrement;
pub mod increment;
pub mod list;
pub mod search;
pub mod summary;

#[derive(Debug, Clone)]
pub struct PantryPaths {
    pub data_dir: PathBuf,
}

impl PantryPaths {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Items as they stand after a mutation. A removed item is reported with quantity 0.
    pub affected_items: Vec<InventoryItem>,
    pub listed_items: Vec<InventoryItem>,
    pub config: Option<PantryConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_items(mut self, items: Vec<InventoryItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_config(mut self, config: PantryConfig) -> Self {
        self.config = Some(config);
        self
    }
}
