use thiserror::Error;

#[derive(Error, Debug)]
pub enum PantryError {
    /// Any failure to reach or execute an operation against the store.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Invalid item name: {0:?}")]
    InvalidName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

impl PantryError {
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, PantryError::StoreUnavailable(_))
    }
}

pub type Result<T> = std::result::Result<T, PantryError>;
