use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage quota exceeded ({needed} bytes needed, limit {limit})")]
    QuotaExceeded { needed: usize, limit: usize },
    #[error("storage codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Durable string key-value storage, one namespace per workspace.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}
