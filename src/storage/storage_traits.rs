use crate::errors::Result;

/// Trait for key-value storage backend operations
pub trait StorageBackendTrait: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
