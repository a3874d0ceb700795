pub mod file_storage;
pub mod memory_storage;
pub mod storage_traits;

#[cfg(test)]
mod storage_tests;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
pub use storage_traits::StorageBackendTrait;
