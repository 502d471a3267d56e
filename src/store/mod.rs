//! Key-value blob persistence used by the roster.

pub mod memory;
pub mod migrate;
pub mod sqlite;

use crate::errors::AppResult;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Opaque string store: one value per key, overwritten on every `set`.
pub trait BlobStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}
