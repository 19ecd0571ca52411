//! Persistence: key-value stores and the records kept in them.

pub mod records;
pub mod store;

pub use records::PersistedState;
pub use store::{FileStore, KvStore, MemoryStore};
