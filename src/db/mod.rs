pub mod initialize;
pub mod kv;
pub mod log;
pub mod pool;

pub use kv::{KvStore, MemoryStore};
pub use pool::DbPool;
