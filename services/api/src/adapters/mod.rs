pub mod memory;
pub mod storage;

pub use memory::MemoryStorageAdapter;
pub use storage::FileStorageAdapter;
