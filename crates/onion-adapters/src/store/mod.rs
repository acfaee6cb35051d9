//! Document store adapters.

mod local;
mod memory;

pub use local::LocalConfigStore;
pub use memory::MemoryConfigStore;
