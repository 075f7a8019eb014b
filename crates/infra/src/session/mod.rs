//! Session store adapters
//!
//! - [`MemorySessionStore`]: process-local, for tests and one-shot scripts
//! - [`FileSessionStore`]: a JSON object file shared between CLI invocations

pub mod file;
pub mod memory;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;
