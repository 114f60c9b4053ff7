//! Post document storage - JSON file and in-memory fallback.

mod json_file;
mod memory;

pub use json_file::JsonFilePostRepository;
pub use memory::InMemoryPostRepository;
