//! # Folio Infrastructure
//!
//! Concrete implementations of the ports defined in `folio-core`:
//!
//! - `storage` - the post document (JSON file, in-memory)
//! - `assets` - image files on local disk

pub mod assets;
pub mod storage;

pub use assets::LocalImageStore;
pub use storage::{InMemoryPostRepository, JsonFilePostRepository};
