//! Image asset storage.

mod local;

pub use local::LocalImageStore;
