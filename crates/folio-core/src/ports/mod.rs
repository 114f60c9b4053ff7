//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod assets;
mod repository;

pub use assets::ImageStore;
pub use repository::PostRepository;
