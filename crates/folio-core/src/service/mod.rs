//! Services - business operations composed from the ports.

mod post_store;

pub use post_store::PostStore;
