//! # Folio Core
//!
//! The domain layer of the Folio blog backend.
//! This crate contains the post model, the storage ports and the post store
//! service that keeps post records and their image files consistent.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use service::PostStore;
