//! TCAnnex Core Library
//!
//! This crate provides the shared building blocks for the TCAnnex CPRT client:
//! - Record types for documents, elements and relationships
//! - Envelope decoding for API responses
//! - Client configuration

pub mod config;
pub mod models;

// Re-export commonly used types
pub use config::{ClientConfig, API_KEY_ENV, DEFAULT_BASE_URL};
pub use models::*;
