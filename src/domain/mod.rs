//! # Domain Layer
//!
//! Conversation models and the error taxonomy.
//! This layer is independent of HTTP, providers and the runtime.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
