//! # Application Layer
//!
//! Provider/gateway interfaces and the two use cases: the proxy turn handler
//! and the client chat session.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
