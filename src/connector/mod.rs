//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Upstream model clients (Gemini, in-process mock)
//! - The HTTP gateway the chat client uses to reach the proxy
//! - The proxy's HTTP API (container wiring, router, controllers)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
