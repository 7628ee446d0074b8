//! # polyglot-rs-core
//!
//! Error types and logging integration for the polyglot-rs library.
//! This crate has no internal dependencies and provides the foundation
//! for the plural, template, and translation crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result alias
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;

// Re-export the most commonly used types at the crate root.
pub use error::{PolyglotError, PolyglotResult};
