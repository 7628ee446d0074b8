//! # polyglot-rs-template
//!
//! The message template renderer: `{{ name }}` placeholder substitution
//! over a string-keyed value map.
//!
//! The translation resolver treats this crate as a black box with one
//! contract: [`render`] takes a template and parameters and either produces
//! text or fails, and any failure is the resolver's cue to fall back.
//!
//! ## Modules
//!
//! - [`context`] - Parameter values and the parameter map
//! - [`renderer`] - Tokenization and substitution
//!
//! ## Quick Start
//!
//! ```
//! use polyglot_rs_template::{render, Params, Value};
//!
//! let mut params = Params::new();
//! params.insert("name".to_string(), Value::from("Ada"));
//! assert_eq!(render("Hello, {{name}}", &params).unwrap(), "Hello, Ada");
//! ```

pub mod context;
pub mod renderer;

pub use context::{params_from_json, Params, Value};
pub use renderer::render;
