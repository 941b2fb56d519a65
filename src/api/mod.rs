//! Chord sheet WASM API
//!
//! The JavaScript-facing surface of the engine.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, JS value conversion, error mapping
//! - `types`: result objects returned to JavaScript
//! - `core`: the exported functions

pub mod helpers;
pub mod types;
pub mod core;

pub use core::*;
