//! Alias and inheritance resolution.
//!
//! This module handles:
//! - Alias grammar compilation (`{ref}` and `$ref` forms)
//! - Pure value resolution with interpolation and cycle detection
//! - Ancestor metadata inheritance and validator dispatch

pub mod alias;
pub mod inherit;
pub mod value;

pub use alias::AliasPatterns;
pub use inherit::resolve_token;
pub use value::resolve_value;
