//! Tokentree - design token tree resolution and mutation.
//!
//! This library provides the core engine for working with a hierarchical
//! tree of design tokens, including:
//! - Alias and interpolation resolution (`{ref}` and `$ref` grammars)
//! - Ancestor metadata inheritance, computed on demand
//! - Pluggable per-type validator dispatch
//! - Whole-tree traversal, projection, and batch mutation
//! - Synchronous change notification for loads and mutations
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use tokentree::{Library, Validators};
//!
//! let tree = json!({
//! 	"color": {
//! 		"$type": "color",
//! 		"base": { "$value": "#fff" },
//! 		"accent": { "$value": "{color.base}" },
//! 	}
//! });
//! let validators = Validators::new().register("color", |value: &serde_json::Value| {
//! 	value.as_str().map(|text| json!(text.to_lowercase()))
//! });
//! let library = Library::new(tree, validators);
//!
//! let (path, candidate) = library.get("color/accent").unwrap();
//! let resolved = library.resolve(&path, &candidate, false).unwrap();
//! assert_eq!(resolved["$value"], json!("#fff"));
//! assert_eq!(resolved["$type"], json!("color"));
//! ```

pub mod error;
pub mod library;
pub mod path;
pub mod resolver;
pub mod tree;
pub mod validate;

pub use error::{ResolveError, Result};
pub use library::{Library, Mutate, Mutation, SubscriberId};
pub use validate::{Validator, Validators};
