//! Tree primitives for the token tree.
//!
//! This module handles:
//! - Path-addressed reads and writes over `serde_json::Value`
//! - Shallow pick/merge used by projection and inheritance
//! - Structural classification of nodes as tokens or groups

pub mod ops;
pub mod shape;

pub use ops::{get_path, merge, pick, remove_path, set_path};
pub use shape::{
	GROUP_PROJECTION_KEYS, META_KEYS, NodeShape, TOKEN_KEYS, classify, is_group_meta,
	is_group_with_children, is_token,
};
