use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The action a `mutate` transform requests for one node.
///
/// Returning `None` from the transform means "no change, skip."
#[derive(Debug, Clone, PartialEq)]
pub enum Mutate {
	/// Replace the node at its path with a copy of this object.
	Replace(Value),
	/// Delete the node at its path.
	Delete,
}

/// One recorded mutation: the node's dotted path and the replacement object,
/// with `None` meaning deletion. Subscribers receive the full batch after it
/// has been applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mutation {
	pub path: String,
	pub node: Option<Value>,
}

/// Handle returned by `subscribe`, accepted by `unsubscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub(crate) u64);
