use serde_json::{Map, Value};

/// Key holding a token's raw value. Its presence is what distinguishes a
/// token from a group.
pub const VALUE_KEY: &str = "$value";

/// Metadata fields shared by tokens and groups; on groups they act as
/// inheritable defaults for descendant tokens.
pub const META_KEYS: [&str; 3] = ["$type", "$description", "$extensions"];

/// Fields projected for a token during traversal and lookup.
pub const TOKEN_KEYS: [&str; 4] = ["$type", "$value", "$description", "$extensions"];

/// Fields projected for a group during traversal. A group never carries
/// `$value`, so in practice this is type and description.
pub const GROUP_PROJECTION_KEYS: [&str; 3] = ["$type", "$value", "$description"];

/// Structural classification of a tree node, determined once and then
/// dispatched on by lookup, traversal, and mutation alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
	Token,
	Group,
}

/// Token shape: an object carrying `$value`, with optional string `$type`
/// and `$description` and arbitrary `$extensions`.
pub fn is_token(node: &Value) -> bool {
	let Some(object) = node.as_object() else {
		return false;
	};
	object.contains_key(VALUE_KEY) && meta_fields_well_typed(object)
}

/// Group-metadata shape: only the optional metadata fields, no `$value` and
/// no children.
pub fn is_group_meta(node: &Value) -> bool {
	let Some(object) = node.as_object() else {
		return false;
	};
	!object.contains_key(VALUE_KEY)
		&& object.keys().all(|key| META_KEYS.contains(&key.as_str()))
		&& meta_fields_well_typed(object)
}

/// Group shape: no `$value`; metadata fields plus arbitrary extra keys
/// holding nested nodes. Children are not validated here.
pub fn is_group_with_children(node: &Value) -> bool {
	let Some(object) = node.as_object() else {
		return false;
	};
	!object.contains_key(VALUE_KEY) && meta_fields_well_typed(object)
}

/// Classify a node, or return None when it satisfies neither shape.
pub fn classify(node: &Value) -> Option<NodeShape> {
	if is_token(node) {
		Some(NodeShape::Token)
	} else if is_group_with_children(node) {
		Some(NodeShape::Group)
	} else {
		None
	}
}

fn meta_fields_well_typed(object: &Map<String, Value>) -> bool {
	object.get("$type").is_none_or(Value::is_string)
		&& object.get("$description").is_none_or(Value::is_string)
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_token_shape() {
		assert!(is_token(&json!({ "$value": "#fff" })));
		assert!(is_token(&json!({ "$type": "color", "$value": 1 })));
		assert!(!is_token(&json!({ "$type": "color" })));
		assert!(!is_token(&json!("#fff")));
	}

	#[test]
	fn test_token_rejects_ill_typed_metadata() {
		assert!(!is_token(&json!({ "$value": 1, "$type": 2 })));
		assert!(!is_token(&json!({ "$value": 1, "$description": [] })));
	}

	#[test]
	fn test_group_meta_shape() {
		assert!(is_group_meta(&json!({})));
		assert!(is_group_meta(&json!({ "$type": "color", "$description": "d" })));
		assert!(!is_group_meta(&json!({ "$value": 1 })));
		assert!(!is_group_meta(&json!({ "$type": "color", "child": {} })));
	}

	#[test]
	fn test_group_with_children_shape() {
		assert!(is_group_with_children(
			&json!({ "$type": "color", "base": { "$value": "#fff" } })
		));
		assert!(!is_group_with_children(&json!({ "$value": 1 })));
	}

	#[test]
	fn test_classify() {
		assert_eq!(classify(&json!({ "$value": 1 })), Some(NodeShape::Token));
		assert_eq!(
			classify(&json!({ "a": { "$value": 1 } })),
			Some(NodeShape::Group)
		);
		assert_eq!(classify(&json!({ "$type": [], "a": {} })), None);
		assert_eq!(classify(&json!(42)), None);
	}
}
