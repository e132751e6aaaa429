use serde_json::{Map, Value};

/// Walk `keys` down nested objects and return the node, if any.
///
/// An empty key sequence returns the root itself.
pub fn get_path<'a>(root: &'a Value, keys: &[&str]) -> Option<&'a Value> {
	let mut cursor = root;
	for key in keys {
		cursor = cursor.as_object()?.get(*key)?;
	}
	Some(cursor)
}

/// Write `value` at `keys`, creating intermediate objects as needed.
///
/// Non-object nodes along the way are overwritten with fresh objects.
/// Returns false when the root is not an object or `keys` is empty.
pub fn set_path(root: &mut Value, keys: &[&str], value: Value) -> bool {
	let Some(object) = root.as_object_mut() else {
		return false;
	};
	set_path_in_object(object, keys, value)
}

fn set_path_in_object(object: &mut Map<String, Value>, keys: &[&str], value: Value) -> bool {
	match keys {
		[] => false,
		[key] => {
			object.insert((*key).to_owned(), value);
			true
		}
		[key, rest @ ..] => {
			let entry = object
				.entry((*key).to_owned())
				.or_insert_with(|| Value::Object(Map::new()));
			if !entry.is_object() {
				*entry = Value::Object(Map::new());
			}
			let child = entry.as_object_mut().expect("entry was just made an object");
			set_path_in_object(child, rest, value)
		}
	}
}

/// Remove the node at `keys` from its parent object.
///
/// Returns true when a key was actually removed.
pub fn remove_path(root: &mut Value, keys: &[&str]) -> bool {
	let Some(object) = root.as_object_mut() else {
		return false;
	};
	remove_path_in_object(object, keys)
}

fn remove_path_in_object(object: &mut Map<String, Value>, keys: &[&str]) -> bool {
	match keys {
		[] => false,
		[key] => object.remove(*key).is_some(),
		[key, rest @ ..] => match object.get_mut(*key).and_then(Value::as_object_mut) {
			Some(child) => remove_path_in_object(child, rest),
			None => false,
		},
	}
}

/// Shallow-copy the listed keys that exist on an object value.
///
/// Non-object inputs yield an empty object.
pub fn pick(value: &Value, keys: &[&str]) -> Value {
	let mut picked = Map::new();
	if let Some(object) = value.as_object() {
		for key in keys {
			if let Some(field) = object.get(*key) {
				picked.insert((*key).to_owned(), field.clone());
			}
		}
	}
	Value::Object(picked)
}

/// Shallow-merge `overlay`'s fields onto `target`; overlay wins on conflict.
///
/// Non-object overlays are ignored.
pub fn merge(target: &mut Map<String, Value>, overlay: &Value) {
	if let Some(object) = overlay.as_object() {
		for (key, field) in object {
			target.insert(key.clone(), field.clone());
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_get_path_nested() {
		let tree = json!({ "a": { "b": { "c": 1 } } });
		assert_eq!(get_path(&tree, &["a", "b", "c"]), Some(&json!(1)));
	}

	#[test]
	fn test_get_path_empty_keys_returns_root() {
		let tree = json!({ "a": 1 });
		assert_eq!(get_path(&tree, &[]), Some(&tree));
	}

	#[test]
	fn test_get_path_miss() {
		let tree = json!({ "a": { "b": 1 } });
		assert_eq!(get_path(&tree, &["a", "c"]), None);
		assert_eq!(get_path(&tree, &["a", "b", "c"]), None);
	}

	#[test]
	fn test_set_path_creates_intermediates() {
		let mut tree = json!({});
		assert!(set_path(&mut tree, &["a", "b"], json!(2)));
		assert_eq!(tree, json!({ "a": { "b": 2 } }));
	}

	#[test]
	fn test_set_path_overwrites_scalar_intermediate() {
		let mut tree = json!({ "a": 1 });
		assert!(set_path(&mut tree, &["a", "b"], json!(2)));
		assert_eq!(tree, json!({ "a": { "b": 2 } }));
	}

	#[test]
	fn test_set_path_rejects_non_object_root() {
		let mut tree = json!(1);
		assert!(!set_path(&mut tree, &["a"], json!(2)));
	}

	#[test]
	fn test_remove_path() {
		let mut tree = json!({ "a": { "b": 1, "c": 2 } });
		assert!(remove_path(&mut tree, &["a", "b"]));
		assert_eq!(tree, json!({ "a": { "c": 2 } }));
		assert!(!remove_path(&mut tree, &["a", "b"]));
	}

	#[test]
	fn test_pick_existing_keys_only() {
		let value = json!({ "$type": "color", "x": 1 });
		assert_eq!(
			pick(&value, &["$type", "$description"]),
			json!({ "$type": "color" })
		);
	}

	#[test]
	fn test_pick_non_object() {
		assert_eq!(pick(&json!("text"), &["$type"]), json!({}));
	}

	#[test]
	fn test_merge_overlay_wins() {
		let mut target = json!({ "$type": "color", "keep": true })
			.as_object()
			.cloned()
			.unwrap();
		merge(&mut target, &json!({ "$type": "dimension" }));
		assert_eq!(
			Value::Object(target),
			json!({ "$type": "dimension", "keep": true })
		);
	}
}
