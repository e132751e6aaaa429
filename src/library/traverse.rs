use serde_json::{Map, Value};
use tracing::debug;

use super::{Library, Mutate, Mutation};
use crate::path;
use crate::tree::ops::{pick, remove_path, set_path};
use crate::tree::shape::{GROUP_PROJECTION_KEYS, META_KEYS, NodeShape, TOKEN_KEYS, classify};

impl Library {
	/// Project every node except the root into a dotted-path map.
	///
	/// Traversal is depth-first in document order: keys in insertion order,
	/// parents before their children. Tokens project their four `$` fields;
	/// groups project `$type`/`$value`/`$description`. The internals of a
	/// token's `$value` are not nodes and are not visited. No mutation, no
	/// validation beyond shape classification.
	pub fn flatmap(&self) -> Map<String, Value> {
		let mut flat = Map::new();
		walk(&self.tree, "", &mut |node_path, shape, node| {
			flat.insert(node_path.to_owned(), projection(shape, node));
		});
		flat
	}

	/// Offer every node's projection to `transform`, then apply the returned
	/// replacements and deletions as a batch.
	///
	/// Traversal and classification match [`Library::flatmap`]. The batch is
	/// applied only after the traversal completes, so `transform` never
	/// observes a partially-mutated tree. Mutations apply in traversal
	/// order:
	///
	/// - `Some(Mutate::Replace(object))` replaces the node with a copy of
	///   `object`;
	/// - `Some(Mutate::Delete)` on a top-level path removes the key from the
	///   root;
	/// - `Some(Mutate::Delete)` on a nested path is recorded and reported
	///   but leaves the live tree untouched;
	/// - `None` skips the node.
	///
	/// Afterwards every subscriber runs once with the full mutation list,
	/// even when it is empty.
	pub fn mutate(&mut self, mut transform: impl FnMut(&Value) -> Option<Mutate>) {
		let mut mutations: Vec<Mutation> = Vec::new();
		walk(&self.tree, "", &mut |node_path, shape, node| {
			match transform(&projection(shape, node)) {
				Some(Mutate::Replace(object)) => mutations.push(Mutation {
					path: node_path.to_owned(),
					node: Some(object),
				}),
				Some(Mutate::Delete) => mutations.push(Mutation {
					path: node_path.to_owned(),
					node: None,
				}),
				None => {}
			}
		});

		debug!(count = mutations.len(), "applying mutation batch");
		for mutation in &mutations {
			let keys = path::segments(&mutation.path);
			match &mutation.node {
				Some(replacement) => {
					set_path(&mut self.tree, &keys, replacement.clone());
				}
				None if keys.len() == 1 => {
					remove_path(&mut self.tree, &keys);
				}
				// Nested deletes are reported to subscribers but leave the
				// live tree untouched; only root-level keys are physically
				// removed. TODO: decide whether nested deletes should detach
				// the child for real.
				None => {}
			}
		}

		self.notify(Some(&mutations));
	}
}

/// Visit each classified node below `node` depth-first, in document order.
/// Metadata keys are not children; unclassifiable children are skipped and
/// not descended into.
fn walk(node: &Value, prefix: &str, visit: &mut impl FnMut(&str, NodeShape, &Value)) {
	let Some(object) = node.as_object() else {
		return;
	};
	for (key, child) in object {
		if META_KEYS.contains(&key.as_str()) {
			continue;
		}
		let child_path = if prefix.is_empty() {
			key.clone()
		} else {
			format!("{prefix}.{key}")
		};
		match classify(child) {
			Some(NodeShape::Token) => visit(&child_path, NodeShape::Token, child),
			Some(NodeShape::Group) => {
				visit(&child_path, NodeShape::Group, child);
				walk(child, &child_path, visit);
			}
			None => {}
		}
	}
}

fn projection(shape: NodeShape, node: &Value) -> Value {
	match shape {
		NodeShape::Token => pick(node, &TOKEN_KEYS),
		NodeShape::Group => pick(node, &GROUP_PROJECTION_KEYS),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::validate::Validators;
	use serde_json::json;

	fn library() -> Library {
		Library::new(
			json!({
				"color": {
					"$type": "color",
					"$description": "Palette",
					"base": { "$value": "#fff" },
					"accent": { "$value": "{color.base}", "$description": "Accent" },
				},
				"size": {
					"small": { "$value": 4 },
				},
				"stray": 12,
			}),
			Validators::new(),
		)
	}

	#[test]
	fn test_flatmap_document_order() {
		let flat = library().flatmap();
		let paths: Vec<&String> = flat.keys().collect();
		assert_eq!(
			paths,
			["color", "color.base", "color.accent", "size", "size.small"]
		);
	}

	#[test]
	fn test_flatmap_group_projection_excludes_children() {
		let flat = library().flatmap();
		assert_eq!(
			flat["color"],
			json!({ "$type": "color", "$description": "Palette" })
		);
	}

	#[test]
	fn test_flatmap_token_projection_is_full_token() {
		let flat = library().flatmap();
		assert_eq!(
			flat["color.accent"],
			json!({ "$value": "{color.base}", "$description": "Accent" })
		);
	}

	#[test]
	fn test_flatmap_skips_stray_scalars() {
		assert!(!library().flatmap().contains_key("stray"));
	}

	#[test]
	fn test_mutate_replace() {
		let mut library = library();
		library.mutate(|node| {
			(node["$value"] == json!(4)).then(|| Mutate::Replace(json!({ "$value": 8 })))
		});
		let (_, token) = library.get("size.small").unwrap();
		assert_eq!(token, json!({ "$value": 8 }));
	}

	#[test]
	fn test_mutate_transform_sees_projections_of_unmutated_tree() {
		let mut library = library();
		let mut seen = Vec::new();
		library.mutate(|node| {
			seen.push(node.clone());
			// Replacing every token must not affect what later visits see.
			node.get("$value")
				.map(|_| Mutate::Replace(json!({ "$value": "x" })))
		});
		assert!(seen.contains(&json!({ "$value": "{color.base}", "$description": "Accent" })));
		assert!(seen.contains(&json!({ "$value": 4 })));
	}
}
