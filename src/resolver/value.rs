use serde_json::{Map, Value};
use tracing::trace;

use crate::error::{ResolveError, Result};
use crate::path;
use crate::resolver::alias::AliasPatterns;
use crate::tree::ops::get_path;
use crate::tree::shape::VALUE_KEY;

/// Resolve a possibly-aliased, possibly-nested raw value against `tree`.
///
/// Pure: the tree is never mutated. Evaluation order per string:
/// 1. Whole-string alias: the referenced token's value is substituted with
///    its original type, recursively resolved.
/// 2. Interpolation: one embedded alias is replaced by the referenced value
///    coerced to a string, then the result is re-scanned, so several aliases
///    in one string resolve one per pass.
/// 3. Objects resolve entry-wise and arrays element-wise; anything else
///    returns unchanged.
///
/// `strict` turns unresolved references into [`ResolveError::UnresolvedReference`].
/// When lenient, a whole-alias miss degrades through the interpolation branch
/// (usually to the empty string) and an embedded miss substitutes `""`.
/// Cyclic alias chains fail with [`ResolveError::CircularReference`] in both
/// modes.
pub fn resolve_value(
	tree: &Value,
	patterns: &AliasPatterns,
	value: &Value,
	strict: bool,
) -> Result<Value> {
	let mut visited = Vec::new();
	resolve_inner(tree, patterns, value, strict, &mut visited)
}

fn resolve_inner(
	tree: &Value,
	patterns: &AliasPatterns,
	value: &Value,
	strict: bool,
	visited: &mut Vec<String>,
) -> Result<Value> {
	if let Some(text) = value.as_str() {
		// Whole-string alias: substitute the referenced token's resolved
		// value, preserving its type.
		if let Some(reference) = patterns.whole_alias(text) {
			match lookup_referenced_value(tree, reference, visited)? {
				Some(referenced) => {
					let resolved = resolve_inner(tree, patterns, &referenced, strict, visited);
					visited.pop();
					return resolved;
				}
				None if strict => {
					return Err(ResolveError::UnresolvedReference {
						reference: reference.to_owned(),
					});
				}
				// A lenient miss falls through to the interpolation branch.
				None => {}
			}
		}

		// Interpolation: splice in one referenced value, then re-scan.
		if let Some((range, reference)) = patterns.first_embedded(text) {
			let substitution = match lookup_referenced_value(tree, reference, visited)? {
				Some(referenced) => {
					let resolved = resolve_inner(tree, patterns, &referenced, false, visited);
					visited.pop();
					coerce_to_string(&resolved?)
				}
				None if strict => {
					return Err(ResolveError::UnresolvedReference {
						reference: reference.to_owned(),
					});
				}
				None => String::new(),
			};

			let mut spliced = String::with_capacity(text.len() + substitution.len());
			spliced.push_str(&text[..range.start]);
			spliced.push_str(&substitution);
			spliced.push_str(&text[range.end..]);
			trace!(reference, "interpolated alias");
			return resolve_inner(tree, patterns, &Value::String(spliced), strict, visited);
		}
	}

	match value {
		Value::Object(entries) => {
			let mut resolved = Map::new();
			for (key, entry) in entries {
				if is_falsy(entry) {
					resolved.insert(key.clone(), entry.clone());
				} else {
					resolved.insert(
						key.clone(),
						resolve_inner(tree, patterns, entry, strict, visited)?,
					);
				}
			}
			Ok(Value::Object(resolved))
		}
		Value::Array(items) => {
			let mut resolved = Vec::with_capacity(items.len());
			for item in items {
				if is_falsy(item) {
					resolved.push(item.clone());
				} else {
					resolved.push(resolve_inner(tree, patterns, item, strict, visited)?);
				}
			}
			Ok(Value::Array(resolved))
		}
		// Numbers, booleans, null, and non-aliased strings resolve to
		// themselves.
		other => Ok(other.clone()),
	}
}

/// Look up the token a reference points at and return its raw `$value`.
///
/// Returns `Ok(None)` when the path misses or the node is not a token. On a
/// hit, the normalized reference is pushed onto `visited` (callers pop it
/// after resolving the returned value); a reference already in `visited`
/// means the alias chain loops back on itself.
fn lookup_referenced_value(
	tree: &Value,
	reference: &str,
	visited: &mut Vec<String>,
) -> Result<Option<Value>> {
	let normalized = path::normalize(reference);
	if visited.iter().any(|seen| *seen == normalized) {
		return Err(ResolveError::CircularReference {
			reference: normalized,
		});
	}

	let keys = path::segments(reference);
	match get_path(tree, &keys).and_then(|node| node.get(VALUE_KEY)) {
		Some(raw) => {
			visited.push(normalized);
			Ok(Some(raw.clone()))
		}
		None => Ok(None),
	}
}

/// Coerce a resolved value into string form for interpolation.
fn coerce_to_string(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		Value::Null => String::new(),
		other => other.to_string(),
	}
}

/// Mirror of the falsiness rule used for structured values: null, false,
/// zero, and the empty string pass through without resolution.
fn is_falsy(value: &Value) -> bool {
	match value {
		Value::Null => true,
		Value::Bool(flag) => !flag,
		Value::Number(number) => number.as_f64() == Some(0.0),
		Value::String(text) => text.is_empty(),
		_ => false,
	}
}
