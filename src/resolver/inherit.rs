use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ResolveError, Result};
use crate::path;
use crate::resolver::alias::AliasPatterns;
use crate::resolver::value::resolve_value;
use crate::tree::ops::{get_path, merge, pick};
use crate::tree::shape::{META_KEYS, VALUE_KEY};
use crate::validate::Validators;

/// Resolve a candidate token addressed by `reference`.
///
/// Inherited context comes from every ancestor group between the root and
/// the candidate's parent (the root included): each ancestor's
/// `$type`/`$description`/`$extensions` are merged root-to-leaf, closer
/// ancestors overriding farther ones, and the candidate's own fields merge on
/// top. The merged `$value` is then alias-resolved leniently and, when a
/// validator is registered for the merged `$type`, normalized through it:
///
/// - accept: the validator's output becomes the final `$value`;
/// - reject, strict: [`ResolveError::ValidationFailed`];
/// - reject, lenient: `$value` falls back to the candidate's original,
///   unresolved value.
///
/// The candidate need not be the node currently stored at `reference`, which
/// makes this usable to preview a prospective edit.
pub fn resolve_token(
	tree: &Value,
	patterns: &AliasPatterns,
	validators: &Validators,
	reference: &str,
	candidate: &Value,
	strict: bool,
) -> Result<Value> {
	let segments = path::segments(reference);

	let mut merged = Map::new();
	for depth in 0..segments.len() {
		if let Some(ancestor) = get_path(tree, &segments[..depth]) {
			merge(&mut merged, &pick(ancestor, &META_KEYS));
		}
	}
	merge(&mut merged, candidate);

	// The merged value always resolves leniently; strictness only governs
	// how a validation failure surfaces.
	let original_value = merged.get(VALUE_KEY).cloned();
	let resolved_value = match &original_value {
		Some(raw) => Some(resolve_value(tree, patterns, raw, false)?),
		None => None,
	};

	let validator = merged
		.get("$type")
		.and_then(Value::as_str)
		.and_then(|tag| validators.get(tag));

	match (resolved_value, validator) {
		(Some(resolved), Some(validator)) => match validator.validate(&resolved) {
			Some(normalized) => {
				merged.insert(VALUE_KEY.to_owned(), normalized);
			}
			None if strict => {
				return Err(ResolveError::ValidationFailed {
					path: path::normalize(reference),
				});
			}
			None => {
				// Fall back to the candidate's original value, not the
				// partially resolved one.
				let fallback = candidate.get(VALUE_KEY).cloned().unwrap_or(Value::Null);
				merged.insert(VALUE_KEY.to_owned(), fallback);
			}
		},
		(Some(resolved), None) => {
			merged.insert(VALUE_KEY.to_owned(), resolved);
		}
		(None, _) => {}
	}

	debug!(reference, "resolved token");
	Ok(Value::Object(merged))
}
