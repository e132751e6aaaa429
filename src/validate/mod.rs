//! Per-type validator capabilities.
//!
//! This module handles:
//! - The `Validator` trait implemented by per-`$type` value checks
//! - The registry mapping `$type` tags to validators

use std::collections::HashMap;

use serde_json::Value;

/// A validation capability for one token type.
///
/// Given a candidate (already alias-resolved) value, a validator either
/// accepts it, returning a normalized form, or rejects it with `None`.
pub trait Validator {
	fn validate(&self, candidate: &Value) -> Option<Value>;
}

/// Any plain closure with the right signature is a validator.
impl<F> Validator for F
where
	F: Fn(&Value) -> Option<Value>,
{
	fn validate(&self, candidate: &Value) -> Option<Value> {
		self(candidate)
	}
}

/// Registry of validators keyed by `$type` tag.
///
/// A missing entry means "accept the resolved value unmodified."
#[derive(Default)]
pub struct Validators {
	entries: HashMap<String, Box<dyn Validator>>,
}

impl Validators {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a validator for a type tag, replacing any existing one.
	/// Builder-style so registries compose at construction.
	pub fn register(
		mut self,
		type_tag: impl Into<String>,
		validator: impl Validator + 'static,
	) -> Self {
		self.entries.insert(type_tag.into(), Box::new(validator));
		self
	}

	/// Look up the validator for a type tag.
	pub fn get(&self, type_tag: &str) -> Option<&dyn Validator> {
		self.entries.get(type_tag).map(Box::as_ref)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_closure_is_a_validator() {
		let validators = Validators::new().register("color", |value: &Value| {
			value.as_str().map(|text| json!(text.to_lowercase()))
		});
		let validator = validators.get("color").unwrap();
		assert_eq!(validator.validate(&json!("#FFF")), Some(json!("#fff")));
		assert_eq!(validator.validate(&json!(1)), None);
	}

	#[test]
	fn test_missing_tag_has_no_validator() {
		let validators = Validators::new();
		assert!(validators.get("dimension").is_none());
	}

	#[test]
	fn test_register_replaces_existing() {
		let validators = Validators::new()
			.register("color", |_: &Value| Some(json!("first")))
			.register("color", |_: &Value| Some(json!("second")));
		let validator = validators.get("color").unwrap();
		assert_eq!(validator.validate(&json!(null)), Some(json!("second")));
	}
}
