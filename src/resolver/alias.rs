use std::ops::Range;

use regex::Regex;

/// Compiled alias grammars, built once per library.
///
/// Two reference forms exist: `{path.to.token}` and `$path.to.token`. A
/// whole-string alias substitutes the referenced token's resolved value with
/// its original type; an embedded alias interpolates into the surrounding
/// string, one occurrence per resolution pass.
#[derive(Debug)]
pub struct AliasPatterns {
	/// The entire trimmed string is a single alias.
	whole: Regex,
	/// An alias embedded in a larger string: `{ref}` anywhere, `$ref` only
	/// when string-initial.
	embedded: Regex,
}

impl AliasPatterns {
	pub fn new() -> Self {
		Self {
			whole: Regex::new(r"^\{([^}]+)\}$|^\$([^$\s]+)$").expect("whole-alias pattern is valid"),
			embedded: Regex::new(r"\{([^}]+)\}|^\$([^$\s]+)").expect("embedded-alias pattern is valid"),
		}
	}

	/// If the entire trimmed string is one alias, return the reference.
	pub fn whole_alias<'a>(&self, value: &'a str) -> Option<&'a str> {
		let captures = self.whole.captures(value.trim())?;
		captures
			.get(1)
			.or_else(|| captures.get(2))
			.map(|group| group.as_str())
	}

	/// Find the first embedded alias. Returns the byte range of the full
	/// match (for splicing) and the reference inside it.
	pub fn first_embedded<'a>(&self, value: &'a str) -> Option<(Range<usize>, &'a str)> {
		let captures = self.embedded.captures(value)?;
		let matched = captures.get(0)?;
		let reference = captures.get(1).or_else(|| captures.get(2))?.as_str();
		Some((matched.range(), reference))
	}
}

impl Default for AliasPatterns {
	fn default() -> Self {
		Self::new()
	}
}
