//! Token reference normalization.
//!
//! References address nodes with either `.` or `/` as separator; internally
//! everything is canonicalized to the dotted form.

/// Normalize a token reference into canonical dotted form.
///
/// `"color/brand/primary"` and `"color.brand.primary"` address the same node.
pub fn normalize(reference: &str) -> String {
	segments(reference).join(".")
}

/// Split a reference on `.` or `/` into its key sequence, dropping empty
/// segments.
pub fn segments(reference: &str) -> Vec<&str> {
	reference
		.split(['.', '/'])
		.filter(|segment| !segment.is_empty())
		.collect()
}
