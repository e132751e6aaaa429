/// Library-level structured errors for token resolution.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// Resolution is lenient by default; these errors only surface when a caller
/// opts into strict mode, with the exception of [`ResolveError::CircularReference`],
/// which is raised in both modes because the alternative is unbounded recursion.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
	#[error("Failed to resolve reference: {reference}")]
	UnresolvedReference { reference: String },

	#[error("Circular alias chain detected at: {reference}")]
	CircularReference { reference: String },

	#[error("Validation failed for token: {path}")]
	ValidationFailed { path: String },
}

/// Result type alias using ResolveError.
pub type Result<T> = std::result::Result<T, ResolveError>;
