//! Error types for component rendering

/// Errors raised while building or rendering admin components
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
	/// A column descriptor does not name a header and a data accessor
	#[error("invalid column at position {index}: {reason}")]
	InvalidColumn { index: usize, reason: String },

	/// A record does not expose the attribute a column reads
	#[error("{model} has no attribute `{attribute}`")]
	MissingAttribute {
		model: &'static str,
		attribute: String,
	},

	/// A nested component reported a failure
	#[error("component {component} failed to render: {message}")]
	Component {
		component: &'static str,
		message: String,
	},

	/// The request query string could not be parsed
	#[error("invalid query string: {0}")]
	QueryParse(#[from] serde_urlencoded::de::Error),

	/// A link query string could not be encoded
	#[error("failed to encode query string: {0}")]
	QueryEncode(#[from] serde_urlencoded::ser::Error),
}

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;
