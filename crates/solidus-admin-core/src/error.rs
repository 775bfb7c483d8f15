//! Engine error types

use solidus_admin_ui::RenderError;

/// Errors raised while booting the engine or building components from settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
	#[error(transparent)]
	Render(#[from] RenderError),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Settings failed validation at boot
	#[error("invalid settings: {0}")]
	InvalidSettings(String),

	/// No component is registered under this key
	#[error("unknown component `{0}`")]
	UnknownComponent(String),

	/// No table preset is configured under this name
	#[error("unknown table preset `{0}`")]
	UnknownPreset(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
