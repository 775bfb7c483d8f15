//! Component container
//!
//! Maps component keys such as `"ui/pagination"` to factories, so hosts can
//! swap a built-in component for their own before tables are built.

use crate::error::{EngineError, Result};
use solidus_admin_ui::PaginationFactory;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Factory the container holds: builds a component from a page's
/// [`PageInfo`](solidus_admin_ui::PageInfo).
///
/// Only page-driven components such as `"ui/pagination"` are registered;
/// the main navigation is started by the engine rather than looked up here.
pub type ComponentFactory = PaginationFactory;

/// Registry of page-driven component factories by key.
///
/// Clones share the same registrations.
#[derive(Clone, Default)]
pub struct Container {
	factories: Arc<RwLock<HashMap<String, ComponentFactory>>>,
}

impl Container {
	/// Creates an empty container.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `factory` under `key`, returning the one it replaces.
	///
	/// # Examples
	///
	/// ```
	/// use solidus_admin_core::Container;
	/// use solidus_admin_ui::Pagination;
	///
	/// let container = Container::new();
	/// assert!(container.register("ui/pagination", Pagination::factory()).is_none());
	/// assert!(container.contains("ui/pagination"));
	/// ```
	pub fn register(
		&self,
		key: impl Into<String>,
		factory: ComponentFactory,
	) -> Option<ComponentFactory> {
		let key = key.into();
		tracing::debug!(key = %key, "registering component");
		self.factories
			.write()
			.unwrap_or_else(PoisonError::into_inner)
			.insert(key, factory)
	}

	/// Looks up the factory registered under `key`.
	pub fn component(&self, key: &str) -> Result<ComponentFactory> {
		let factories = self.factories.read().unwrap_or_else(PoisonError::into_inner);
		match factories.get(key) {
			Some(factory) => Ok(Arc::clone(factory)),
			None => {
				tracing::warn!(key, "unknown component requested");
				Err(EngineError::UnknownComponent(key.to_string()))
			}
		}
	}

	/// Returns whether a factory is registered under `key`.
	pub fn contains(&self, key: &str) -> bool {
		self.factories
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.contains_key(key)
	}

	/// Registered keys, sorted.
	pub fn keys(&self) -> Vec<String> {
		let mut keys: Vec<String> = self
			.factories
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.keys()
			.cloned()
			.collect();
		keys.sort();
		keys
	}
}

impl std::fmt::Debug for Container {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Container")
			.field("keys", &self.keys())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use solidus_admin_ui::Pagination;

	#[rstest]
	fn test_unknown_component() {
		let container = Container::new();
		let err = container.component("ui/missing").err().unwrap();
		assert_eq!(err.to_string(), "unknown component `ui/missing`");
	}

	#[rstest]
	fn test_register_replaces() {
		let container = Container::new();
		container.register("ui/pagination", Pagination::factory());
		assert!(container.register("ui/pagination", Pagination::factory()).is_some());
		assert_eq!(container.keys(), vec!["ui/pagination".to_string()]);
	}

	#[rstest]
	fn test_clones_share_registrations() {
		let container = Container::new();
		let clone = container.clone();
		clone.register("ui/pagination", Pagination::factory());
		assert!(container.contains("ui/pagination"));
	}
}
