//! Admin settings
//!
//! Settings are layered in priority order:
//!
//! 1. environment overrides (`SOLIDUS_ADMIN_*`),
//! 2. a TOML settings file,
//! 3. built-in defaults.
//!
//! ```toml
//! mount_path = "/admin"
//! per_page = 25
//!
//! [[main_nav]]
//! key = "orders"
//! route = "orders"          # resolved to /admin/orders
//! icon = "inbox-line"
//! position = 10
//!
//! [tables.users]
//! columns = [
//!     { header = "email", data = "email" },
//!     { header = "created_at", data = "created_at", class_name = "w-32" },
//! ]
//! ```

use crate::error::{EngineError, Result};
use crate::main_nav::{NavItem, is_under};
use serde::{Deserialize, Serialize};
use solidus_admin_ui::{ColumnDescriptor, DEFAULT_PAGE_PARAM};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

/// Prefix shared by every environment override.
pub const ENV_PREFIX: &str = "SOLIDUS_ADMIN_";

/// Columns configured for one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TablePreset {
	pub columns: Vec<ColumnDescriptor>,
}

/// Engine-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdminSettings {
	/// Path the admin is mounted under; every main_nav route lies beneath it
	pub mount_path: String,
	/// Records shown per table page
	pub per_page: usize,
	/// Query parameter carrying the page number
	pub page_param: String,
	/// Whether tables render a pagination footer
	pub pagination: bool,
	/// Main navigation entries
	pub main_nav: Vec<NavItem>,
	/// Table presets by name
	pub tables: BTreeMap<String, TablePreset>,
}

impl Default for AdminSettings {
	fn default() -> Self {
		Self {
			mount_path: "/admin".to_string(),
			per_page: 25,
			page_param: DEFAULT_PAGE_PARAM.to_string(),
			pagination: true,
			main_nav: Vec::new(),
			tables: BTreeMap::new(),
		}
	}
}

impl AdminSettings {
	/// Parses settings from TOML; missing keys take their defaults.
	pub fn from_toml_str(content: &str) -> Result<Self> {
		Ok(toml::from_str(content)?)
	}

	/// Loads settings from a TOML file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		tracing::debug!(path = %path.display(), "loading admin settings");
		let content = fs::read_to_string(path)?;
		Self::from_toml_str(&content)
	}

	/// Applies `SOLIDUS_ADMIN_*` overrides from `vars`.
	///
	/// Keys without the prefix are ignored. Values that do not parse are
	/// logged and skipped, leaving the previous value in place.
	///
	/// # Examples
	///
	/// ```
	/// use solidus_admin_core::AdminSettings;
	///
	/// let settings = AdminSettings::default()
	///     .apply_overrides([("SOLIDUS_ADMIN_PER_PAGE", "50"), ("HOME", "/root")]);
	/// assert_eq!(settings.per_page, 50);
	/// ```
	pub fn apply_overrides<I, K, V>(mut self, vars: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: AsRef<str>,
	{
		for (key, value) in vars {
			let Some(name) = key.as_ref().strip_prefix(ENV_PREFIX) else {
				continue;
			};
			let value = value.as_ref();
			match name {
				"MOUNT_PATH" => self.mount_path = value.to_string(),
				"PAGE_PARAM" => self.page_param = value.to_string(),
				"PER_PAGE" => match value.trim().parse() {
					Ok(per_page) => self.per_page = per_page,
					Err(_) => tracing::warn!(key = key.as_ref(), value, "ignoring unparseable override"),
				},
				"PAGINATION" => match parse_bool(value) {
					Some(enabled) => self.pagination = enabled,
					None => tracing::warn!(key = key.as_ref(), value, "ignoring unparseable override"),
				},
				_ => tracing::debug!(key = key.as_ref(), "unknown override"),
			}
		}
		self
	}

	/// Applies overrides from the process environment.
	pub fn with_env(self) -> Self {
		self.apply_overrides(std::env::vars())
	}

	/// Checks the settings are usable by the engine.
	pub fn validate(&self) -> Result<()> {
		if !self.mount_path.starts_with('/') {
			return Err(invalid(format!(
				"mount_path must start with '/', got {:?}",
				self.mount_path
			)));
		}
		if self.per_page == 0 {
			return Err(invalid("per_page must be greater than zero".to_string()));
		}
		if self.page_param.trim().is_empty() {
			return Err(invalid("page_param must not be empty".to_string()));
		}

		let mut keys = HashSet::new();
		for item in &self.main_nav {
			if !keys.insert(item.key.as_str()) {
				return Err(invalid(format!("duplicate main_nav key {:?}", item.key)));
			}
			let route = self.resolve_route(&item.route);
			if !is_under(&route, &self.mount_path) {
				return Err(invalid(format!(
					"main_nav route for {:?} must lie under mount_path {:?}, got {:?}",
					item.key, self.mount_path, route
				)));
			}
		}

		Ok(())
	}

	/// Resolves `route` against `mount_path` unless it is already absolute.
	///
	/// # Examples
	///
	/// ```
	/// use solidus_admin_core::AdminSettings;
	///
	/// let settings = AdminSettings::default();
	/// assert_eq!(settings.resolve_route("orders"), "/admin/orders");
	/// assert_eq!(settings.resolve_route("/admin/users"), "/admin/users");
	/// ```
	pub fn resolve_route(&self, route: &str) -> String {
		if route.starts_with('/') {
			route.to_string()
		} else {
			format!("{}/{}", self.mount_path.trim_end_matches('/'), route)
		}
	}

	/// Main navigation items with routes resolved against `mount_path`.
	pub fn nav_items(&self) -> Vec<NavItem> {
		self.main_nav
			.iter()
			.map(|item| NavItem {
				route: self.resolve_route(&item.route),
				..item.clone()
			})
			.collect()
	}
}

fn invalid(message: String) -> EngineError {
	EngineError::InvalidSettings(message)
}

fn parse_bool(value: &str) -> Option<bool> {
	match value.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Some(true),
		"0" | "false" | "no" | "off" => Some(false),
		_ => None,
	}
}
