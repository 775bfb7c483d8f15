//! Engine bootstrap
//!
//! Booting runs three steps in order:
//!
//! 1. settings are validated,
//! 2. built-in components are registered in the [`Container`],
//! 3. the main navigation provider is started.
//!
//! # Example
//!
//! ```
//! use solidus_admin_core::{AdminSettings, Engine};
//!
//! let settings = AdminSettings::from_toml_str(r#"
//! per_page = 2
//!
//! [tables.users]
//! columns = [{ header = "email", data = "email" }]
//! "#).unwrap();
//!
//! let engine = Engine::boot(settings).unwrap();
//! assert!(engine.container().contains("ui/pagination"));
//! ```

use crate::container::Container;
use crate::error::{EngineError, Result};
use crate::main_nav::MainNav;
use crate::settings::AdminSettings;
use solidus_admin_ui::table::Table;
use solidus_admin_ui::{Page, Pagination, Record, RenderContext};

/// Container key of the pagination component tables use.
pub const PAGINATION_COMPONENT: &str = "ui/pagination";

/// A booted admin engine.
#[derive(Debug, Clone)]
pub struct Engine {
	settings: AdminSettings,
	container: Container,
	main_nav: MainNav,
}

impl Engine {
	/// Boots the engine with `settings`.
	pub fn boot(settings: AdminSettings) -> Result<Self> {
		settings.validate()?;

		let container = Container::new();
		container.register(PAGINATION_COMPONENT, Pagination::factory());

		let main_nav = MainNav::start(settings.nav_items());

		tracing::info!(
			mount_path = %settings.mount_path,
			per_page = settings.per_page,
			tables = settings.tables.len(),
			nav_items = main_nav.items().len(),
			"solidus admin engine booted"
		);

		Ok(Self {
			settings,
			container,
			main_nav,
		})
	}

	/// Settings the engine was booted with.
	pub fn settings(&self) -> &AdminSettings {
		&self.settings
	}

	/// Component container; registering here replaces built-ins.
	pub fn container(&self) -> &Container {
		&self.container
	}

	/// Started main navigation, routes resolved against `mount_path`.
	pub fn main_nav(&self) -> &MainNav {
		&self.main_nav
	}

	/// Builds the render context for a request.
	///
	/// `query` is the raw query string, with or without its leading `?`.
	pub fn render_context(&self, path: impl Into<String>, query: &str) -> Result<RenderContext> {
		Ok(RenderContext::new(path)
			.with_page_param(self.settings.page_param.clone())
			.parse_query(query)?)
	}

	/// Page number requested in `ctx`, defaulting to the first page.
	pub fn current_page(&self, ctx: &RenderContext) -> usize {
		ctx.query_value(ctx.page_param())
			.and_then(|value| value.trim().parse().ok())
			.filter(|&number| number > 0)
			.unwrap_or(1)
	}

	/// Slices the page `ctx` asks for out of `records`, `per_page` at a time.
	pub fn paginate<R>(&self, records: Vec<R>, ctx: &RenderContext) -> Page<R> {
		Page::paginate(records, self.current_page(ctx), self.settings.per_page)
	}

	/// Builds a table from the `preset` columns in the settings.
	///
	/// The footer uses the container's pagination component, or is left out
	/// when pagination is disabled.
	pub fn table<'a, R: Record>(&self, page: &'a Page<R>, preset: &str) -> Result<Table<'a, R>> {
		let columns = &self
			.settings
			.tables
			.get(preset)
			.ok_or_else(|| EngineError::UnknownPreset(preset.to_string()))?
			.columns;

		let pagination = if self.settings.pagination {
			Some(self.container.component(PAGINATION_COMPONENT)?)
		} else {
			None
		};

		Ok(Table::from_descriptors(page, columns.iter().cloned())?.pagination(pagination))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::*;

	#[fixture]
	fn engine() -> Engine {
		let settings = AdminSettings {
			page_param: "p".to_string(),
			per_page: 3,
			..AdminSettings::default()
		};
		Engine::boot(settings).unwrap()
	}

	#[rstest]
	fn test_boot_rejects_invalid_settings() {
		let settings = AdminSettings {
			per_page: 0,
			..AdminSettings::default()
		};
		assert!(matches!(
			Engine::boot(settings),
			Err(EngineError::InvalidSettings(_))
		));
	}

	#[rstest]
	#[case("", 1)]
	#[case("p=2", 2)]
	#[case("?p=4&q=x", 4)]
	#[case("p=0", 1)]
	#[case("p=abc", 1)]
	#[case("page=3", 1)]
	fn test_current_page(engine: Engine, #[case] query: &str, #[case] expected: usize) {
		let ctx = engine.render_context("/admin/users", query).unwrap();
		assert_eq!(engine.current_page(&ctx), expected);
	}

	#[rstest]
	fn test_paginate_uses_per_page(engine: Engine) {
		let ctx = engine.render_context("/admin/users", "p=2").unwrap();
		let page = engine.paginate((1..=7).collect::<Vec<i32>>(), &ctx);
		assert_eq!(page.records(), &[4, 5, 6]);
		assert_eq!(page.info().num_pages(), 3);
	}
}
