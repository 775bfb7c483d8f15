//! # Solidus Admin
//!
//! Server-rendered building blocks for an e-commerce admin interface.
//!
//! ## Crates
//!
//! - [`markup`] - element tree and escaped HTML output
//! - [`ui`] - table, pagination and the component trait
//! - [`engine`] - settings, component container, main navigation, engine boot
//!
//! ## Quick Example
//!
//! ```
//! use solidus_admin::prelude::*;
//!
//! struct Product {
//!     name: String,
//!     sku: String,
//! }
//!
//! impl Record for Product {
//!     fn model_name() -> &'static str {
//!         "Product"
//!     }
//!
//!     fn attribute(&self, name: &str) -> Option<Content> {
//!         match name {
//!             "name" => Some(self.name.clone().into()),
//!             "sku" => Some(self.sku.clone().into()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let engine = Engine::boot(AdminSettings::default()).unwrap();
//! let ctx = engine.render_context("/admin/products", "page=1").unwrap();
//! let page = engine.paginate(
//!     vec![Product { name: "Tote".into(), sku: "TB-1".into() }],
//!     &ctx,
//! );
//!
//! let table = Table::new(&page, [
//!     Column::field("name"),
//!     Column::new(Header::computed(|| "SKU"), "sku").with_class_name("font-mono"),
//! ]);
//! let html = table.render(&ctx).unwrap().render_to_string();
//! assert!(html.contains(">SKU</th>"));
//! ```

pub use solidus_admin_core as engine;
pub use solidus_admin_markup as markup;
pub use solidus_admin_ui as ui;

pub mod prelude {
	pub use solidus_admin_core::{
		AdminSettings, Container, Engine, EngineError, MainNav, NavItem, TablePreset,
	};
	pub use solidus_admin_markup::{Element, IntoMarkup, Markup};
	pub use solidus_admin_ui::table::{Column, ColumnDescriptor, Data, Header, Table};
	pub use solidus_admin_ui::{
		Component, Content, Page, PageInfo, Pagination, PaginationFactory, Record, RenderContext,
		RenderError,
	};
}
