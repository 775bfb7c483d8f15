//! Pagination component
//!
//! Renders Previous / page numbers / Next controls for a [`PageInfo`]. Links
//! are built from the [`RenderContext`] so active filters survive navigation.

use crate::component::Component;
use crate::context::RenderContext;
use crate::error::Result;
use crate::page::PageInfo;
use solidus_admin_markup::{Element, IntoMarkup, Markup};
use std::sync::Arc;

/// Builds the pagination component for a page.
///
/// Tables receive one of these instead of looking a component up by name.
pub type PaginationFactory = Arc<dyn Fn(PageInfo) -> Box<dyn Component> + Send + Sync>;

const LINK_CLASS: &str = "flex items-center justify-center px-2 h-8 rounded text-sm";
const CURRENT_CLASS: &str = "flex items-center justify-center px-2 h-8 rounded text-sm bg-gray-15 font-semibold";
const DISABLED_CLASS: &str = "flex items-center justify-center px-2 h-8 rounded text-sm text-gray-400";

/// Standard pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
	info: PageInfo,
}

impl Pagination {
	/// Pages shown on each side of the current one.
	pub const WINDOW: usize = 2;

	/// Creates a pagination control for `info`.
	pub fn new(info: PageInfo) -> Self {
		Self { info }
	}

	/// Factory producing the standard control, the default for tables.
	pub fn factory() -> PaginationFactory {
		Arc::new(|info: PageInfo| -> Box<dyn Component> { Box::new(Pagination::new(info)) })
	}

	fn item(content: Element) -> Element {
		Element::new("li").child(content)
	}

	fn link(
		ctx: &RenderContext,
		number: usize,
		label: String,
		rel: Option<&'static str>,
	) -> Result<Element> {
		let mut link = Element::new("a")
			.attr("href", ctx.url_for_page(number)?)
			.attr("class", LINK_CLASS);
		if let Some(rel) = rel {
			link = link.attr("rel", rel);
		}
		Ok(link.child(label))
	}

	fn disabled(label: &'static str) -> Element {
		Element::new("span")
			.attr("class", DISABLED_CLASS)
			.attr("aria-disabled", "true")
			.child(label)
	}
}

impl Component for Pagination {
	fn render_in(&self, ctx: &RenderContext) -> Result<Markup> {
		let mut items = Vec::new();

		items.push(Self::item(match self.info.previous_number() {
			Some(previous) => Self::link(ctx, previous, "Previous".to_string(), Some("prev"))?,
			None => Self::disabled("Previous"),
		}));

		for number in self.info.window(Self::WINDOW) {
			let entry = if number == self.info.number() {
				Element::new("span")
					.attr("class", CURRENT_CLASS)
					.attr("aria-current", "page")
					.child(number.to_string())
			} else {
				Self::link(ctx, number, number.to_string(), None)?
			};
			items.push(Self::item(entry));
		}

		items.push(Self::item(match self.info.next_number() {
			Some(next) => Self::link(ctx, next, "Next".to_string(), Some("next"))?,
			None => Self::disabled("Next"),
		}));

		Ok(Element::new("nav")
			.attr("aria-label", "pagination")
			.child(
				Element::new("ul")
					.attr("class", "flex items-center gap-1")
					.children(items),
			)
			.into_markup())
	}

	fn name(&self) -> &'static str {
		"ui/pagination"
	}
}
