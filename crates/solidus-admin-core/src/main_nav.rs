//! Main navigation provider

use serde::{Deserialize, Serialize};
use solidus_admin_markup::{Element, IntoMarkup, Markup};
use solidus_admin_ui::{Component, RenderContext, humanize};

const LINK_CLASS: &str = "flex items-center gap-3 py-1 px-3 rounded text-sm text-gray-700";
const ACTIVE_LINK_CLASS: &str = "flex items-center gap-3 py-1 px-3 rounded text-sm bg-gray-50 text-black font-semibold";

/// One main navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavItem {
	/// Unique key, also used for the label
	pub key: String,
	/// Absolute path, or a path relative to the admin's `mount_path`
	pub route: String,
	/// Remix icon name, without the `ri-` prefix
	#[serde(default)]
	pub icon: Option<String>,
	/// Sort position, lowest first
	#[serde(default)]
	pub position: i32,
}

impl NavItem {
	/// Item at position 0 with no icon.
	pub fn new(key: impl Into<String>, route: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			route: route.into(),
			icon: None,
			position: 0,
		}
	}

	/// Sets the Remix icon name.
	pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
		self.icon = Some(icon.into());
		self
	}

	/// Sets the sort position.
	pub fn with_position(mut self, position: i32) -> Self {
		self.position = position;
		self
	}

	/// Label shown in the menu.
	pub fn label(&self) -> String {
		humanize(&self.key)
	}

	/// Returns whether `path` is this item's route or lies beneath it.
	pub fn is_active(&self, path: &str) -> bool {
		is_under(path, &self.route)
	}
}

/// Returns whether `path` equals `prefix` or lies beneath it, segment-wise.
pub(crate) fn is_under(path: &str, prefix: &str) -> bool {
	match path.strip_prefix(prefix.trim_end_matches('/')) {
		Some(rest) => rest.is_empty() || rest.starts_with('/'),
		None => false,
	}
}

/// Sorted main navigation, rendered as the admin's side menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MainNav {
	items: Vec<NavItem>,
}

impl MainNav {
	/// Starts the provider, ordering items by position and then key.
	pub fn start(items: impl IntoIterator<Item = NavItem>) -> Self {
		let mut items: Vec<NavItem> = items.into_iter().collect();
		items.sort_by(|a, b| a.position.cmp(&b.position).then_with(|| a.key.cmp(&b.key)));
		tracing::debug!(items = items.len(), "main navigation started");
		Self { items }
	}

	/// Items in display order.
	pub fn items(&self) -> &[NavItem] {
		&self.items
	}

	/// The item to highlight for `path`.
	///
	/// When routes nest, the longest matching route wins.
	pub fn active_item(&self, path: &str) -> Option<&NavItem> {
		self.items
			.iter()
			.filter(|item| item.is_active(path))
			.max_by_key(|item| item.route.trim_end_matches('/').len())
	}

	fn render_item(item: &NavItem, active: bool) -> Element {
		let mut link = Element::new("a")
			.attr("href", item.route.clone())
			.attr("class", if active { ACTIVE_LINK_CLASS } else { LINK_CLASS });
		if active {
			link = link.attr("aria-current", "page");
		}
		if let Some(icon) = &item.icon {
			link = link.child(Element::new("i").attr("class", format!("ri-{icon}")));
		}
		Element::new("li").child(link.child(item.label()))
	}
}

impl Component for MainNav {
	fn render_in(&self, ctx: &RenderContext) -> solidus_admin_ui::Result<Markup> {
		let active = self.active_item(ctx.request_path()).map(|item| item.key.as_str());
		let items = self
			.items
			.iter()
			.map(|item| Self::render_item(item, Some(item.key.as_str()) == active));

		Ok(Element::new("nav")
			.attr("aria-label", "Main")
			.child(Element::new("ul").attr("class", "flex flex-col gap-0.5").children(items))
			.into_markup())
	}

	fn name(&self) -> &'static str {
		"main_nav"
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::*;

	#[fixture]
	fn nav() -> MainNav {
		MainNav::start([
			NavItem::new("products", "/admin/products").with_position(20),
			NavItem::new("orders", "/admin/orders").with_position(10).with_icon("inbox-line"),
			NavItem::new("option_types", "/admin/products/option_types").with_position(20),
		])
	}

	#[rstest]
	fn test_sorted_by_position_then_key(nav: MainNav) {
		let keys: Vec<&str> = nav.items().iter().map(|i| i.key.as_str()).collect();
		assert_eq!(keys, vec!["orders", "option_types", "products"]);
	}

	#[rstest]
	#[case("/admin/orders", true)]
	#[case("/admin/orders/", true)]
	#[case("/admin/orders/R123", true)]
	#[case("/admin/ordersx", false)]
	#[case("/admin", false)]
	fn test_is_active(#[case] path: &str, #[case] expected: bool) {
		assert_eq!(NavItem::new("orders", "/admin/orders").is_active(path), expected);
	}

	#[rstest]
	fn test_longest_route_wins(nav: MainNav) {
		let active = nav.active_item("/admin/products/option_types/1/edit").unwrap();
		assert_eq!(active.key, "option_types");
	}

	#[rstest]
	fn test_render_marks_active(nav: MainNav) {
		let ctx = RenderContext::new("/admin/orders/R123");
		let markup = nav.render_in(&ctx).unwrap();
		let links = markup.find_all("a");
		assert_eq!(links.len(), 3);
		assert_eq!(links[0].attr_value("aria-current"), Some("page"));
		assert_eq!(links[0].text_content(), "Orders");
		assert_eq!(links[0].find_all("i")[0].attr_value("class"), Some("ri-inbox-line"));
		assert_eq!(links[1].text_content(), "Option types");
		assert!(links[1].attr_value("aria-current").is_none());
	}
}
