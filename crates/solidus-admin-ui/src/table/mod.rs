//! Table component
//!
//! Renders a page of records as a `table` element:
//!
//! 1. a header row, one cell per column,
//! 2. one body row per record, cells in the same column order,
//! 3. a footer row holding the pagination control, unless pagination is off.
//!
//! # Example
//!
//! ```
//! use solidus_admin_ui::table::{Column, Table};
//! use solidus_admin_ui::{Content, Page, Record, RenderContext};
//!
//! struct User {
//!     name: &'static str,
//!     email: &'static str,
//! }
//!
//! impl Record for User {
//!     fn model_name() -> &'static str {
//!         "User"
//!     }
//!
//!     fn attribute(&self, name: &str) -> Option<Content> {
//!         match name {
//!             "name" => Some(self.name.into()),
//!             "email" => Some(self.email.into()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let page = Page::single(vec![
//!     User { name: "Ann", email: "a@x.com" },
//!     User { name: "Bo", email: "b@x.com" },
//! ]);
//! let table = Table::new(&page, [Column::field("name"), Column::field("email")]);
//! let ctx = RenderContext::new("/admin/users");
//!
//! let html = table.render(&ctx).unwrap().render_to_string();
//! assert!(html.contains(">Name</th>"));
//! assert!(html.contains(">b@x.com</td>"));
//! assert!(html.contains(r#"colspan="2""#));
//! ```

mod column;

pub use column::{Column, ColumnDescriptor, Data, DataFn, Header, HeaderFn, columns_from_descriptors};

use crate::component::{Component, Content};
use crate::context::RenderContext;
use crate::error::{RenderError, Result};
use crate::page::Page;
use crate::pagination::{Pagination, PaginationFactory};
use crate::record::Record;
use solidus_admin_markup::{Element, IntoMarkup, Markup};

/// Classes applied to every header cell.
pub const HEADER_CELL_CLASS: &str = "border-b border-gray-100 py-3 px-4 text-[#4f4f4f] text-left text-3.5 font-[600] line-[120%]";

/// Classes applied to every body cell.
pub const DATA_CELL_CLASS: &str = "py-2 px-4";

const TABLE_CLASS: &str = "table-auto w-full";
const FOOTER_CELL_CLASS: &str = "py-4";
const FOOTER_WRAPPER_CLASS: &str = "flex justify-center";

/// Renders `content` inside a `tag` element carrying `attrs`.
///
/// Component content is rendered into `ctx`; literal content is embedded as
/// it is, text being escaped on output. Header and body cells both go through
/// here.
pub fn render_cell<I>(
	tag: &'static str,
	content: Content,
	attrs: I,
	ctx: &RenderContext,
) -> Result<Element>
where
	I: IntoIterator<Item = (&'static str, String)>,
{
	Ok(Element::new(tag).attrs(attrs).child(content.render_in(ctx)?))
}

/// A page of records rendered as a table.
pub struct Table<'a, R> {
	page: &'a Page<R>,
	columns: Vec<Column<R>>,
	pagination: Option<PaginationFactory>,
}

impl<'a, R: Record> Table<'a, R> {
	/// Creates a table with the standard pagination control.
	pub fn new(page: &'a Page<R>, columns: impl IntoIterator<Item = Column<R>>) -> Self {
		Self {
			page,
			columns: columns.into_iter().collect(),
			pagination: Some(Pagination::factory()),
		}
	}

	/// Creates a table from column descriptors.
	///
	/// Fails with [`RenderError::InvalidColumn`] on the first descriptor that
	/// does not name both a header and a data attribute.
	pub fn from_descriptors(
		page: &'a Page<R>,
		descriptors: impl IntoIterator<Item = ColumnDescriptor>,
	) -> Result<Self> {
		Ok(Self::new(page, columns_from_descriptors(descriptors)?))
	}

	/// Replaces the pagination factory; `None` drops the footer.
	pub fn pagination(mut self, factory: Option<PaginationFactory>) -> Self {
		self.pagination = factory;
		self
	}

	/// Drops the footer.
	pub fn without_pagination(self) -> Self {
		self.pagination(None)
	}

	/// Returns the page being rendered.
	pub fn page(&self) -> &'a Page<R> {
		self.page
	}

	/// Returns the columns in display order.
	pub fn columns(&self) -> &[Column<R>] {
		&self.columns
	}

	/// Returns whether a footer will be rendered.
	pub fn has_pagination(&self) -> bool {
		self.pagination.is_some()
	}

	/// Renders the header cell for `column`.
	///
	/// A blank label is rendered as a `td` so label-less columns, such as
	/// actions, do not produce empty `th` elements.
	pub fn render_header_cell(&self, column: &Column<R>, ctx: &RenderContext) -> Result<Element> {
		let label = match column.header() {
			Header::Field(name) => Content::from(R::human_attribute_name(name)),
			Header::Computed(f) => f(),
		};
		let tag = if label.is_blank() { "td" } else { "th" };

		render_cell(tag, label, [("class", cell_class(HEADER_CELL_CLASS, column))], ctx)
	}

	/// Renders the body cell for `column` and `record`.
	///
	/// Fails with [`RenderError::MissingAttribute`] when a field column names
	/// an attribute the record does not have.
	pub fn render_data_cell(
		&self,
		column: &Column<R>,
		record: &R,
		ctx: &RenderContext,
	) -> Result<Element> {
		let content = match column.data() {
			Data::Field(name) => {
				record
					.attribute(name)
					.ok_or_else(|| RenderError::MissingAttribute {
						model: R::model_name(),
						attribute: name.to_string(),
					})?
			}
			Data::Computed(f) => f(record),
		};

		render_cell("td", content, [("class", cell_class(DATA_CELL_CLASS, column))], ctx)
	}

	/// Renders the header row, or nothing when there are no columns.
	pub fn render_header_row(&self, ctx: &RenderContext) -> Result<Option<Element>> {
		if self.columns.is_empty() {
			return Ok(None);
		}

		let cells = self
			.columns
			.iter()
			.map(|column| self.render_header_cell(column, ctx))
			.collect::<Result<Vec<_>>>()?;
		Ok(Some(Element::new("tr").children(cells)))
	}

	/// Renders the body row for `record`.
	pub fn render_body_row(&self, record: &R, ctx: &RenderContext) -> Result<Element> {
		let cells = self
			.columns
			.iter()
			.map(|column| self.render_data_cell(column, record, ctx))
			.collect::<Result<Vec<_>>>()?;
		Ok(Element::new("tr").children(cells))
	}

	/// Renders the footer, or nothing when pagination is off.
	pub fn render_table_footer(&self, ctx: &RenderContext) -> Result<Option<Element>> {
		let Some(factory) = &self.pagination else {
			return Ok(None);
		};

		let pagination = factory(self.page.info()).render_in(ctx)?;
		let cell = Element::new("td")
			.attr("colspan", self.columns.len().to_string())
			.attr("class", FOOTER_CELL_CLASS)
			.child(
				Element::new("div")
					.attr("class", FOOTER_WRAPPER_CLASS)
					.child(pagination),
			);
		Ok(Some(Element::new("tfoot").child(Element::new("tr").child(cell))))
	}

	/// Renders the whole table.
	pub fn render(&self, ctx: &RenderContext) -> Result<Markup> {
		tracing::debug!(
			model = R::model_name(),
			columns = self.columns.len(),
			rows = self.page.len(),
			page = self.page.info().number(),
			paginated = self.has_pagination(),
			"rendering table"
		);

		let mut table = Element::new("table").attr("class", TABLE_CLASS);

		if let Some(header) = self.render_header_row(ctx)? {
			table = table.child(Element::new("thead").child(header));
		}

		let rows = self
			.page
			.records()
			.iter()
			.map(|record| self.render_body_row(record, ctx))
			.collect::<Result<Vec<_>>>()?;
		table = table.child(Element::new("tbody").children(rows));

		if let Some(footer) = self.render_table_footer(ctx)? {
			table = table.child(footer);
		}

		Ok(table.into_markup())
	}
}

impl<R: Record> Component for Table<'_, R> {
	fn render_in(&self, ctx: &RenderContext) -> Result<Markup> {
		self.render(ctx)
	}

	fn name(&self) -> &'static str {
		"ui/table"
	}
}

fn cell_class<R>(base: &str, column: &Column<R>) -> String {
	match column.class_name() {
		Some(extra) => format!("{base} {extra}"),
		None => base.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::*;

	#[derive(Debug)]
	struct Item {
		title: String,
	}

	impl Record for Item {
		fn model_name() -> &'static str {
			"Item"
		}

		fn attribute(&self, name: &str) -> Option<Content> {
			(name == "title").then(|| self.title.clone().into())
		}
	}

	#[fixture]
	fn page() -> Page<Item> {
		Page::single(vec![Item {
			title: "<b>Hat</b>".to_string(),
		}])
	}

	#[fixture]
	fn ctx() -> RenderContext {
		RenderContext::new("/admin/items")
	}

	#[rstest]
	fn test_render_cell_wraps_literal(ctx: RenderContext) {
		let cell = render_cell("td", Content::from("x"), [("class", "a".to_string())], &ctx).unwrap();
		assert_eq!(cell.into_markup().render_to_string(), r#"<td class="a">x</td>"#);
	}

	#[rstest]
	fn test_data_cell_escapes_text(page: Page<Item>, ctx: RenderContext) {
		let table = Table::new(&page, [Column::field("title")]);
		let cell = table
			.render_data_cell(&table.columns()[0], &page.records()[0], &ctx)
			.unwrap();
		assert_eq!(cell.text_content(), "<b>Hat</b>");
		assert!(
			cell.into_markup()
				.render_to_string()
				.ends_with(">&lt;b&gt;Hat&lt;/b&gt;</td>")
		);
	}

	#[rstest]
	fn test_class_name_is_appended(page: Page<Item>, ctx: RenderContext) {
		let table = Table::new(&page, [Column::field("title").with_class_name("w-1/2")]);
		let column = &table.columns()[0];

		let header = table.render_header_cell(column, &ctx).unwrap();
		assert_eq!(
			header.attr_value("class"),
			Some(format!("{HEADER_CELL_CLASS} w-1/2").as_str())
		);

		let data = table
			.render_data_cell(column, &page.records()[0], &ctx)
			.unwrap();
		assert_eq!(data.attr_value("class"), Some("py-2 px-4 w-1/2"));
	}

	#[rstest]
	fn test_without_pagination(page: Page<Item>, ctx: RenderContext) {
		let table = Table::new(&page, [Column::field("title")]).without_pagination();
		assert!(!table.has_pagination());
		assert!(table.render_table_footer(&ctx).unwrap().is_none());
	}

	#[rstest]
	fn test_component_name(page: Page<Item>) {
		let table = Table::new(&page, Vec::new());
		assert_eq!(Component::name(&table), "ui/table");
	}
}
