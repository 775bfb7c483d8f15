//! Property tests for table row shape

use proptest::prelude::*;
use solidus_admin_markup::Markup;
use solidus_admin_ui::table::{Column, Table};
use solidus_admin_ui::{Content, Page, Record, RenderContext};

const ATTRIBUTES: [&str; 4] = ["alpha", "beta", "gamma", "delta"];

#[derive(Debug, Clone)]
struct Row {
	values: [String; 4],
}

impl Record for Row {
	fn model_name() -> &'static str {
		"Row"
	}

	fn attribute(&self, name: &str) -> Option<Content> {
		ATTRIBUTES
			.iter()
			.position(|attribute| *attribute == name)
			.map(|index| self.values[index].clone().into())
	}
}

fn row_strategy() -> impl Strategy<Value = Row> {
	prop::array::uniform4("[a-z<>&]{0,8}").prop_map(|values| Row { values })
}

fn cells_per_row(markup: &Markup, section: &str) -> Vec<Vec<String>> {
	markup
		.find_all(section)
		.into_iter()
		.flat_map(|section| section.find_all("tr"))
		.map(|tr| {
			tr.child_nodes()
				.iter()
				.filter_map(Markup::as_element)
				.map(|cell| cell.text_content())
				.collect()
		})
		.collect()
}

proptest! {
	#[test]
	fn prop_every_row_has_one_cell_per_column(
		rows in prop::collection::vec(row_strategy(), 0..12),
		picks in prop::collection::vec(0usize..4, 1..6),
	) {
		let page = Page::single(rows.clone());
		let columns: Vec<Column<Row>> = picks.iter().map(|&i| Column::field(ATTRIBUTES[i])).collect();
		let ctx = RenderContext::new("/admin/rows");

		let markup = Table::new(&page, columns).render(&ctx).unwrap();

		let header = cells_per_row(&markup, "thead");
		prop_assert_eq!(header.len(), 1);
		prop_assert_eq!(header[0].len(), picks.len());

		let body = cells_per_row(&markup, "tbody");
		prop_assert_eq!(body.len(), rows.len());
		for (row, cells) in rows.iter().zip(&body) {
			let expected: Vec<String> = picks.iter().map(|&i| row.values[i].clone()).collect();
			prop_assert_eq!(cells, &expected);
		}
	}

	#[test]
	fn prop_footer_spans_all_columns(
		count in 0usize..40,
		per_page in 1usize..10,
		number in 0usize..8,
		width in 1usize..5,
	) {
		let rows: Vec<Row> = (0..count)
			.map(|n| Row { values: std::array::from_fn(|i| format!("{n}-{i}")) })
			.collect();
		let page = Page::paginate(rows, number, per_page);
		let columns: Vec<Column<Row>> = ATTRIBUTES[..width].iter().map(|&a| Column::field(a)).collect();
		let ctx = RenderContext::new("/admin/rows");

		let markup = Table::new(&page, columns).render(&ctx).unwrap();

		let footer = markup.find_all("tfoot");
		prop_assert_eq!(footer.len(), 1);
		let cell = footer[0].find_all("td");
		let colspan = width.to_string();
		prop_assert_eq!(cell[0].attr_value("colspan"), Some(colspan.as_str()));
		prop_assert!(page.len() <= per_page);
	}
}
