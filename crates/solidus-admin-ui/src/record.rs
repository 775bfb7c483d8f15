//! Records shown in admin tables.

use crate::component::Content;

/// A row's backing data object.
///
/// Implementors name their model, label their attributes for column headers
/// and expose attributes by symbolic name for field columns.
///
/// # Example
///
/// ```
/// use solidus_admin_ui::{Content, Record};
///
/// struct Product {
///     name: String,
///     sku: String,
/// }
///
/// impl Record for Product {
///     fn model_name() -> &'static str {
///         "Product"
///     }
///
///     fn human_attribute_name(attribute: &str) -> String {
///         match attribute {
///             "sku" => "SKU".to_string(),
///             other => solidus_admin_ui::humanize(other),
///         }
///     }
///
///     fn attribute(&self, name: &str) -> Option<Content> {
///         match name {
///             "name" => Some(self.name.clone().into()),
///             "sku" => Some(self.sku.clone().into()),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(Product::human_attribute_name("sku"), "SKU");
/// assert_eq!(Product::human_attribute_name("name"), "Name");
/// ```
pub trait Record {
	/// Model name used in logs and errors.
	fn model_name() -> &'static str;

	/// Human-readable label for an attribute.
	fn human_attribute_name(attribute: &str) -> String {
		humanize(attribute)
	}

	/// Reads an attribute by name, `None` if the record has no such attribute.
	fn attribute(&self, name: &str) -> Option<Content>;
}

/// Turns an attribute name into a label.
///
/// Drops a trailing `_id`, replaces underscores with spaces and capitalises
/// the first letter.
///
/// ```
/// use solidus_admin_ui::humanize;
///
/// assert_eq!(humanize("first_name"), "First name");
/// assert_eq!(humanize("shipping_address_id"), "Shipping address");
/// ```
pub fn humanize(attribute: &str) -> String {
	let base = attribute
		.strip_suffix("_id")
		.filter(|s| !s.is_empty())
		.unwrap_or(attribute);
	let words = base
		.split('_')
		.filter(|w| !w.is_empty())
		.collect::<Vec<_>>()
		.join(" ")
		.to_lowercase();

	let mut chars = words.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
