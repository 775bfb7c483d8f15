//! Column model
//!
//! A column pairs a header accessor with a data accessor. Each accessor is
//! either a symbolic field name, resolved through the [`Record`] trait, or a
//! function computing the content directly.
//!
//! [`Record`]: crate::Record

use crate::component::Content;
use crate::error::{RenderError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Function producing a header label.
pub type HeaderFn = Arc<dyn Fn() -> Content + Send + Sync>;

/// Function producing a cell from a record.
pub type DataFn<R> = Arc<dyn Fn(&R) -> Content + Send + Sync>;

/// How a column obtains its header label.
#[derive(Clone)]
pub enum Header {
	/// Attribute name, labelled via `Record::human_attribute_name`.
	Field(Cow<'static, str>),
	/// Label computed with no arguments.
	Computed(HeaderFn),
}

impl Header {
	/// Header labelled after an attribute.
	pub fn field(name: impl Into<Cow<'static, str>>) -> Self {
		Header::Field(name.into())
	}

	/// Header computed by `f`.
	pub fn computed<F, C>(f: F) -> Self
	where
		F: Fn() -> C + Send + Sync + 'static,
		C: Into<Content>,
	{
		Header::Computed(Arc::new(move || f().into()))
	}

	/// Header with no visible label, e.g. for an actions column.
	pub fn blank() -> Self {
		Header::computed(Content::default)
	}
}

impl fmt::Debug for Header {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Header::Field(name) => f.debug_tuple("Field").field(name).finish(),
			Header::Computed(_) => f.write_str("Computed(<fn>)"),
		}
	}
}

impl From<&'static str> for Header {
	fn from(name: &'static str) -> Self {
		Header::Field(Cow::Borrowed(name))
	}
}

impl From<String> for Header {
	fn from(name: String) -> Self {
		Header::Field(Cow::Owned(name))
	}
}

/// How a column obtains each cell's content.
pub enum Data<R> {
	/// Attribute read from the record.
	Field(Cow<'static, str>),
	/// Content computed from the record.
	Computed(DataFn<R>),
}

impl<R> Data<R> {
	/// Cell read from an attribute.
	pub fn field(name: impl Into<Cow<'static, str>>) -> Self {
		Data::Field(name.into())
	}

	/// Cell computed by `f`.
	pub fn computed<F, C>(f: F) -> Self
	where
		F: Fn(&R) -> C + Send + Sync + 'static,
		C: Into<Content>,
	{
		Data::Computed(Arc::new(move |record: &R| f(record).into()))
	}
}

impl<R> Clone for Data<R> {
	fn clone(&self) -> Self {
		match self {
			Data::Field(name) => Data::Field(name.clone()),
			Data::Computed(f) => Data::Computed(Arc::clone(f)),
		}
	}
}

impl<R> fmt::Debug for Data<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Data::Field(name) => f.debug_tuple("Field").field(name).finish(),
			Data::Computed(_) => f.write_str("Computed(<fn>)"),
		}
	}
}

impl<R> From<&'static str> for Data<R> {
	fn from(name: &'static str) -> Self {
		Data::Field(Cow::Borrowed(name))
	}
}

impl<R> From<String> for Data<R> {
	fn from(name: String) -> Self {
		Data::Field(Cow::Owned(name))
	}
}

/// One table column.
///
/// # Example
///
/// ```
/// use solidus_admin_ui::table::{Column, Data, Header};
///
/// struct Order {
///     total_cents: i64,
/// }
///
/// let total: Column<Order> = Column::new(
///     Header::computed(|| "Total"),
///     Data::computed(|o: &Order| format!("${:.2}", o.total_cents as f64 / 100.0)),
/// )
/// .with_class_name("text-right");
///
/// let number: Column<Order> = Column::field("number");
/// assert_eq!(total.class_name(), Some("text-right"));
/// assert!(number.class_name().is_none());
/// ```
pub struct Column<R> {
	header: Header,
	data: Data<R>,
	class_name: Option<String>,
}

impl<R> Column<R> {
	/// Creates a column from its accessors.
	pub fn new(header: impl Into<Header>, data: impl Into<Data<R>>) -> Self {
		Self {
			header: header.into(),
			data: data.into(),
			class_name: None,
		}
	}

	/// Column labelled after and reading the same attribute.
	pub fn field(name: impl Into<Cow<'static, str>>) -> Self {
		let name = name.into();
		Self::new(Header::Field(name.clone()), Data::Field(name))
	}

	/// Sets presentation classes added to this column's cells.
	pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
		self.class_name = Some(class_name.into());
		self
	}

	/// Builds a column from a descriptor.
	///
	/// `index` is the descriptor's position, reported on failure. Both
	/// `header` and `data` must name an attribute.
	pub fn from_descriptor(index: usize, descriptor: ColumnDescriptor) -> Result<Self> {
		let header = validate_symbol(index, "header", descriptor.header)?;
		let data = validate_symbol(index, "data", descriptor.data)?;
		Ok(Self {
			header: Header::Field(Cow::Owned(header)),
			data: Data::Field(Cow::Owned(data)),
			class_name: descriptor.class_name.filter(|c| !c.trim().is_empty()),
		})
	}

	/// Returns the header accessor.
	pub fn header(&self) -> &Header {
		&self.header
	}

	/// Returns the data accessor.
	pub fn data(&self) -> &Data<R> {
		&self.data
	}

	/// Returns the presentation classes, if any.
	pub fn class_name(&self) -> Option<&str> {
		self.class_name.as_deref()
	}
}

impl<R> Clone for Column<R> {
	fn clone(&self) -> Self {
		Self {
			header: self.header.clone(),
			data: self.data.clone(),
			class_name: self.class_name.clone(),
		}
	}
}

impl<R> fmt::Debug for Column<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Column")
			.field("header", &self.header)
			.field("data", &self.data)
			.field("class_name", &self.class_name)
			.finish()
	}
}

/// Serialisable column description, as found in settings files.
///
/// ```toml
/// columns = [
///     { header = "name", data = "name" },
///     { header = "email", data = "email", class_name = "truncate" },
/// ]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnDescriptor {
	/// Attribute labelling the header
	#[serde(default)]
	pub header: Option<String>,
	/// Attribute read for each cell
	#[serde(default)]
	pub data: Option<String>,
	/// Extra presentation classes
	#[serde(default)]
	pub class_name: Option<String>,
}

impl ColumnDescriptor {
	/// Descriptor labelled after and reading `name`.
	pub fn field(name: impl Into<String>) -> Self {
		let name = name.into();
		Self {
			header: Some(name.clone()),
			data: Some(name),
			class_name: None,
		}
	}
}

/// Normalizes descriptors into columns, failing on the first invalid one.
pub fn columns_from_descriptors<R>(
	descriptors: impl IntoIterator<Item = ColumnDescriptor>,
) -> Result<Vec<Column<R>>> {
	descriptors
		.into_iter()
		.enumerate()
		.map(|(index, descriptor)| Column::from_descriptor(index, descriptor))
		.collect()
}

fn validate_symbol(index: usize, key: &str, value: Option<String>) -> Result<String> {
	let Some(value) = value else {
		return Err(RenderError::InvalidColumn {
			index,
			reason: format!("`{key}` is required"),
		});
	};

	let mut chars = value.chars();
	let valid_start = chars
		.next()
		.is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
	if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
		return Err(RenderError::InvalidColumn {
			index,
			reason: format!("`{key}` must be an attribute name, got {value:?}"),
		});
	}

	Ok(value)
}
