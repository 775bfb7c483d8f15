//! Markup tree types.
//!
//! `Markup` is what every admin component produces. It can be an element, a
//! text node (escaped on output), a pre-rendered trusted fragment, a list of
//! siblings, or nothing at all.
//!
//! ```
//! use solidus_admin_markup::{Element, IntoMarkup};
//!
//! let cell = Element::new("td")
//!     .attr("class", "py-2 px-4")
//!     .child("Ann & Bo")
//!     .into_markup();
//!
//! assert_eq!(
//!     cell.render_to_string(),
//!     r#"<td class="py-2 px-4">Ann &amp; Bo</td>"#
//! );
//! ```

use crate::escape::html_escape;
use std::borrow::Cow;
use std::fmt;

type Attribute = (Cow<'static, str>, Cow<'static, str>);

/// Renderable content for an admin page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
	/// An HTML element.
	Element(Element),
	/// A text node; escaped when rendered.
	Text(Cow<'static, str>),
	/// Markup that is already safe to embed, emitted verbatim.
	Raw(Cow<'static, str>),
	/// Sibling nodes without a wrapper element.
	Fragment(Vec<Markup>),
	/// Renders nothing.
	Empty,
}

/// An HTML element in the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	tag: Cow<'static, str>,
	attrs: Vec<Attribute>,
	children: Vec<Markup>,
	is_void: bool,
}

impl Element {
	/// Creates an element with the given tag name.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds every attribute from an iterator, in order.
	pub fn attrs<N, V>(mut self, attrs: impl IntoIterator<Item = (N, V)>) -> Self
	where
		N: Into<Cow<'static, str>>,
		V: Into<Cow<'static, str>>,
	{
		self.attrs
			.extend(attrs.into_iter().map(|(n, v)| (n.into(), v.into())));
		self
	}

	/// Adds a child node.
	pub fn child(mut self, child: impl IntoMarkup) -> Self {
		self.children.push(child.into_markup());
		self
	}

	/// Adds several child nodes.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoMarkup>) -> Self {
		self.children
			.extend(children.into_iter().map(IntoMarkup::into_markup));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the value of the first attribute called `name`.
	pub fn attr_value(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_ref())
	}

	/// Returns all attributes in insertion order.
	pub fn attributes(&self) -> &[Attribute] {
		&self.attrs
	}

	/// Returns the child nodes.
	pub fn child_nodes(&self) -> &[Markup] {
		&self.children
	}

	/// Returns whether this is a void element (no closing tag).
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Collects descendant elements with the given tag, in document order.
	pub fn find_all(&self, tag: &str) -> Vec<&Element> {
		let mut found = Vec::new();
		for child in &self.children {
			child.collect_by_tag(tag, &mut found);
		}
		found
	}

	/// Concatenated text of all descendant text and raw nodes.
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		for child in &self.children {
			child.collect_text(&mut out);
		}
		out
	}
}

impl Markup {
	/// Creates an element builder.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> Element {
		Element::new(tag)
	}

	/// Creates a text node.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Wraps already-safe markup.
	pub fn raw(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Raw(content.into())
	}

	/// Creates a fragment.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoMarkup>) -> Self {
		Self::Fragment(children.into_iter().map(IntoMarkup::into_markup).collect())
	}

	/// Creates empty markup.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Returns `true` when the markup would show nothing visible.
	///
	/// Whitespace-only text and raw nodes count as blank; any element does not.
	pub fn is_blank(&self) -> bool {
		match self {
			Markup::Element(_) => false,
			Markup::Text(text) | Markup::Raw(text) => text.trim().is_empty(),
			Markup::Fragment(children) => children.iter().all(Markup::is_blank),
			Markup::Empty => true,
		}
	}

	/// Returns the element if this markup is one.
	pub fn as_element(&self) -> Option<&Element> {
		match self {
			Markup::Element(el) => Some(el),
			_ => None,
		}
	}

	/// Collects elements with the given tag, including `self`, in document order.
	pub fn find_all(&self, tag: &str) -> Vec<&Element> {
		let mut found = Vec::new();
		self.collect_by_tag(tag, &mut found);
		found
	}

	/// Concatenated text of all text and raw nodes.
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		self.collect_text(&mut out);
		out
	}

	/// Renders the markup to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_into(&mut output);
		output
	}

	fn render_into(&self, output: &mut String) {
		match self {
			Markup::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());
				for (name, value) in &el.attrs {
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}
				if el.is_void {
					output.push_str(" />");
					return;
				}
				output.push('>');
				for child in &el.children {
					child.render_into(output);
				}
				output.push_str("</");
				output.push_str(el.tag_name());
				output.push('>');
			}
			Markup::Text(text) => output.push_str(&html_escape(text)),
			Markup::Raw(html) => output.push_str(html),
			Markup::Fragment(children) => {
				for child in children {
					child.render_into(output);
				}
			}
			Markup::Empty => {}
		}
	}

	fn collect_by_tag<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
		match self {
			Markup::Element(el) => {
				if el.tag_name() == tag {
					found.push(el);
				}
				for child in &el.children {
					child.collect_by_tag(tag, found);
				}
			}
			Markup::Fragment(children) => {
				for child in children {
					child.collect_by_tag(tag, found);
				}
			}
			Markup::Text(_) | Markup::Raw(_) | Markup::Empty => {}
		}
	}

	fn collect_text(&self, out: &mut String) {
		match self {
			Markup::Element(el) => {
				for child in &el.children {
					child.collect_text(out);
				}
			}
			Markup::Text(text) | Markup::Raw(text) => out.push_str(text),
			Markup::Fragment(children) => {
				for child in children {
					child.collect_text(out);
				}
			}
			Markup::Empty => {}
		}
	}
}

impl fmt::Display for Markup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render_to_string())
	}
}

/// Conversion into [`Markup`].
pub trait IntoMarkup {
	/// Converts self into markup.
	fn into_markup(self) -> Markup;
}

impl IntoMarkup for Markup {
	fn into_markup(self) -> Markup {
		self
	}
}

impl IntoMarkup for Element {
	fn into_markup(self) -> Markup {
		Markup::Element(self)
	}
}

impl IntoMarkup for String {
	fn into_markup(self) -> Markup {
		Markup::Text(Cow::Owned(self))
	}
}

impl IntoMarkup for &String {
	fn into_markup(self) -> Markup {
		Markup::Text(Cow::Owned(self.clone()))
	}
}

impl IntoMarkup for &str {
	fn into_markup(self) -> Markup {
		Markup::Text(Cow::Owned(self.to_owned()))
	}
}

impl<T: IntoMarkup> IntoMarkup for Option<T> {
	fn into_markup(self) -> Markup {
		self.map_or(Markup::Empty, IntoMarkup::into_markup)
	}
}

impl<T: IntoMarkup> IntoMarkup for Vec<T> {
	fn into_markup(self) -> Markup {
		Markup::Fragment(self.into_iter().map(IntoMarkup::into_markup).collect())
	}
}

impl IntoMarkup for () {
	fn into_markup(self) -> Markup {
		Markup::Empty
	}
}

impl From<Element> for Markup {
	fn from(el: Element) -> Self {
		Markup::Element(el)
	}
}
