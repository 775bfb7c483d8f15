//! HTML escaping used by the markup renderer.

use std::borrow::Cow;

/// Escapes a text node or an attribute value for output.
///
/// `Markup::render_to_string` passes every `Text` node and every attribute
/// value through here; `Raw` nodes bypass it. Quotes are escaped too since
/// attribute values are always written double-quoted. Plain strings come back
/// borrowed.
pub fn html_escape(s: &str) -> Cow<'_, str> {
	if !s.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(s);
	}

	let mut escaped = String::with_capacity(s.len() + 8);
	for c in s.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}
