//! Component capability and cell content.
//!
//! A [`Component`] renders itself into a [`RenderContext`]. Cell content is
//! either literal markup or a nested component; the table delegates to the
//! component when it meets one and embeds literal markup as-is.

use crate::context::RenderContext;
use crate::error::Result;
use solidus_admin_markup::{Element, IntoMarkup, Markup};
use std::fmt;

/// Something that can produce markup for the current request.
///
/// # Example
///
/// ```
/// use solidus_admin_markup::{Element, IntoMarkup, Markup};
/// use solidus_admin_ui::{Component, RenderContext, Result};
///
/// struct Badge(&'static str);
///
/// impl Component for Badge {
///     fn render_in(&self, _ctx: &RenderContext) -> Result<Markup> {
///         Ok(Element::new("span").attr("class", "badge").child(self.0).into_markup())
///     }
/// }
///
/// let ctx = RenderContext::new("/admin/orders");
/// let html = Badge("paid").render_in(&ctx).unwrap().render_to_string();
/// assert_eq!(html, r#"<span class="badge">paid</span>"#);
/// ```
pub trait Component {
	/// Renders the component within `ctx`.
	fn render_in(&self, ctx: &RenderContext) -> Result<Markup>;

	/// Name used in logs and error messages.
	fn name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}
}

/// Content of a table cell.
pub enum Content {
	/// Text or markup embedded directly.
	Literal(Markup),
	/// A component rendered into the current context.
	Component(Box<dyn Component>),
}

impl Content {
	/// Wraps literal text or markup.
	pub fn literal(content: impl IntoMarkup) -> Self {
		Content::Literal(content.into_markup())
	}

	/// Wraps a nested component.
	pub fn component(component: impl Component + 'static) -> Self {
		Content::Component(Box::new(component))
	}

	/// Blank content shows nothing. Components are never blank.
	pub fn is_blank(&self) -> bool {
		match self {
			Content::Literal(markup) => markup.is_blank(),
			Content::Component(_) => false,
		}
	}

	/// Resolves the content to markup, delegating to the component if there is one.
	pub fn render_in(self, ctx: &RenderContext) -> Result<Markup> {
		match self {
			Content::Literal(markup) => Ok(markup),
			Content::Component(component) => component.render_in(ctx),
		}
	}
}

impl fmt::Debug for Content {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Content::Literal(markup) => f.debug_tuple("Literal").field(markup).finish(),
			Content::Component(component) => {
				f.debug_tuple("Component").field(&component.name()).finish()
			}
		}
	}
}

impl Default for Content {
	fn default() -> Self {
		Content::Literal(Markup::Empty)
	}
}

impl From<Markup> for Content {
	fn from(markup: Markup) -> Self {
		Content::Literal(markup)
	}
}

impl From<Element> for Content {
	fn from(el: Element) -> Self {
		Content::Literal(el.into_markup())
	}
}

impl From<String> for Content {
	fn from(text: String) -> Self {
		Content::Literal(text.into_markup())
	}
}

impl From<&str> for Content {
	fn from(text: &str) -> Self {
		Content::Literal(text.into_markup())
	}
}

impl From<Box<dyn Component>> for Content {
	fn from(component: Box<dyn Component>) -> Self {
		Content::Component(component)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::RenderError;
	use rstest::rstest;

	struct Failing;

	impl Component for Failing {
		fn render_in(&self, _ctx: &RenderContext) -> Result<Markup> {
			Err(RenderError::Component {
				component: "Failing",
				message: "boom".to_string(),
			})
		}
	}

	#[rstest]
	fn test_literal_renders_unchanged() {
		let ctx = RenderContext::new("/admin");
		let markup = Content::from("Ann").render_in(&ctx).unwrap();
		assert_eq!(markup.render_to_string(), "Ann");
	}

	#[rstest]
	fn test_component_errors_propagate() {
		let ctx = RenderContext::new("/admin");
		let err = Content::component(Failing).render_in(&ctx).unwrap_err();
		assert!(matches!(err, RenderError::Component { component: "Failing", .. }));
	}

	#[rstest]
	#[case(Content::from(""), true)]
	#[case(Content::from("  "), true)]
	#[case(Content::default(), true)]
	#[case(Content::from("Name"), false)]
	#[case(Content::component(Failing), false)]
	fn test_is_blank(#[case] content: Content, #[case] blank: bool) {
		assert_eq!(content.is_blank(), blank);
	}
}
