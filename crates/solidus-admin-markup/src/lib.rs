//! Markup primitives for solidus-admin.
//!
//! Components build a [`Markup`] tree with [`Element`] and render it to an HTML
//! string. Text is escaped on output; [`Markup::Raw`] carries fragments that are
//! already safe to embed.

mod escape;
mod markup;

pub use escape::html_escape;
pub use markup::{Element, IntoMarkup, Markup};
