//! UI components for the solidus-admin interface
//!
//! This crate holds the building blocks the admin screens are made of:
//!
//! - **Table**: renders a [`Page`] of [`Record`]s through a list of columns
//! - **Pagination**: Previous / numbered / Next page links
//! - **Component**: the "render into this context" capability shared by both
//!
//! # Architecture
//!
//! ```text
//! Page<R> ──┐
//!           ├─> Table ──> header row ─┐
//! Columns ──┘         ──> body rows  ─┼─> Markup ──> HTML
//!                     ──> footer ─────┘
//!                           └─> PaginationFactory(PageInfo) ─> Component
//! ```
//!
//! Rendering is synchronous and single pass; the first failing cell aborts
//! the whole render.

pub mod component;
pub mod context;
pub mod error;
pub mod page;
pub mod pagination;
pub mod record;
pub mod table;

pub use component::{Component, Content};
pub use context::{DEFAULT_PAGE_PARAM, RenderContext};
pub use error::{RenderError, Result};
pub use page::{Page, PageInfo};
pub use pagination::{Pagination, PaginationFactory};
pub use record::{Record, humanize};
pub use table::{Column, ColumnDescriptor, Table};
