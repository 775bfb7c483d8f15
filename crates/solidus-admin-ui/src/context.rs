//! Per-request view context passed to every component.

use crate::error::Result;

/// Default query parameter carrying the page number.
pub const DEFAULT_PAGE_PARAM: &str = "page";

/// View context a component renders into.
///
/// Carries the request path and query so components can build links back to
/// the current listing, e.g. pagination links that keep active filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
	request_path: String,
	query: Vec<(String, String)>,
	page_param: String,
}

impl RenderContext {
	/// Creates a context for `request_path`.
	///
	/// A query string left on the path is split off and decoded into the
	/// query pairs, so links built from the context never carry two `?`.
	///
	/// # Examples
	///
	/// ```
	/// use solidus_admin_ui::RenderContext;
	///
	/// let ctx = RenderContext::new("/admin/users?role=admin");
	/// assert_eq!(ctx.request_path(), "/admin/users");
	/// assert_eq!(ctx.query_value("role"), Some("admin"));
	/// ```
	pub fn new(request_path: impl Into<String>) -> Self {
		let mut request_path = request_path.into();
		let query = match request_path.split_once('?') {
			Some((_, raw)) => decode_query(raw),
			None => Vec::new(),
		};
		if let Some(index) = request_path.find('?') {
			request_path.truncate(index);
		}

		Self {
			request_path,
			query,
			page_param: DEFAULT_PAGE_PARAM.to_string(),
		}
	}

	/// Sets the decoded query pairs.
	pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
		self.query = query;
		self
	}

	/// Parses a raw `application/x-www-form-urlencoded` query string.
	///
	/// # Examples
	///
	/// ```
	/// use solidus_admin_ui::RenderContext;
	///
	/// let ctx = RenderContext::new("/admin/products")
	///     .parse_query("q%5Bname%5D=shirt&page=3")
	///     .unwrap();
	/// assert_eq!(ctx.query_value("q[name]"), Some("shirt"));
	/// ```
	pub fn parse_query(mut self, raw: &str) -> Result<Self> {
		self.query = serde_urlencoded::from_str(raw.trim_start_matches('?'))?;
		Ok(self)
	}

	/// Sets the query parameter that carries the page number.
	pub fn with_page_param(mut self, name: impl Into<String>) -> Self {
		self.page_param = name.into();
		self
	}

	/// Returns the request path.
	pub fn request_path(&self) -> &str {
		&self.request_path
	}

	/// Returns the decoded query pairs.
	pub fn query(&self) -> &[(String, String)] {
		&self.query
	}

	/// Returns the first value for `key`.
	pub fn query_value(&self, key: &str) -> Option<&str> {
		self.query
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	/// Returns the page query parameter name.
	pub fn page_param(&self) -> &str {
		&self.page_param
	}

	/// Builds a link to page `number` of the current listing.
	///
	/// Other query parameters are kept in order; the page parameter is replaced
	/// and appended last.
	///
	/// # Examples
	///
	/// ```
	/// use solidus_admin_ui::RenderContext;
	///
	/// let ctx = RenderContext::new("/admin/orders")
	///     .parse_query("page=1&state=complete")
	///     .unwrap();
	/// assert_eq!(ctx.url_for_page(2).unwrap(), "/admin/orders?state=complete&page=2");
	/// ```
	pub fn url_for_page(&self, number: usize) -> Result<String> {
		let number = number.to_string();
		let mut pairs: Vec<(&str, &str)> = self
			.query
			.iter()
			.filter(|(k, _)| *k != self.page_param)
			.map(|(k, v)| (k.as_str(), v.as_str()))
			.collect();
		pairs.push((self.page_param.as_str(), number.as_str()));

		let query = serde_urlencoded::to_string(&pairs)?;
		Ok(format!("{}?{}", self.request_path, query))
	}
}

fn decode_query(raw: &str) -> Vec<(String, String)> {
	serde_urlencoded::from_str(raw).unwrap_or_else(|err| {
		tracing::warn!(error = %err, raw, "dropping undecodable query string");
		Vec::new()
	})
}
