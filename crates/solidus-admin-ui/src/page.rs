//! Paginated record sets.

use std::ops::RangeInclusive;

/// Pagination metadata for one page of results.
///
/// Always consistent: `num_pages` is at least 1 and `number` lies in
/// `1..=num_pages`.
///
/// # Examples
///
/// ```
/// use solidus_admin_ui::PageInfo;
///
/// let info = PageInfo::new(9, 25, 10);
/// assert_eq!(info.num_pages(), 3);
/// assert_eq!(info.number(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
	number: usize,
	num_pages: usize,
	count: usize,
	page_size: usize,
}

impl PageInfo {
	/// Metadata for page `number` of `count` records, `page_size` per page.
	///
	/// `page_size` of zero means one page holding everything. Out-of-range
	/// page numbers are clamped to the first or last page.
	pub fn new(number: usize, count: usize, page_size: usize) -> Self {
		let num_pages = total_pages(count, page_size);
		Self {
			number: number.clamp(1, num_pages),
			num_pages,
			count,
			page_size,
		}
	}

	/// Current page number (1-indexed).
	pub fn number(&self) -> usize {
		self.number
	}

	/// Total number of pages, at least 1.
	pub fn num_pages(&self) -> usize {
		self.num_pages
	}

	/// Total number of records across all pages.
	pub fn count(&self) -> usize {
		self.count
	}

	pub fn page_size(&self) -> usize {
		self.page_size
	}

	/// Returns whether this is the first page.
	pub fn is_first(&self) -> bool {
		self.number <= 1
	}

	/// Returns whether this is the last page.
	pub fn is_last(&self) -> bool {
		self.number >= self.num_pages
	}

	/// Number of the previous page, if any.
	pub fn previous_number(&self) -> Option<usize> {
		(!self.is_first()).then(|| self.number - 1)
	}

	/// Number of the next page, if any.
	pub fn next_number(&self) -> Option<usize> {
		(!self.is_last()).then(|| self.number + 1)
	}

	/// Page numbers within `radius` of the current page, clamped to valid pages.
	pub fn window(&self, radius: usize) -> RangeInclusive<usize> {
		let start = self.number.saturating_sub(radius).max(1);
		let end = self.number.saturating_add(radius).min(self.num_pages);
		start..=end
	}
}

/// One page of records plus its pagination metadata.
///
/// # Examples
///
/// ```
/// use solidus_admin_ui::Page;
///
/// let page = Page::paginate((1..=25).collect::<Vec<u32>>(), 3, 10);
/// assert_eq!(page.records(), &[21, 22, 23, 24, 25]);
/// assert_eq!(page.info().num_pages(), 3);
/// assert!(page.info().is_last());
/// ```
#[derive(Debug, Clone)]
pub struct Page<R> {
	records: Vec<R>,
	info: PageInfo,
}

impl<R> Page<R> {
	/// Creates a page from records already sliced by the caller.
	///
	/// `count` is the total across all pages; `page_size` of zero means one
	/// page holding everything.
	pub fn new(records: Vec<R>, number: usize, page_size: usize, count: usize) -> Self {
		Self {
			records,
			info: PageInfo::new(number, count, page_size),
		}
	}

	/// Slices page `number` out of the full record list.
	///
	/// Out-of-range page numbers are clamped to the first or last page.
	pub fn paginate(all: Vec<R>, number: usize, page_size: usize) -> Self {
		let info = PageInfo::new(number, all.len(), page_size);
		let records = if page_size == 0 {
			all
		} else {
			all.into_iter()
				.skip((info.number - 1) * page_size)
				.take(page_size)
				.collect()
		};
		Self { records, info }
	}

	/// A single page holding every record.
	pub fn single(records: Vec<R>) -> Self {
		let count = records.len();
		Self::new(records, 1, count, count)
	}

	/// Records on this page, in order.
	pub fn records(&self) -> &[R] {
		&self.records
	}

	/// Pagination metadata.
	pub fn info(&self) -> PageInfo {
		self.info
	}

	/// Number of records on this page.
	pub fn len(&self) -> usize {
		self.records.len()
	}

	/// Returns whether this page has no records.
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

fn total_pages(count: usize, page_size: usize) -> usize {
	if page_size == 0 {
		1
	} else {
		count.div_ceil(page_size).max(1)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0, 10, 1)]
	#[case(10, 10, 1)]
	#[case(11, 10, 2)]
	#[case(5, 0, 1)]
	fn test_total_pages(#[case] count: usize, #[case] size: usize, #[case] pages: usize) {
		assert_eq!(total_pages(count, size), pages);
	}

	#[rstest]
	fn test_paginate_clamps_out_of_range() {
		let page = Page::paginate(vec!['a', 'b', 'c'], 9, 2);
		assert_eq!(page.info().number(), 2);
		assert_eq!(page.records(), &['c']);

		let page = Page::paginate(vec!['a', 'b', 'c'], 0, 2);
		assert_eq!(page.info().number(), 1);
		assert_eq!(page.records(), &['a', 'b']);
	}

	#[rstest]
	fn test_empty_page_has_one_page() {
		let page: Page<u8> = Page::paginate(Vec::new(), 1, 25);
		assert!(page.is_empty());
		assert!(page.info().is_first());
		assert!(page.info().is_last());
		assert_eq!(page.info().next_number(), None);
	}

	#[rstest]
	fn test_previous_and_next() {
		let info = Page::paginate((0..30).collect::<Vec<_>>(), 2, 10).info();
		assert_eq!(info.previous_number(), Some(1));
		assert_eq!(info.next_number(), Some(3));
	}

	#[rstest]
	#[case(1, 10, 1..=3)]
	#[case(5, 10, 3..=7)]
	#[case(10, 10, 8..=10)]
	#[case(1, 1, 1..=1)]
	fn test_window(
		#[case] number: usize,
		#[case] num_pages: usize,
		#[case] expected: RangeInclusive<usize>,
	) {
		let info = PageInfo::new(number, num_pages * 10, 10);
		assert_eq!(info.window(2), expected);
	}

	#[rstest]
	#[case(9, 3)]
	#[case(0, 1)]
	fn test_info_clamps_number(#[case] number: usize, #[case] expected: usize) {
		let info = PageInfo::new(number, 30, 10);
		assert_eq!(info.number(), expected);
		assert_eq!(info.num_pages(), 3);
		assert!(info.window(2).contains(&expected));
	}

	#[rstest]
	fn test_window_at_usize_max() {
		let info = PageInfo::new(usize::MAX, usize::MAX, 1);
		assert_eq!(info.number(), usize::MAX);
		assert_eq!(info.window(2), usize::MAX - 2..=usize::MAX);
		assert_eq!(info.next_number(), None);
	}
}
