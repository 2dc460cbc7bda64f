//! Page state, row slicing and page-button windowing.

use std::ops::Range;

use serde::Serialize;

/// Page count at or below which every page gets a button.
const SHOW_ALL_THRESHOLD: usize = 7;

/// Current page and page size.
///
/// `page` is 1-based and always inside `[1, total_pages]` for the row count
/// it was last clamped against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Pagination {
    /// Start on page 1. A zero page size is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `max(1, ceil(row_count / page_size))`.
    pub fn total_pages(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.page_size).max(1)
    }

    /// Go to `page`, clamped into range. Returns `true` if the page changed.
    pub fn set_page(&mut self, page: usize, row_count: usize) -> bool {
        let page = page.clamp(1, self.total_pages(row_count));
        let changed = page != self.page;
        self.page = page;
        changed
    }

    /// Change the page size and return to page 1.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        let page_size = page_size.max(1);
        let changed = page_size != self.page_size || self.page != 1;
        self.page_size = page_size;
        self.page = 1;
        changed
    }

    /// Pull the page back into range after the row count shrank.
    pub fn clamp(&mut self, row_count: usize) -> bool {
        self.set_page(self.page, row_count)
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn prev(&mut self, row_count: usize) -> bool {
        self.set_page(self.page.saturating_sub(1), row_count)
    }

    pub fn next(&mut self, row_count: usize) -> bool {
        self.set_page(self.page + 1, row_count)
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self, row_count: usize) -> bool {
        self.page < self.total_pages(row_count)
    }

    /// Row indices shown on the current page.
    pub fn visible_range(&self, row_count: usize) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(row_count);
        let end = (start + self.page_size).min(row_count);
        start..end
    }

    /// The "Showing a - b of n" numbers for the current page.
    pub fn summary(&self, row_count: usize) -> RangeSummary {
        let range = self.visible_range(row_count);
        if range.is_empty() {
            return RangeSummary {
                first: 0,
                last: 0,
                total: row_count,
            };
        }
        RangeSummary {
            first: range.start + 1,
            last: range.end,
            total: row_count,
        }
    }

    /// Buttons for the current page.
    pub fn buttons(&self, row_count: usize) -> Vec<PageButton> {
        page_buttons(self.page, self.total_pages(row_count))
    }
}

/// 1-based inclusive row range on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeSummary {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl std::fmt::Display for RangeSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Showing {} - {} of {}", self.first, self.last, self.total)
    }
}

/// One symbol in the page-button strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageButton {
    Page { number: usize, current: bool },
    Ellipsis,
}

impl PageButton {
    pub fn number(&self) -> Option<usize> {
        match self {
            PageButton::Page { number, .. } => Some(*number),
            PageButton::Ellipsis => None,
        }
    }
}

/// Windowed page buttons.
///
/// Up to 7 pages are all listed. Beyond that the strip is the first page,
/// a window of three consecutive pages containing `current` (kept inside
/// the first and last page), the last page, and an ellipsis wherever pages
/// are skipped. The current page is always shown.
pub fn page_buttons(current: usize, total: usize) -> Vec<PageButton> {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let page = |number: usize| PageButton::Page {
        number,
        current: number == current,
    };

    if total <= SHOW_ALL_THRESHOLD {
        return (1..=total).map(page).collect();
    }

    let lo = current.saturating_sub(1).clamp(1, total - 2);
    let hi = lo + 2;

    let mut buttons = vec![page(1)];
    if lo > 2 {
        buttons.push(PageButton::Ellipsis);
    }
    buttons.extend((lo.max(2)..=hi.min(total - 1)).map(page));
    if hi < total - 1 {
        buttons.push(PageButton::Ellipsis);
    }
    buttons.push(page(total));
    buttons
}
