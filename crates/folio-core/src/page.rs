//! Page counts and item ranges for paged collections.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Items per page used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Number of pages needed to show `total_items`; zero when `page_size` is zero.
#[must_use]
pub const fn page_count(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total_items.div_ceil(page_size)
    }
}

/// Half-open item range shown on the 1-based `page`.
///
/// Returns `None` for page zero, a zero page size, or a page past the last one.
#[must_use]
pub fn page_bounds(page: usize, page_size: usize, total_items: usize) -> Option<Range<usize>> {
    if page == 0 || page > page_count(total_items, page_size) {
        return None;
    }
    let start = (page - 1).checked_mul(page_size)?;
    let end = start.saturating_add(page_size).min(total_items);
    Some(start..end)
}

/// List query parameters for paged CRUD endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    /// Requested page, 1-based.
    #[serde(default = "first_page")]
    pub page: usize,
    /// Items per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

const fn first_page() -> usize {
    1
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            page: first_page(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Paging {
    /// Build paging parameters.
    #[must_use]
    pub const fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    /// Items to skip before this page; page zero is read as page one.
    #[must_use]
    pub const fn offset(&self) -> usize {
        let page = if self.page == 0 { 1 } else { self.page };
        (page - 1).saturating_mul(self.page_size)
    }

    /// Items to take for this page.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.page_size
    }

    /// Total pages for a collection of `total_items`.
    #[must_use]
    pub const fn page_count(&self, total_items: usize) -> usize {
        page_count(total_items, self.page_size)
    }
}
