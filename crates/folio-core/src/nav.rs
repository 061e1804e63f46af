//! Clamped navigation state for pagination controls.

use crate::error::WindowResult;
use crate::marker::PageMarker;
use crate::page::page_count;
use crate::window::{WindowPolicy, WindowRequest};

/// Current position within a paged collection.
///
/// The current page always lies in `1..=max(last, 1)`; every move is clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PageCursor {
    current: usize,
    last: usize,
}

impl PageCursor {
    /// Cursor on `current`, clamped into the collection.
    #[must_use]
    pub fn new(current: usize, last: usize) -> Self {
        Self {
            current: current.clamp(1, last.max(1)),
            last,
        }
    }

    /// Cursor for a collection described by its item count and page size.
    #[must_use]
    pub fn from_items(current: usize, total_items: usize, page_size: usize) -> Self {
        Self::new(current, page_count(total_items, page_size))
    }

    /// Current page, 1-based.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Last page number (the page count).
    #[must_use]
    pub const fn last(&self) -> usize {
        self.last
    }

    /// Whether a previous page exists.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current > 1
    }

    /// Whether a next page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current < self.last
    }

    /// Move one page back.
    #[must_use]
    pub fn prev(self) -> Self {
        self.go_to(self.current.saturating_sub(1))
    }

    /// Move one page forward.
    #[must_use]
    pub fn next(self) -> Self {
        self.go_to(self.current.saturating_add(1))
    }

    /// Jump to the first page.
    #[must_use]
    pub fn first(self) -> Self {
        self.go_to(1)
    }

    /// Jump to the last page.
    #[must_use]
    pub fn last_page(self) -> Self {
        self.go_to(self.last)
    }

    /// Jump to `page`, clamped into the collection.
    #[must_use]
    pub fn go_to(self, page: usize) -> Self {
        Self::new(page, self.last)
    }

    /// Window request for this position.
    #[must_use]
    pub const fn request(&self, max_length: usize) -> WindowRequest {
        WindowRequest::new(self.current, self.last, max_length)
    }

    /// Marker window for this position.
    ///
    /// # Errors
    ///
    /// Fails only under [`WindowPolicy::Strict`] when `max_length` is too small.
    pub fn window(&self, max_length: usize, policy: WindowPolicy) -> WindowResult<Vec<PageMarker>> {
        self.request(max_length).compute_with(policy)
    }
}
