//! Pure view-model helpers for the pagination control, testable without wasm.

use folio_core::{ELLIPSIS_GLYPH, PageCursor, PageMarker, WindowPolicy, WindowResult};

/// Label shown on the previous-page button.
pub const PREV_LABEL: &str = "«";
/// Label shown on the next-page button.
pub const NEXT_LABEL: &str = "»";

/// One button of a rendered pagination control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaginationItem {
    /// Previous-page affordance.
    Prev {
        /// Page selected when clicked.
        target: usize,
        /// Set on the first page.
        disabled: bool,
    },
    /// A numbered page link.
    Page {
        /// Page number, 1-based.
        number: usize,
        /// Set for the page currently displayed.
        active: bool,
    },
    /// Static glyph for elided pages.
    Ellipsis,
    /// Next-page affordance.
    Next {
        /// Page selected when clicked.
        target: usize,
        /// Set on the last page.
        disabled: bool,
    },
}

impl PaginationItem {
    /// Text rendered inside the button.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Prev { .. } => PREV_LABEL.to_string(),
            Self::Page { number, .. } => number.to_string(),
            Self::Ellipsis => ELLIPSIS_GLYPH.to_string(),
            Self::Next { .. } => NEXT_LABEL.to_string(),
        }
    }

    /// Page to emit when clicked; `None` when the button does nothing.
    #[must_use]
    pub const fn target(&self) -> Option<usize> {
        match *self {
            Self::Prev { target, disabled } | Self::Next { target, disabled } if !disabled => {
                Some(target)
            }
            Self::Page {
                number,
                active: false,
            } => Some(number),
            _ => None,
        }
    }

    /// Whether the button is rendered disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        match *self {
            Self::Prev { disabled, .. } | Self::Next { disabled, .. } => disabled,
            Self::Ellipsis => true,
            Self::Page { .. } => false,
        }
    }

    /// Whether the button marks the current page.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Page { active: true, .. })
    }

    /// Stable key for keyed list rendering; ellipses are keyed by position.
    #[must_use]
    pub fn key(&self, index: usize) -> String {
        match self {
            Self::Prev { .. } => "prev".to_string(),
            Self::Page { number, .. } => format!("page-{number}"),
            Self::Ellipsis => format!("gap-{index}"),
            Self::Next { .. } => "next".to_string(),
        }
    }
}

/// Build the buttons for `cursor`: prev, the marker window, then next.
///
/// # Errors
///
/// Propagates strict-policy rejections from `folio-core`.
pub fn build_items(
    cursor: &PageCursor,
    max_length: usize,
    policy: WindowPolicy,
) -> WindowResult<Vec<PaginationItem>> {
    let window = cursor.window(max_length, policy)?;
    let mut items = Vec::with_capacity(window.len() + 2);
    items.push(PaginationItem::Prev {
        target: cursor.prev().current(),
        disabled: !cursor.has_prev(),
    });
    items.extend(window.into_iter().map(|marker| match marker {
        PageMarker::Page(number) => PaginationItem::Page {
            number,
            active: number == cursor.current(),
        },
        PageMarker::Ellipsis => PaginationItem::Ellipsis,
    }));
    items.push(PaginationItem::Next {
        target: cursor.next().current(),
        disabled: !cursor.has_next(),
    });
    Ok(items)
}

/// Caption for compact layouts, e.g. `Page 3 / 12`.
#[must_use]
pub fn page_caption(cursor: &PageCursor) -> String {
    format!("Page {} / {}", cursor.current(), cursor.last().max(1))
}
