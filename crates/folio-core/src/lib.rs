#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! Pagination primitives shared across the Folio workspace.
//!
//! Layout: `marker.rs` (page markers), `window.rs` (the windowed page-number
//! sequence and its validation policies), `page.rs` (page counts and item
//! ranges), `nav.rs` (clamped navigation state), `error.rs` (error types).

pub mod error;
pub mod marker;
pub mod nav;
pub mod page;
pub mod window;

pub use error::{ParsePolicyError, WindowError, WindowResult};
pub use marker::{ELLIPSIS_GLYPH, PageMarker};
pub use nav::PageCursor;
pub use page::{DEFAULT_PAGE_SIZE, Paging, page_bounds, page_count};
pub use window::{
    DEFAULT_MAX_LENGTH, MIN_MAX_LENGTH, WindowPolicy, WindowRequest, WindowShape, compute_window,
};
