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

//! Pagination settings for Folio front ends.
//!
//! Layout: `model.rs` (typed settings), `validate.rs` (field parsing and
//! checks), `loader.rs` (JSON file + environment layering), `defaults.rs`
//! (default values and environment keys), `error.rs` (error types).

pub mod defaults;
pub mod error;
pub mod loader;
pub mod model;
mod validate;

pub use defaults::{ENV_MAX_LENGTH, ENV_PAGE_SIZE, ENV_WINDOW_POLICY};
pub use error::{ConfigError, ConfigResult};
pub use loader::{load, load_with};
pub use model::PaginationSettings;
