//! Default values and environment keys for pagination settings.
//!
//! # Design
//! - Defaults mirror the constants exported by `folio-core` so front ends and
//!   the core agree without a settings document.

use folio_core::{DEFAULT_MAX_LENGTH, DEFAULT_PAGE_SIZE, WindowPolicy};

/// Section name reported in validation errors.
pub(crate) const SECTION: &str = "pagination";

/// Default slot budget for rendered windows.
pub(crate) const MAX_LENGTH: usize = DEFAULT_MAX_LENGTH;
/// Default number of items per page.
pub(crate) const PAGE_SIZE: usize = DEFAULT_PAGE_SIZE;
/// Default validation policy for window requests.
pub(crate) const POLICY: WindowPolicy = WindowPolicy::Permissive;

/// Environment variable overriding `max_length`.
pub const ENV_MAX_LENGTH: &str = "FOLIO_MAX_LENGTH";
/// Environment variable overriding `page_size`.
pub const ENV_PAGE_SIZE: &str = "FOLIO_PAGE_SIZE";
/// Environment variable overriding `policy`.
pub const ENV_WINDOW_POLICY: &str = "FOLIO_WINDOW_POLICY";
