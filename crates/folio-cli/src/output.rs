//! Table and JSON renderers for CLI commands.

use folio_core::PageMarker;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Render a marker window; the table form brackets the current page.
pub(crate) fn render_window(
    markers: &[PageMarker],
    current: usize,
    format: OutputFormat,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(markers).map_err(CliError::failure),
        OutputFormat::Table => Ok(markers
            .iter()
            .map(|marker| match marker {
                PageMarker::Page(number) if *number == current => format!("[{number}]"),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")),
    }
}

pub(crate) fn render_page_count(
    total_items: usize,
    page_size: usize,
    pages: usize,
    format: OutputFormat,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(&json!({
            "total_items": total_items,
            "page_size": page_size,
            "pages": pages,
        }))
        .map_err(CliError::failure),
        OutputFormat::Table => Ok(pages.to_string()),
    }
}
