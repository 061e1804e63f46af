//! Elements of a rendered page-number sequence.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Glyph used when an ellipsis is rendered as text.
pub const ELLIPSIS_GLYPH: &str = "…";

/// One slot of a pagination window.
///
/// Serialises untagged: a page becomes its number and an ellipsis becomes `null`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageMarker {
    /// A concrete, 1-based page number.
    Page(usize),
    /// A run of omitted pages between its neighbours.
    Ellipsis,
}

impl PageMarker {
    /// Page number carried by the marker, if any.
    #[must_use]
    pub const fn page(self) -> Option<usize> {
        match self {
            Self::Page(number) => Some(number),
            Self::Ellipsis => None,
        }
    }

    /// Whether the marker is an ellipsis.
    #[must_use]
    pub const fn is_ellipsis(self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

impl Display for PageMarker {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(number) => write!(formatter, "{number}"),
            Self::Ellipsis => formatter.write_str(ELLIPSIS_GLYPH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_display_as_numbers_or_glyph() {
        assert_eq!(PageMarker::Page(12).to_string(), "12");
        assert_eq!(PageMarker::Ellipsis.to_string(), ELLIPSIS_GLYPH);
    }

    #[test]
    fn markers_serialise_untagged() -> anyhow::Result<()> {
        let markers = vec![PageMarker::Page(1), PageMarker::Ellipsis, PageMarker::Page(9)];
        let text = serde_json::to_string(&markers)?;
        assert_eq!(text, "[1,null,9]");
        let parsed: Vec<PageMarker> = serde_json::from_str(&text)?;
        assert_eq!(parsed, markers);
        Ok(())
    }

    #[test]
    fn page_accessor_skips_ellipsis() {
        assert_eq!(PageMarker::Page(3).page(), Some(3));
        assert_eq!(PageMarker::Ellipsis.page(), None);
        assert!(PageMarker::Ellipsis.is_ellipsis());
    }
}
