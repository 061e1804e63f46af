//! Typed pagination settings.

use folio_core::{PageCursor, PageMarker, WindowPolicy, WindowResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::defaults::{MAX_LENGTH, PAGE_SIZE, POLICY, SECTION};
use crate::error::{ConfigError, ConfigResult};
use crate::validate::{parse_count, parse_policy, validate_max_length, validate_page_size};

/// Settings shared by every rendering front end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationSettings {
    /// Maximum markers in a rendered window, ellipses included.
    pub max_length: usize,
    /// Items shown per page.
    pub page_size: usize,
    /// Validation policy applied to window requests.
    pub policy: WindowPolicy,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            max_length: MAX_LENGTH,
            page_size: PAGE_SIZE,
            policy: POLICY,
        }
    }
}

impl PaginationSettings {
    /// Parse a (possibly partial) settings document on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownField`] for unexpected keys and
    /// [`ConfigError::InvalidField`] for malformed or out-of-range values.
    pub fn from_json(value: &Value) -> ConfigResult<Self> {
        let mut settings = Self::default();
        settings.merge_json(value)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Overlay the keys present in `value` without validating the result.
    pub(crate) fn merge_json(&mut self, value: &Value) -> ConfigResult<()> {
        let map = value.as_object().ok_or_else(|| ConfigError::InvalidField {
            section: SECTION.to_string(),
            field: "<root>".to_string(),
            message: "must be a JSON object".to_string(),
        })?;

        for (key, entry) in map {
            match key.as_str() {
                "max_length" => self.max_length = parse_count(entry, SECTION, key)?,
                "page_size" => self.page_size = parse_count(entry, SECTION, key)?,
                "policy" => self.policy = parse_policy(entry, SECTION, key)?,
                other => {
                    return Err(ConfigError::UnknownField {
                        section: SECTION.to_string(),
                        field: other.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Check the settings against the windowing minimums.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] when `max_length` is below 5 or
    /// `page_size` is zero.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_max_length(self.max_length, SECTION)?;
        validate_page_size(self.page_size, SECTION)
    }

    /// Cursor for `current` within a collection of `total_items`.
    #[must_use]
    pub fn cursor(&self, current: usize, total_items: usize) -> PageCursor {
        PageCursor::from_items(current, total_items, self.page_size)
    }

    /// Window for `cursor` using the configured budget and policy.
    ///
    /// # Errors
    ///
    /// Propagates strict-policy rejections from `folio-core`.
    pub fn window(&self, cursor: &PageCursor) -> WindowResult<Vec<PageMarker>> {
        cursor.window(self.max_length, self.policy)
    }
}
