//! Field parsing and validation helpers for settings documents.

use folio_core::{MIN_MAX_LENGTH, WindowPolicy};
use serde_json::Value;

use crate::error::{ConfigError, ConfigResult};

pub(crate) fn invalid(section: &str, field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidField {
        section: section.to_string(),
        field: field.to_string(),
        message: message.into(),
    }
}

pub(crate) fn parse_count(value: &Value, section: &str, field: &str) -> ConfigResult<usize> {
    let raw = value
        .as_u64()
        .ok_or_else(|| invalid(section, field, "must be a non-negative integer"))?;
    usize::try_from(raw).map_err(|_| invalid(section, field, "does not fit in usize"))
}

pub(crate) fn parse_count_str(value: &str, section: &str, field: &str) -> ConfigResult<usize> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| invalid(section, field, "must be a non-negative integer"))
}

pub(crate) fn parse_policy(value: &Value, section: &str, field: &str) -> ConfigResult<WindowPolicy> {
    let raw = value
        .as_str()
        .ok_or_else(|| invalid(section, field, "must be a string"))?;
    parse_policy_str(raw, section, field)
}

pub(crate) fn parse_policy_str(
    value: &str,
    section: &str,
    field: &str,
) -> ConfigResult<WindowPolicy> {
    value
        .parse::<WindowPolicy>()
        .map_err(|err| invalid(section, field, err.to_string()))
}

pub(crate) fn validate_max_length(value: usize, section: &str) -> ConfigResult<()> {
    if value < MIN_MAX_LENGTH {
        return Err(invalid(
            section,
            "max_length",
            format!("must be at least {MIN_MAX_LENGTH}"),
        ));
    }
    Ok(())
}

pub(crate) fn validate_page_size(value: usize, section: &str) -> ConfigResult<()> {
    if value == 0 {
        return Err(invalid(section, "page_size", "must be greater than zero"));
    }
    Ok(())
}
