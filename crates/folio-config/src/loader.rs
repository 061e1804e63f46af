//! Layered settings loading: defaults, then a JSON file, then the environment.
//!
//! # Design
//! - Every layer is optional; absent layers leave earlier values untouched.
//! - Validation runs once, after all layers are applied.
//! - Variable lookup is injected so callers and tests can supply their own source.

use std::env;
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::defaults::{ENV_MAX_LENGTH, ENV_PAGE_SIZE, ENV_WINDOW_POLICY};
use crate::error::{ConfigError, ConfigResult};
use crate::model::PaginationSettings;
use crate::validate::{parse_count_str, parse_policy_str};

/// Section name reported for environment override failures.
const ENV_SECTION: &str = "env";

/// Load settings from an optional JSON file and the process environment.
///
/// # Errors
///
/// See [`load_with`].
pub fn load(path: Option<&Path>) -> ConfigResult<PaginationSettings> {
    load_with(path, |key| env::var(key).ok())
}

/// Load settings from an optional JSON file and the supplied variable lookup.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] or [`ConfigError::Parse`] when the file cannot
/// be read or parsed, [`ConfigError::UnknownField`] for unexpected keys, and
/// [`ConfigError::InvalidField`] for malformed values or a result that fails
/// validation.
pub fn load_with<F>(path: Option<&Path>, lookup: F) -> ConfigResult<PaginationSettings>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = PaginationSettings::default();

    if let Some(path) = path {
        let document = read_document(path)?;
        settings.merge_json(&document)?;
        info!(path = %path.display(), "applied pagination settings file");
    }

    apply_env(&mut settings, &lookup)?;
    settings.validate()?;
    Ok(settings)
}

fn read_document(path: &Path) -> ConfigResult<Value> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn apply_env<F>(settings: &mut PaginationSettings, lookup: &F) -> ConfigResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(ENV_MAX_LENGTH) {
        settings.max_length = parse_count_str(&raw, ENV_SECTION, ENV_MAX_LENGTH)?;
        info!(key = ENV_MAX_LENGTH, value = settings.max_length, "applied environment override");
    }
    if let Some(raw) = lookup(ENV_PAGE_SIZE) {
        settings.page_size = parse_count_str(&raw, ENV_SECTION, ENV_PAGE_SIZE)?;
        info!(key = ENV_PAGE_SIZE, value = settings.page_size, "applied environment override");
    }
    if let Some(raw) = lookup(ENV_WINDOW_POLICY) {
        settings.policy = parse_policy_str(&raw, ENV_SECTION, ENV_WINDOW_POLICY)?;
        info!(key = ENV_WINDOW_POLICY, value = %settings.policy, "applied environment override");
    }
    Ok(())
}
