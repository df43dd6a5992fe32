//! Configuration file upgrades: detect keys added by newer versions and
//! write them back with their default values.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every current configuration file is expected to carry.
fn expected_keys() -> AppResult<Mapping> {
    let defaults = serde_yaml::to_value(Config::default()).map_err(|_| AppError::ConfigSave)?;
    match defaults {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Other("default configuration is not a mapping".into())),
    }
}

fn parse_mapping(content: &str) -> AppResult<Mapping> {
    match serde_yaml::from_str::<Value>(content).map_err(|e| AppError::Config(e.to_string()))? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config("configuration root must be a mapping".into())),
    }
}

/// Names of the expected keys absent from `content`.
pub fn missing_keys(content: &str) -> AppResult<Vec<String>> {
    let current = parse_mapping(content)?;
    let mut out = Vec::new();
    for key in expected_keys()?.keys() {
        if !current.contains_key(key)
            && let Some(k) = key.as_str()
        {
            out.push(k.to_string());
        }
    }
    Ok(out)
}

/// Add missing keys with default values, leaving existing ones untouched.
/// Returns the upgraded document, or `None` when nothing was missing.
pub fn upgrade(content: &str) -> AppResult<Option<String>> {
    let mut current = parse_mapping(content)?;
    let mut changed = false;

    for (key, value) in expected_keys()? {
        if !current.contains_key(&key) {
            current.insert(key, value);
            changed = true;
        }
    }

    if !changed {
        return Ok(None);
    }

    serde_yaml::to_string(&Value::Mapping(current))
        .map(Some)
        .map_err(|_| AppError::ConfigSave)
}

/// Upgrade the file at `path` in place.
///   Ok(true)  → config updated
///   Ok(false) → no change needed
pub fn migrate_file(path: &Path) -> AppResult<bool> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    match upgrade(&content)? {
        Some(updated) => {
            fs::write(path, updated).map_err(|_| AppError::ConfigSave)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_missing_keys() {
        let missing = missing_keys("database: /tmp/x.sqlite\n").unwrap();
        assert_eq!(missing, vec!["currency_symbol", "chart_width"]);
    }

    #[test]
    fn upgrade_keeps_existing_values() {
        let out = upgrade("database: /tmp/x.sqlite\nchart_width: 12\n")
            .unwrap()
            .unwrap();
        let cfg = Config::from_yaml(&out).unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.chart_width, 12);
        assert!(missing_keys(&out).unwrap().is_empty());
    }

    #[test]
    fn complete_file_needs_no_upgrade() {
        let full = Config::default().to_yaml().unwrap();
        assert!(upgrade(&full).unwrap().is_none());
    }
}
