use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Fields every current config file is expected to carry.
const EXPECTED_FIELDS: [&str; 4] = ["database", "roster_key", "strict_time_range", "dialer"];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;

    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// List the expected fields missing from the config file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(EXPECTED_FIELDS
        .iter()
        .copied()
        .filter(|f| !map.contains_key(Value::String((*f).to_string())))
        .collect())
}

/// Add any missing fields with their default value, keeping the existing
/// ones untouched.
///   Returns:
///   Ok(true)  → config updated
///   Ok(false) → no change needed
pub fn migrate_config(path: &Path) -> AppResult<bool> {
    let mut map = read_mapping(path)?;

    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => return Err(AppError::Config("default config is not a mapping".into())),
    };

    let mut changed = false;
    for field in EXPECTED_FIELDS {
        let key = Value::String(field.to_string());
        if map.contains_key(&key) {
            continue;
        }
        let value = defaults.get(&key).cloned().unwrap_or(Value::Null);
        info(format!("Adding missing field '{}'", field));
        map.insert(key, value);
        changed = true;
    }

    if changed {
        fs::write(path, serde_yaml::to_string(&Value::Mapping(map))?)?;
        success(format!("Configuration migrated: {}", path.display()));
        tracing::info!(path = %path.display(), "config migrated");
    }

    Ok(changed)
}
