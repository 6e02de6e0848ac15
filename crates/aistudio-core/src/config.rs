//! Loading thinking-budget settings at startup.
//!
//! Precedence, lowest to highest: built-in defaults, JSON config file,
//! environment variables. The result is frozen into [`ProcessDefaults`] and
//! never changes for the life of the process.

use aistudio_types::{ConfigError, ProcessDefaults, ThinkingSettings};

use crate::error::AppResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Points at a JSON settings file.
pub const CONFIG_PATH_ENV: &str = "AISTUDIO_CONFIG";
/// Boolean: request a bounded thinking budget by default.
pub const ENABLE_THINKING_BUDGET_ENV: &str = "ENABLE_THINKING_BUDGET";
/// Positive integer: the default budget in tokens.
pub const DEFAULT_THINKING_BUDGET_ENV: &str = "DEFAULT_THINKING_BUDGET";

const DATA_DIR: &str = ".aistudio_proxy";
const CONFIG_FILE: &str = "config.json";

/// Location of the optional per-user config file.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DATA_DIR).join(CONFIG_FILE))
}

/// Picks the settings file to read, if any.
///
/// An explicit path or `AISTUDIO_CONFIG` is returned as-is and must exist.
/// The per-user default is only used when it is present on disk.
pub fn resolve_config_path<F>(explicit: Option<&Path>, lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = lookup(CONFIG_PATH_ENV).filter(|p| !p.trim().is_empty()) {
        return Some(PathBuf::from(path));
    }
    default_config_path().filter(|p| p.is_file())
}

/// Reads settings from a JSON file. Missing keys keep their defaults.
pub fn read_settings_file(path: &Path) -> Result<ThinkingSettings, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::from_io_error(path.display().to_string(), &e))?;
    serde_json::from_str(&content).map_err(|e| ConfigError::from_json_error(&e))
}

/// Overlays `ENABLE_THINKING_BUDGET` / `DEFAULT_THINKING_BUDGET` from `lookup`.
pub fn apply_env_overrides<F>(
    mut settings: ThinkingSettings,
    lookup: F,
) -> Result<ThinkingSettings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(ENABLE_THINKING_BUDGET_ENV) {
        settings.enable_thinking_budget = parse_bool(&raw).ok_or_else(|| {
            ConfigError::validation(ENABLE_THINKING_BUDGET_ENV, format!("not a boolean: {raw}"))
        })?;
    }
    if let Some(raw) = lookup(DEFAULT_THINKING_BUDGET_ENV) {
        settings.default_thinking_budget = raw.trim().parse::<u64>().map_err(|e| {
            ConfigError::validation(DEFAULT_THINKING_BUDGET_ENV, format!("{raw}: {e}"))
        })?;
    }
    Ok(settings)
}

/// Full load against an arbitrary environment.
pub fn load_settings_with<F>(
    explicit: Option<&Path>,
    lookup: F,
) -> Result<ThinkingSettings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let settings = match resolve_config_path(explicit, &lookup) {
        Some(path) => {
            tracing::debug!("[Config] Reading thinking settings from {}", path.display());
            read_settings_file(&path)?
        },
        None => ThinkingSettings::default(),
    };
    apply_env_overrides(settings, &lookup)
}

/// Loads settings using the process environment.
pub fn load_settings(explicit: Option<&Path>) -> Result<ThinkingSettings, ConfigError> {
    load_settings_with(explicit, |key| std::env::var(key).ok())
}

/// Loads and validates settings into the immutable defaults snapshot.
pub fn load_defaults(explicit: Option<&Path>) -> AppResult<ProcessDefaults> {
    let defaults = load_settings(explicit)?.into_defaults()?;
    tracing::info!(
        "[Config] Thinking defaults: enabled={}, budget={}",
        defaults.default_thinking_enabled,
        defaults.default_budget
    );
    Ok(defaults)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    fn write_config(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_bool_spellings() {
        for raw in ["true", "TRUE", "1", "yes", " on "] {
            assert_eq!(parse_bool(raw), Some(true), "{raw}");
        }
        for raw in ["false", "0", "No", "off"] {
            assert_eq!(parse_bool(raw), Some(false), "{raw}");
        }
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_bool(""), None);
        assert_eq!(parse_bool("   "), None);
    }

    #[test]
    fn test_env_overrides() {
        let settings = apply_env_overrides(
            ThinkingSettings::default(),
            env(&[("ENABLE_THINKING_BUDGET", "true"), ("DEFAULT_THINKING_BUDGET", " 12000 ")]),
        )
        .unwrap();
        assert!(settings.enable_thinking_budget);
        assert_eq!(settings.default_thinking_budget, 12000);
    }

    #[test]
    fn test_env_invalid_values_name_variable() {
        let err =
            apply_env_overrides(ThinkingSettings::default(), env(&[("ENABLE_THINKING_BUDGET", "sure")]))
                .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationError { ref field, .. } if field == ENABLE_THINKING_BUDGET_ENV
        ));

        let err = apply_env_overrides(
            ThinkingSettings::default(),
            env(&[("DEFAULT_THINKING_BUDGET", "lots")]),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationError { ref field, .. } if field == DEFAULT_THINKING_BUDGET_ENV
        ));
    }

    #[test]
    fn test_empty_enable_flag_is_rejected() {
        let err =
            apply_env_overrides(ThinkingSettings::default(), env(&[("ENABLE_THINKING_BUDGET", "")]))
                .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationError { ref field, .. } if field == ENABLE_THINKING_BUDGET_ENV
        ));
    }

    #[test]
    fn test_load_defaults_wraps_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        match load_defaults(Some(&missing)) {
            Err(crate::error::AppError::Config(ConfigError::NotFound { path })) => {
                assert!(path.ends_with("absent.json"));
            },
            other => panic!("expected wrapped NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_file_then_env_precedence() {
        let file = write_config(r#"{"enable_thinking_budget": true, "default_thinking_budget": 2048}"#);

        let settings = load_settings_with(Some(file.path()), env(&[])).unwrap();
        assert!(settings.enable_thinking_budget);
        assert_eq!(settings.default_thinking_budget, 2048);

        let settings =
            load_settings_with(Some(file.path()), env(&[("DEFAULT_THINKING_BUDGET", "4096")]))
                .unwrap();
        assert!(settings.enable_thinking_budget);
        assert_eq!(settings.default_thinking_budget, 4096);
    }

    #[test]
    fn test_config_path_from_env() {
        let file = write_config(r#"{"default_thinking_budget": 1024}"#);
        let path = file.path().display().to_string();
        let settings = load_settings_with(None, env(&[("AISTUDIO_CONFIG", path.as_str())])).unwrap();
        assert!(!settings.enable_thinking_budget);
        assert_eq!(settings.default_thinking_budget, 1024);
    }

    #[test]
    fn test_explicit_path_wins_over_env() {
        let explicit = Path::new("/explicit.json");
        let resolved = resolve_config_path(Some(explicit), env(&[("AISTUDIO_CONFIG", "/env.json")]));
        assert_eq!(resolved, Some(PathBuf::from("/explicit.json")));
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = load_settings_with(Some(&missing), env(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let file = write_config("{ not json");
        let err = load_settings_with(Some(file.path()), env(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_zero_budget_from_env_fails_validation() {
        let file = write_config("{}");
        let settings =
            load_settings_with(Some(file.path()), env(&[("DEFAULT_THINKING_BUDGET", "0")])).unwrap();
        assert!(settings.into_defaults().is_err());
    }
}
