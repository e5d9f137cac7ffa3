//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming the TOML config file.
pub const CONFIG_PATH_ENV: &str = "APP_CONFIG";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: AppConfig = toml::from_str(&content)?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Build the configuration for process startup.
///
/// Reads the file named by `APP_CONFIG` when set, otherwise starts from
/// defaults. Environment overrides are applied in both cases.
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) => load_config(Path::new(&path)),
        Err(_) => {
            let mut config = AppConfig::default();
            apply_env_overrides(&mut config, |key| std::env::var(key).ok());
            validate_config(&config).map_err(ConfigError::Validation)?;
            Ok(config)
        }
    }
}

/// The deployment environment may supply the base path the upstream proxy
/// mounts us under.
fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(base) = lookup(&config.proxy.base_path_env) {
        if !base.is_empty() {
            config.proxy.base_path = base;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [listener]
            bind_address = "127.0.0.1:6000"

            [proxy]
            scheme_header = "x-forwarded-proto"
            base_path_env = "QUERY_DEMO_TEST_UNSET_BASE_PATH"
            "#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:6000");
        assert_eq!(config.proxy.scheme_header, "x-forwarded-proto");
        assert_eq!(config.proxy.base_path, "");
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [timeouts]
            request_secs = 0
            "#
        )
        .unwrap();

        match load_config(file.path()) {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors, vec![ValidationError::RequestTimeout]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_env_override_sets_base_path() {
        let mut config = AppConfig::default();
        apply_env_overrides(&mut config, |key| {
            (key == "APP_BASE_PATH").then(|| "/apps/demo".to_string())
        });
        assert_eq!(config.proxy.base_path, "/apps/demo");
    }

    #[test]
    fn test_empty_env_value_is_ignored() {
        let mut config = AppConfig::default();
        config.proxy.base_path = "/from-file".into();
        apply_env_overrides(&mut config, |_| Some(String::new()));
        assert_eq!(config.proxy.base_path, "/from-file");
    }
}
