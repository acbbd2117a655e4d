use std::path::{Path, PathBuf};

use crate::config::schema::ServerConfig;
use crate::error::ConfigError;

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ServerConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    load_config_from_str(&content)
}

pub fn load_config_from_str(content: &str) -> Result<ServerConfig, ConfigError> {
    let config: ServerConfig = serde_json::from_str(content)?;

    validate_config(&config)?;

    Ok(config)
}

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "METRODOCS_CONFIG";

/// Returns the canonical config path: `~/.metrodocs/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".metrodocs").join("config.json"))
}

/// Loads the startup configuration.
///
/// An explicit path in `METRODOCS_CONFIG` must exist. Otherwise the default
/// path is used when present, and built-in defaults when it is not.
pub fn resolve_config() -> Result<ServerConfig, ConfigError> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        log::info!("Loading config from {}", Path::new(&path).display());
        return load_config(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => {
            log::info!("Loading config from {}", path.display());
            load_config(path)
        }
        _ => {
            log::info!("No config file found, using defaults");
            Ok(ServerConfig::default())
        }
    }
}

fn validate_config(config: &ServerConfig) -> Result<(), ConfigError> {
    if config.port == 0 {
        return Err(ConfigError::Validation {
            message: "port must be between 1 and 65535".to_string(),
        });
    }

    if config.max_upload_bytes == 0 {
        return Err(ConfigError::Validation {
            message: "maxUploadBytes must be greater than 0".to_string(),
        });
    }

    if tracing_subscriber::EnvFilter::try_new(&config.log_level).is_err() {
        return Err(ConfigError::Validation {
            message: format!("Invalid log level filter: {}", config.log_level),
        });
    }

    for origin in &config.cors_origins {
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(ConfigError::Validation {
                message: format!("CORS origin must be an http(s) URL: {}", origin),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ClassifierKind;
    use std::io::Write;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = load_config_from_str("{}").unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 5000);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.classifier, ClassifierKind::Keyword);
    }

    #[test]
    fn test_load_full_config() {
        let config_json = r#"
        {
            "host": "0.0.0.0",
            "port": 8080,
            "seedPath": "/etc/metrodocs/seed.json",
            "maxUploadBytes": 1024,
            "classifier": "random",
            "logLevel": "metrodocs=debug,info",
            "logJson": true,
            "corsOrigins": ["https://dashboard.example"]
        }
        "#;

        let config = load_config_from_str(config_json).unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(
            config.seed_path.as_deref(),
            Some(Path::new("/etc/metrodocs/seed.json"))
        );
        assert_eq!(config.max_upload_bytes, 1024);
        assert_eq!(config.classifier, ClassifierKind::Random);
        assert!(config.log_json);
        assert_eq!(config.cors_origins.len(), 1);
    }

    #[test]
    fn test_zero_port_rejected() {
        let result = load_config_from_str(r#"{"port": 0}"#);
        assert!(matches!(result, Err(ConfigError::Validation { .. })));
    }

    #[test]
    fn test_zero_upload_limit_rejected() {
        let result = load_config_from_str(r#"{"maxUploadBytes": 0}"#);
        assert!(matches!(result, Err(ConfigError::Validation { .. })));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = load_config_from_str(r#"{"prot": 80}"#);
        assert!(matches!(result, Err(ConfigError::ParseJson(_))));
    }

    #[test]
    fn test_bad_cors_origin_rejected() {
        let result = load_config_from_str(r#"{"corsOrigins": ["dashboard.example"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"port": 9000}}"#).unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_missing_file() {
        let result = load_config("/nonexistent/metrodocs.json");
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }

    #[test]
    fn test_default_config_path() {
        let path = default_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.ends_with("config.json"));
        assert!(path.to_string_lossy().contains(".metrodocs"));
    }
}
