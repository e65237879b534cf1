//! RON configuration for the app.
//!
//! ```ron
//! (
//!     base_url: "http://127.0.0.1:5000",
//!     request_timeout_secs: Some(30),
//!     snapshot_dir: Some("pages"),
//! )
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use compass_engine::ClientSettings;
use compass_logging::compass_info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILENAME: &str = "compass.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub snapshot_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: ClientSettings::default().base_url,
            connect_timeout_secs: None,
            request_timeout_secs: None,
            snapshot_dir: None,
        }
    }
}

impl AppConfig {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.base_url.clone(),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Loads an explicit config file, or `./compass.ron` when it exists, or
/// the defaults. Only an explicit path that cannot be read is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG_FILENAME);
            if !fallback.exists() {
                return Ok(AppConfig::default());
            }
            fallback
        }
    };

    let text = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let config = parse_config(&text, &path)?;
    compass_info!("Loaded config from {:?}", path);
    Ok(config)
}

fn parse_config(text: &str, path: &Path) -> Result<AppConfig, ConfigError> {
    ron::from_str(text).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = parse_config(
            r#"(base_url: "http://jobs.local", request_timeout_secs: Some(30))"#,
            Path::new("inline.ron"),
        )
        .unwrap();

        assert_eq!(config.base_url, "http://jobs.local");
        assert_eq!(config.connect_timeout_secs, None);
        let settings = config.client_settings();
        assert_eq!(settings.request_timeout, Some(Duration::from_secs(30)));
        assert_eq!(settings.connect_timeout, None);
    }

    #[test]
    fn defaults_leave_timeouts_unset() {
        let settings = AppConfig::default().client_settings();
        assert_eq!(settings.base_url, "http://127.0.0.1:5000");
        assert!(settings.request_timeout.is_none());
    }

    #[test]
    fn explicit_path_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.ron");
        assert!(matches!(
            load_config(Some(&missing)),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn malformed_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("compass.ron");
        fs::write(&path, "(base_url: 42)").unwrap();
        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn round_trips_snapshot_dir() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("compass.ron");
        let config = AppConfig {
            snapshot_dir: Some(PathBuf::from("pages")),
            ..AppConfig::default()
        };
        fs::write(&path, ron::to_string(&config).unwrap()).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap(), config);
    }
}
