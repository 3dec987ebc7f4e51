use std::fs;
use std::path::{Path, PathBuf};

use super::SiteConfig;
use super::errors::ConfigError;

const CONFIG_ENV: &str = "FOCCA_DOCS_CONFIG";

/// Status describing how the configuration was loaded from disk.
#[derive(Debug, Clone)]
pub(crate) enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading the configuration from disk.
#[derive(Debug)]
pub(crate) struct ConfigLoad {
    config: SiteConfig,
    status: ConfigLoadStatus,
    issues: Vec<ConfigError>,
}

impl ConfigLoad {
    fn new(config: SiteConfig, status: ConfigLoadStatus) -> Self {
        Self {
            config,
            status,
            issues: Vec::new(),
        }
    }

    /// Consume the value and return payload, status and field issues.
    pub(crate) fn into_parts(
        self,
    ) -> (SiteConfig, ConfigLoadStatus, Vec<ConfigError>) {
        (self.config, self.status, self.issues)
    }
}

/// Load the configuration from `$FOCCA_DOCS_CONFIG` or the user config dir.
pub(crate) fn load_config() -> Result<ConfigLoad, ConfigError> {
    load_config_from_path(&config_path())
}

fn load_config_from_path(path: &Path) -> Result<ConfigLoad, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigLoad::new(
                SiteConfig::default(),
                ConfigLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    let parsed = match serde_json::from_str::<serde_json::Value>(&data) {
        Ok(value) => value,
        Err(err) => {
            return Ok(ConfigLoad::new(
                SiteConfig::default(),
                ConfigLoadStatus::Invalid(format!("{err}")),
            ));
        },
    };

    let (config, issues) = SiteConfig::from_json(&parsed);
    Ok(ConfigLoad {
        config,
        status: ConfigLoadStatus::Loaded,
        issues,
    })
}

fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }

    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("focca-docs")
            .join("config.json");
    }

    std::env::temp_dir().join("focca-docs").join("config.json")
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use serde_json::json;

    use super::{ConfigLoadStatus, SiteConfig, load_config_from_path};
    use crate::config::ConfigError;

    #[test]
    fn given_missing_file_when_load_then_returns_default_with_missing_status() {
        let root = test_temp_dir("missing");
        let path = root.join("config.json");

        let loaded = load_config_from_path(&path)
            .expect("a missing config should not be an error");
        let (config, status, issues) = loaded.into_parts();

        assert!(matches!(status, ConfigLoadStatus::Missing));
        assert_eq!(config, SiteConfig::default());
        assert!(issues.is_empty());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_written_config_when_load_then_fields_match() {
        let root = test_temp_dir("round_trip");
        let path = root.join("config.json");
        let expected = SiteConfig {
            breakpoint: 900.0,
            basename: String::from("/orm"),
            ..SiteConfig::default()
        };
        let payload = serde_json::to_string_pretty(&expected)
            .expect("config should serialize");
        fs::write(&path, payload).expect("config should be written");

        let loaded =
            load_config_from_path(&path).expect("config should load");
        let (config, status, issues) = loaded.into_parts();

        assert!(matches!(status, ConfigLoadStatus::Loaded));
        assert_eq!(config, expected);
        assert!(issues.is_empty());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_load_then_returns_default_with_invalid_status() {
        let root = test_temp_dir("invalid_json");
        let path = root.join("config.json");
        fs::write(&path, "{ this is not valid json")
            .expect("invalid test payload should be written");

        let loaded = load_config_from_path(&path)
            .expect("loading invalid config should not fail with io error");
        let (config, status, _) = loaded.into_parts();

        assert_eq!(config, SiteConfig::default());
        match status {
            ConfigLoadStatus::Invalid(message) => {
                assert!(!message.is_empty());
            },
            other => panic!("expected invalid status, got {other:?}"),
        }

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_negative_width_when_load_then_field_issue_is_reported() {
        let root = test_temp_dir("negative_width");
        let path = root.join("config.json");
        let payload = json!({ "sidebar_width": -10, "breakpoint": 600 });
        fs::write(&path, payload.to_string())
            .expect("config should be written");

        let loaded =
            load_config_from_path(&path).expect("config should load");
        let (config, status, issues) = loaded.into_parts();

        assert!(matches!(status, ConfigLoadStatus::Loaded));
        assert_eq!(config.breakpoint, 600.0);
        assert_eq!(config.sidebar_width, SiteConfig::default().sidebar_width);
        assert!(matches!(
            issues.as_slice(),
            [ConfigError::Invalid {
                field: "sidebar_width",
                ..
            }]
        ));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "focca-docs-config-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
