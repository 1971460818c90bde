//! Configuration constants and profile loading for lotline
//!
//! Profiles live in an INI file, one section per profile:
//!
//! ```ini
//! [default]
//! api_origin = https://auction.example.com
//! request_timeout_secs = 10
//! log_file = ~/.lotline/lotline.log
//! ```

use anyhow::{Context, Result};
use ini::Ini;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default config file path for lotline
pub const DEFAULT_CONFIG_PATH: &str = "~/.lotline/config";

/// Environment variable name for overriding the config path
pub const CONFIG_PATH_ENV_VAR: &str = "LOTLINE_CONFIG_PATH";

/// Environment variable carrying the API origin, as deployments set it
pub const API_ORIGIN_ENV_VAR: &str = "API_ORIGIN";

pub const DEFAULT_API_ORIGIN: &str = "http://localhost:3000";

pub const DEFAULT_PROFILE: &str = "default";

/// Get the config file path, checking environment variable first, then falling back to default
pub fn get_config_path() -> String {
    std::env::var_os(CONFIG_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

/// Settings of one storefront profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub api_origin: String,
    pub request_timeout: Duration,
    pub log_file: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            api_origin: std::env::var(API_ORIGIN_ENV_VAR)
                .unwrap_or_else(|_| DEFAULT_API_ORIGIN.to_string()),
            request_timeout: Duration::from_secs(crate::storefront::services::DEFAULT_TIMEOUT_SECS),
            log_file: None,
        }
    }
}

impl StoreConfig {
    /// Load `profile` from the file at `path`.
    ///
    /// A missing file or section yields the defaults; a file that exists but
    /// cannot be parsed is an error.
    pub fn load(path: &str, profile: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path).into_owned();
        let path = Path::new(&expanded);
        if !path.exists() {
            tracing::debug!("config file '{}' not found, using defaults", expanded);
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)
            .with_context(|| format!("Failed to read config file '{expanded}'"))?;
        let Some(section) = ini.section(Some(profile)) else {
            tracing::warn!("profile '{}' not found in '{}'", profile, expanded);
            return Ok(Self::default());
        };

        let mut config = Self::default();
        if let Some(origin) = section.get("api_origin") {
            config.api_origin = origin.trim().to_string();
        }
        if let Some(timeout) = section.get("request_timeout_secs") {
            let secs: u64 = timeout.trim().parse().with_context(|| {
                format!("Invalid request_timeout_secs '{timeout}' in profile '{profile}'")
            })?;
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(log_file) = section.get("log_file") {
            config.log_file = Some(PathBuf::from(shellexpand::tilde(log_file.trim()).as_ref()));
        }

        Ok(config)
    }

    pub fn with_api_origin(mut self, origin: Option<&str>) -> Self {
        if let Some(origin) = origin {
            self.api_origin = origin.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn should_use_defaults_when_file_is_missing() {
        let config = StoreConfig::load("/nonexistent/lotline/config", "default").unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn should_read_profile_section() {
        let file = config_file(
            "[default]\napi_origin = http://a.test\n\n[staging]\napi_origin = http://s.test\nrequest_timeout_secs = 3\nlog_file = /tmp/lotline.log\n",
        );
        let path = file.path().to_str().unwrap();

        let staging = StoreConfig::load(path, "staging").unwrap();
        assert_eq!(staging.api_origin, "http://s.test");
        assert_eq!(staging.request_timeout, Duration::from_secs(3));
        assert_eq!(staging.log_file, Some(PathBuf::from("/tmp/lotline.log")));

        let default = StoreConfig::load(path, "default").unwrap();
        assert_eq!(default.api_origin, "http://a.test");
    }

    #[test]
    fn should_fall_back_when_profile_is_missing() {
        let file = config_file("[default]\napi_origin = http://a.test\n");
        let config = StoreConfig::load(file.path().to_str().unwrap(), "prod").unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn should_reject_bad_timeout() {
        let file = config_file("[default]\nrequest_timeout_secs = soon\n");
        assert!(StoreConfig::load(file.path().to_str().unwrap(), "default").is_err());
    }

    #[test]
    fn command_line_origin_should_win() {
        let config = StoreConfig::default().with_api_origin(Some("http://cli.test"));
        assert_eq!(config.api_origin, "http://cli.test");
        let untouched = config.clone().with_api_origin(None);
        assert_eq!(untouched.api_origin, "http://cli.test");
    }

    #[test]
    fn should_read_config_path_override() {
        let original = std::env::var_os(CONFIG_PATH_ENV_VAR);

        std::env::set_var(CONFIG_PATH_ENV_VAR, "/custom/config");
        assert_eq!(get_config_path(), "/custom/config");
        std::env::remove_var(CONFIG_PATH_ENV_VAR);
        assert_eq!(get_config_path(), DEFAULT_CONFIG_PATH);

        if let Some(val) = original {
            std::env::set_var(CONFIG_PATH_ENV_VAR, val);
        }
    }
}
