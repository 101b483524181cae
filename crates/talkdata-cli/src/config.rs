use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use talkdata_sdk::{ApiBase, ClientConfig, DEFAULT_API_BASE, DEFAULT_ORIGIN, DEFAULT_TIMEOUT};

pub const API_URL_ENV: &str = "TALKDATA_API_URL";
pub const CONFIG_PATH_ENV: &str = "TALKDATA_CONFIG";

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// `<config_dir>/talkdata/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("talkdata").join("config.toml"))
    }
}

/// Overrides collected from the command line and environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub env_api_url: Option<String>,
    pub origin: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Process-wide settings, resolved once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base: ApiBase,
    pub timeout: Option<Duration>,
}

impl Settings {
    /// Precedence: command line, then environment, then config file, then defaults.
    pub fn resolve(overrides: &Overrides, config: &Config) -> Result<Self> {
        let base = overrides
            .api_url
            .as_deref()
            .or(overrides.env_api_url.as_deref().filter(|v| !v.is_empty()))
            .or(config.api_base.as_deref())
            .unwrap_or(DEFAULT_API_BASE);
        let origin = overrides
            .origin
            .as_deref()
            .or(config.origin.as_deref())
            .unwrap_or(DEFAULT_ORIGIN);

        let api_base = ApiBase::resolve(base, origin)?;

        let timeout = match overrides.timeout_secs.or(config.timeout_secs) {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => Some(DEFAULT_TIMEOUT),
        };

        tracing::debug!(api_base = %api_base, ?timeout, "settings resolved");
        Ok(Self { api_base, timeout })
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_base.clone()).with_timeout(self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talkdata_testing::TempConfig;

    #[test]
    fn test_missing_file_gives_defaults() {
        let file = TempConfig::missing();
        assert_eq!(Config::load_from(file.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_load_from_toml() {
        let file = TempConfig::with_contents(
            "api_base = \"https://data.example.com/api\"\ntimeout_secs = 5\n",
        );

        let config = Config::load_from(file.path()).unwrap();

        assert_eq!(config.api_base.as_deref(), Some("https://data.example.com/api"));
        assert_eq!(config.origin, None);
        assert_eq!(config.timeout_secs, Some(5));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let file = TempConfig::with_contents("api_base = [");
        assert!(Config::load_from(file.path()).is_err());
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve(&Overrides::default(), &Config::default()).unwrap();

        assert_eq!(settings.api_base.as_str(), "http://localhost:5000/api");
        assert_eq!(settings.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_precedence() {
        let config = Config {
            api_base: Some("/from-config".to_string()),
            origin: Some("http://config-host:8000".to_string()),
            timeout_secs: Some(10),
        };

        let env_only = Overrides {
            env_api_url: Some("/from-env".to_string()),
            ..Default::default()
        };
        assert_eq!(
            Settings::resolve(&env_only, &config).unwrap().api_base.as_str(),
            "http://config-host:8000/from-env"
        );

        let cli_and_env = Overrides {
            api_url: Some("https://cli.example.com/api".to_string()),
            env_api_url: Some("/from-env".to_string()),
            timeout_secs: Some(0),
            ..Default::default()
        };
        let settings = Settings::resolve(&cli_and_env, &config).unwrap();
        assert_eq!(settings.api_base.as_str(), "https://cli.example.com/api");
        assert_eq!(settings.timeout, None);

        let config_only = Settings::resolve(&Overrides::default(), &config).unwrap();
        assert_eq!(config_only.api_base.as_str(), "http://config-host:8000/from-config");
        assert_eq!(config_only.timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_empty_env_value_ignored() {
        let overrides = Overrides {
            env_api_url: Some(String::new()),
            ..Default::default()
        };

        let settings = Settings::resolve(&overrides, &Config::default()).unwrap();
        assert_eq!(settings.api_base.as_str(), "http://localhost:5000/api");
    }
}
