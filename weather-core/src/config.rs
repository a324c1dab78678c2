use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const DEFAULT_GEOCODING_HOST: &str = "api.openweathermap.org";
pub const DEFAULT_WEATHER_HOST: &str = "api.open-meteo.com";

/// Hosts of the two remote services. Requests always go over plain HTTP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub geocoding_host: String,
    pub weather_host: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            geocoding_host: DEFAULT_GEOCODING_HOST.to_string(),
            weather_host: DEFAULT_WEATHER_HOST.to_string(),
        }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// weather_host = "localhost:8080"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// OpenWeather key used for geocoding.
    pub api_key: Option<String>,
    pub geocoding_host: Option<String>,
    pub weather_host: Option<String>,
}

impl Config {
    /// Load config from the platform location, or an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to the platform location, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// Pick the API key: an explicit one (flag or `API_KEY`) wins over the stored one.
    pub fn resolve_api_key(&self, explicit: Option<&str>) -> Result<String> {
        let usable = |key: &&str| !key.is_empty();

        explicit
            .map(str::trim)
            .filter(usable)
            .or_else(|| self.api_key.as_deref().map(str::trim).filter(usable))
            .map(str::to_owned)
            .ok_or_else(|| {
                anyhow!(
                    "No API key configured.\n\
                     Hint: set API_KEY (environment or .env file) or run `weather configure`."
                )
            })
    }

    /// Hosts from the config file, falling back to the public services.
    pub fn endpoints(&self) -> Endpoints {
        let defaults = Endpoints::default();
        Endpoints {
            geocoding_host: self.geocoding_host.clone().unwrap_or(defaults.geocoding_host),
            weather_host: self.weather_host.clone().unwrap_or(defaults.weather_host),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_as_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = Config::load_from(&dir.path().join("config.toml")).expect("load");

        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_and_load_round_trip_creates_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.set_api_key("OPEN_KEY".into());
        cfg.weather_host = Some("localhost:8080".into());
        cfg.save_to(&path).expect("save");

        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn broken_toml_reports_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_key = ").expect("write");

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn explicit_key_wins_over_stored_key() {
        let mut cfg = Config::default();
        cfg.set_api_key("STORED".into());

        assert_eq!(cfg.resolve_api_key(Some("FROM_ENV")).unwrap(), "FROM_ENV");
        assert_eq!(cfg.resolve_api_key(None).unwrap(), "STORED");
    }

    #[test]
    fn blank_explicit_key_falls_back_to_stored_key() {
        let mut cfg = Config::default();
        cfg.set_api_key("STORED".into());

        assert_eq!(cfg.resolve_api_key(Some("")).unwrap(), "STORED");
        assert_eq!(cfg.resolve_api_key(Some("   ")).unwrap(), "STORED");
    }

    #[test]
    fn explicit_key_is_trimmed() {
        assert_eq!(Config::default().resolve_api_key(Some(" KEY\n")).unwrap(), "KEY");
    }

    #[test]
    fn missing_key_errors_with_hint() {
        let err = Config::default().resolve_api_key(None).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No API key configured"));
        assert!(msg.contains("weather configure"));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        assert!(Config::default().resolve_api_key(Some("  ")).is_err());
    }

    #[test]
    fn endpoints_fall_back_to_public_hosts() {
        let mut cfg = Config::default();
        assert_eq!(cfg.endpoints(), Endpoints::default());

        cfg.geocoding_host = Some("127.0.0.1:9000".into());
        let endpoints = cfg.endpoints();
        assert_eq!(endpoints.geocoding_host, "127.0.0.1:9000");
        assert_eq!(endpoints.weather_host, DEFAULT_WEATHER_HOST);
    }
}
