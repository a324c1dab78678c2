use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode};
use tracing::{debug, info, warn};
use weather_core::{Config, UnitPreference, WeatherClient};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather CLI")]
pub struct Cli {
    /// OpenWeather API key used for geocoding; overrides the stored one.
    #[arg(long, env = "API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Get the current weather for a city.
    Get {
        /// City name, e.g. "Paris".
        city: String,

        /// Report temperature in fahrenheit instead of celsius.
        #[arg(long = "F")]
        fahrenheit: bool,

        /// Report wind speed in km/h instead of m/s.
        #[arg(long)]
        kmh: bool,
    },

    /// Store the API key in the config file.
    Configure,
}

impl Cli {
    /// Run the selected command and return what should be printed.
    pub async fn run(self) -> Result<String> {
        match self.command {
            Command::Configure => {
                let mut config = Config::load()?;
                let api_key = Password::new("OpenWeather API key:")
                    .without_confirmation()
                    .with_display_mode(PasswordDisplayMode::Masked)
                    .prompt()
                    .context("Failed to read API key")?;

                config.set_api_key(api_key.trim().to_string());
                let path = config.save()?;
                info!(path = %path.display(), "configuration saved");

                Ok(format!("API key saved to {}", path.display()))
            }
            Command::Get { city, fahrenheit, kmh } => {
                let config = config_for_get(Config::load(), self.api_key.as_deref())?;
                let api_key = config.resolve_api_key(self.api_key.as_deref())?;
                let client = WeatherClient::with_endpoints(api_key, config.endpoints());
                debug!(endpoints = ?client.endpoints(), "client ready");

                let report =
                    client.get_weather(&city, UnitPreference::from_flags(fahrenheit, kmh)).await?;
                Ok(report.to_string())
            }
        }
    }
}

/// A broken config file only matters to `get` when it is the sole source of the API key.
fn config_for_get(loaded: Result<Config>, explicit_key: Option<&str>) -> Result<Config> {
    match loaded {
        Ok(config) => Ok(config),
        Err(err) if explicit_key.is_some_and(|key| !key.trim().is_empty()) => {
            let rendered = format!("{err:#}");
            warn!(error = %rendered, "ignoring config file, API key given explicitly");
            Ok(Config::default())
        }
        Err(err) => Err(err.context(
            "Config file is unusable; fix or remove it, or pass the key via API_KEY / --api-key",
        )),
    }
}
