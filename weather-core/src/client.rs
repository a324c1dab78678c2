use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::instrument;

use crate::{
    config::Endpoints,
    forecast, geocoding,
    http::{Executor, HttpExecutor},
    model::{UnitPreference, WeatherReport},
};

/// Runs the geocode → temperature → wind speed chain for one city.
///
/// Everything it needs is handed in explicitly; it never looks at the
/// process environment.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    endpoints: Endpoints,
    executor: Arc<dyn Executor>,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoints(api_key, Endpoints::default())
    }

    pub fn with_endpoints(api_key: String, endpoints: Endpoints) -> Self {
        Self::with_executor(api_key, endpoints, Arc::new(HttpExecutor::new()))
    }

    pub fn with_executor(
        api_key: String,
        endpoints: Endpoints,
        executor: Arc<dyn Executor>,
    ) -> Self {
        Self { api_key, endpoints, executor }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetch current readings for `city`. The first failing stage aborts the
    /// chain and is named in the error context.
    #[instrument(skip(self), fields(weather_host = %self.endpoints.weather_host))]
    pub async fn get_weather(&self, city: &str, units: UnitPreference) -> Result<WeatherReport> {
        let executor = self.executor.as_ref();

        let location =
            geocoding::resolve(executor, &self.endpoints.geocoding_host, city, &self.api_key)
                .await
                .context("can't get location")?;

        let temperature = forecast::query_temperature(
            executor,
            &self.endpoints.weather_host,
            location,
            units.temperature,
        )
        .await
        .context("can't get temperature")?;

        let wind_speed = forecast::query_wind_speed(
            executor,
            &self.endpoints.weather_host,
            location,
            units.wind_speed,
        )
        .await
        .context("can't get wind speed")?;

        Ok(WeatherReport { city: city.to_string(), temperature, wind_speed, units })
    }

    /// Boolean-flag form of [`WeatherClient::get_weather`], returning the rendered report.
    pub async fn get_weather_with_flags(
        &self,
        city: &str,
        want_fahrenheit: bool,
        want_kmh: bool,
    ) -> Result<String> {
        let units = UnitPreference::from_flags(want_fahrenheit, want_kmh);
        let report = self.get_weather(city, units).await?;
        Ok(report.to_string())
    }
}
