use serde::Deserialize;
use tracing::debug;

use crate::{
    error::ClientError,
    http::Executor,
    model::{Location, TemperatureUnit, WeatherReading, WindSpeedUnit},
};

pub const FORECAST_PATH: &str = "/v1/forecast";

const TEMPERATURE_FIELD: &str = "temperature_2m";
const WIND_SPEED_FIELD: &str = "wind_speed_10m";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: WeatherReading,
}

/// Current temperature at `location`, in `unit`.
pub async fn query_temperature(
    executor: &dyn Executor,
    host: &str,
    location: Location,
    unit: TemperatureUnit,
) -> Result<f64, ClientError> {
    let reading = query_current(
        executor,
        host,
        location,
        TEMPERATURE_FIELD,
        ("temperature_unit", unit.as_str()),
    )
    .await?;

    reading.temperature.ok_or(ClientError::MissingField { field: TEMPERATURE_FIELD })
}

/// Current wind speed at `location`, in `unit`.
pub async fn query_wind_speed(
    executor: &dyn Executor,
    host: &str,
    location: Location,
    unit: WindSpeedUnit,
) -> Result<f64, ClientError> {
    let reading = query_current(
        executor,
        host,
        location,
        WIND_SPEED_FIELD,
        ("wind_speed_unit", unit.as_str()),
    )
    .await?;

    reading.wind_speed.ok_or(ClientError::MissingField { field: WIND_SPEED_FIELD })
}

async fn query_current(
    executor: &dyn Executor,
    host: &str,
    location: Location,
    field: &str,
    (unit_param, unit_value): (&'static str, &str),
) -> Result<WeatherReading, ClientError> {
    let query = [
        ("latitude", format!("{:.6}", location.latitude)),
        ("longitude", format!("{:.6}", location.longitude)),
        ("current", field.to_string()),
        (unit_param, unit_value.to_string()),
    ];

    let body = executor.execute(host, FORECAST_PATH, &query).await?;

    let parsed: ForecastResponse =
        serde_json::from_slice(&body).map_err(|source| ClientError::decode(&body, source))?;

    debug!(field, unit = unit_value, reading = ?parsed.current, "current reading decoded");
    Ok(parsed.current)
}
