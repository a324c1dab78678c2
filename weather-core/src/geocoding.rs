use tracing::debug;

use crate::{error::ClientError, http::Executor, model::Location};

pub const GEOCODING_PATH: &str = "/geo/1.0/direct";

const LIMIT: u32 = 1;

/// Resolve a city name to the coordinates of its first geocoding match.
pub async fn resolve(
    executor: &dyn Executor,
    host: &str,
    city: &str,
    api_key: &str,
) -> Result<Location, ClientError> {
    let query = [
        ("q", city.to_string()),
        ("limit", LIMIT.to_string()),
        ("appid", api_key.to_string()),
    ];

    let body = executor.execute(host, GEOCODING_PATH, &query).await?;

    let matches: Vec<Location> =
        serde_json::from_slice(&body).map_err(|source| ClientError::decode(&body, source))?;

    let location = matches
        .into_iter()
        .next()
        .ok_or_else(|| ClientError::NotFound { city: city.to_string() })?;

    debug!(city, lat = location.latitude, lon = location.longitude, "location resolved");
    Ok(location)
}
