use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use tracing::{debug, warn};

use crate::error::ClientError;

/// Query parameters in the order they are appended to the URL.
pub type Query<'a> = [(&'a str, String)];

/// Issues a single GET and hands back the raw body.
#[async_trait]
pub trait Executor: Send + Sync + Debug {
    async fn execute(
        &self,
        host: &str,
        path: &str,
        query: &Query<'_>,
    ) -> Result<Vec<u8>, ClientError>;
}

/// Plain-HTTP executor backed by `reqwest`. No timeout and no retry; the
/// status code is not checked, the body is returned whatever it is.
#[derive(Debug, Clone, Default)]
pub struct HttpExecutor {
    http: Client,
}

impl HttpExecutor {
    pub fn new() -> Self {
        Self::default()
    }
}

pub(crate) fn build_url(host: &str, path: &str) -> String {
    format!("http://{}/{}", host, path.trim_start_matches('/'))
}

#[async_trait]
impl Executor for HttpExecutor {
    async fn execute(
        &self,
        host: &str,
        path: &str,
        query: &Query<'_>,
    ) -> Result<Vec<u8>, ClientError> {
        let url = build_url(host, path);
        debug!(%url, params = query.len(), "sending request");

        let res = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| ClientError::Request { url: url.clone(), source })?;

        let status = res.status();
        if !status.is_success() {
            warn!(%url, %status, "non-success status, decoding body anyway");
        }

        let body = res
            .bytes()
            .await
            .map_err(|source| ClientError::Request { url: url.clone(), source })?;

        debug!(%url, %status, bytes = body.len(), "response received");
        Ok(body.to_vec())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_uses_plain_http_and_tolerates_leading_slash() {
        assert_eq!(
            build_url("api.open-meteo.com", "/v1/forecast"),
            "http://api.open-meteo.com/v1/forecast"
        );
        assert_eq!(
            build_url("api.openweathermap.org", "geo/1.0/direct"),
            "http://api.openweathermap.org/geo/1.0/direct"
        );
    }

    #[tokio::test]
    async fn connection_failure_is_a_request_error() {
        let host = fake::closed_address();
        let err = HttpExecutor::new()
            .execute(
                &host,
                "/v1/forecast",
                &[("current", "temperature_2m".to_string())],
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Request { .. }));
        assert!(err.to_string().contains(&format!("http://{host}/v1/forecast")));
    }
}
