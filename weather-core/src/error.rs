use thiserror::Error;

/// Failures of a single request/decode step against one of the remote APIs.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("can't do request to {url}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("can't unmarshal json: {body}")]
    Decode {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("can't unmarshal json: response has no `current.{field}` value")]
    MissingField { field: &'static str },

    #[error("no location found for '{city}'")]
    NotFound { city: String },
}

impl ClientError {
    pub(crate) fn decode(body: &[u8], source: serde_json::Error) -> Self {
        Self::Decode { body: truncate_body(&String::from_utf8_lossy(body)), source }
    }

    /// True for both malformed JSON and a well-formed response lacking the field asked for.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::MissingField { .. })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_is_kept_verbatim() {
        assert_eq!(truncate_body("{\"oops\""), "{\"oops\"");
    }

    #[test]
    fn long_body_is_cut_on_a_char_boundary() {
        let body = "é".repeat(300);
        let cut = truncate_body(&body);

        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 203);
    }

    #[test]
    fn missing_field_counts_as_decode_failure() {
        let err = ClientError::MissingField { field: "temperature_2m" };
        assert!(err.is_decode());
        assert!(err.to_string().contains("current.temperature_2m"));
    }
}
