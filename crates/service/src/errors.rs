use thiserror::Error;

/// The single failure kind of the data-access layer: the HTTP call did not
/// produce the expected JSON. Callers never see it; `handle_error` absorbs it.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Http failure for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Http failure response for {url}: {status}")]
    Status { url: String, status: reqwest::StatusCode },
    #[error("Http failure during parsing for {url}: {message}")]
    Decode { url: String, message: String },
}

impl ServiceError {
    /// The url is carried in the prefix, so it is stripped from `source`.
    pub fn transport(url: &str, source: reqwest::Error) -> Self {
        Self::Transport { url: url.to_string(), source: source.without_url() }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => url,
        }
    }
}
