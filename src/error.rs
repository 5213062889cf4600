use thiserror::Error;

/// Every way a single scrape can fail. All of them end the run.
#[derive(Debug, Error)]
pub enum WodError {
    /// The server answered with an error status; usually no post exists for that date.
    #[error("couldn't find URL {url} (HTTP {status})")]
    NotFound {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("no connection to {url}")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected page format: {0}")]
    UnexpectedPageFormat(String),

    #[error("delay of {0} days is outside the supported calendar range")]
    DateOutOfRange(i64),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to write output")]
    Output(#[from] std::io::Error),
}

impl WodError {
    /// The URL the failing request was sent to, if the failure came from the network.
    pub fn url(&self) -> Option<&str> {
        match self {
            WodError::NotFound { url, .. }
            | WodError::Unreachable { url, .. }
            | WodError::Fetch { url, .. } => Some(url),
            _ => None,
        }
    }
}
