use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("missing argument for amount to invest")]
    MissingAmount,

    #[error("unable to parse the amount to invest '{0}' as a number")]
    InvalidAmount(String),

    #[error("amount to invest must be positive, got {0}")]
    NonPositiveAmount(f64),

    #[error("unable to get rates from the api: {0}")]
    Request(#[source] reqwest::Error),

    #[error("rates api responded with status {0}")]
    Status(u16),

    #[error("unable to read the response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("unable to parse rates as json: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("invalid rate for {code}: {reason}")]
    InvalidRate { code: String, reason: String },

    #[error("unable to encode allocation: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("unable to parse env variables: {0}")]
    Config(#[from] envy::Error),
}

impl Error {
    /// Errors caused by the command line rather than the outside world.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Error::MissingAmount | Error::InvalidAmount(_) | Error::NonPositiveAmount(_)
        )
    }
}
