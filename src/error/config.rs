use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {}.", fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },
    #[error("Invalid API URL '{value}': {source}")]
    InvalidApiUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Time window end ({end}) must be after start ({start}).")]
    WindowInverted { start: i64, end: i64 },
}
