use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Invalid backend endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Metric query failed: {source}")]
    QueryRequest {
        #[source]
        source: reqwest::Error,
    },
    #[error("Metric query returned HTTP {status}.")]
    QueryStatus { status: reqwest::StatusCode },
    #[error("Failed to decode query response: {source}")]
    QueryDecode {
        #[source]
        source: reqwest::Error,
    },
    #[error("Query '{query}' returned no series.")]
    NoSeries { query: String },
    #[error("Query '{query}' returned a series with no points.")]
    NoData { query: String },
    #[error("Series publish failed: {source}")]
    PublishRequest {
        #[source]
        source: reqwest::Error,
    },
    #[error("Series publish returned HTTP {status}.")]
    PublishStatus { status: reqwest::StatusCode },
    #[error("Failed to decode publish acknowledgement: {source}")]
    PublishDecode {
        #[source]
        source: reqwest::Error,
    },
    #[error("Series publish rejected with status '{status}'.")]
    PublishRejected { status: String },
}
