mod parsers;
mod types;

#[cfg(test)]
mod tests;

pub use types::PositiveUsize;

use clap::Parser;

use parsers::parse_positive_usize;

/// Raw invocation surface: every knob is both a CLI flag and an environment
/// variable. Required fields stay optional here so that validation can report
/// all missing fields at once instead of failing on the first.
#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Derives service availability gauges from an error-rate series and republishes them to a Datadog-compatible metrics backend."
)]
pub struct JobArgs {
    /// API key for the metrics backend
    #[arg(long = "api-key", env = "DATADOG_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Application key for the metrics backend
    #[arg(long = "app-key", env = "DATADOG_APP_KEY", hide_env_values = true)]
    pub app_key: Option<String>,

    /// Base URL of the metrics API
    #[arg(
        long = "api-url",
        env = "DATADOG_API_URL",
        default_value = "https://api.datadoghq.com"
    )]
    pub api_url: String,

    /// Query returning the source error-rate series
    #[arg(long = "source-query", env = "SOURCE_METRIC_QUERY")]
    pub source_query: Option<String>,

    /// Error thresholds to classify against (comma-separated)
    #[arg(
        long = "error-thresholds",
        env = "ERROR_THRESHOLDS",
        value_delimiter = ','
    )]
    pub error_thresholds: Vec<f64>,

    /// Base name for the published gauge series
    #[arg(long = "destination-metric-name", env = "DESTINATION_METRIC_NAME")]
    pub destination_metric_name: Option<String>,

    /// Tags attached to every published series (comma-separated)
    #[arg(
        long = "destination-metric-tags",
        env = "DESTINATION_METRIC_TAGS",
        value_delimiter = ','
    )]
    pub destination_metric_tags: Vec<String>,

    /// Number of sub-intervals to split the sample window into
    #[arg(
        long = "granularity-divisor",
        env = "GRANULARITY_DIVISOR",
        default_value = "1",
        value_parser = parse_positive_usize
    )]
    pub granularity_divisor: PositiveUsize,

    /// Window start as epoch seconds (default: now - 2h)
    #[arg(long = "start-time", env = "START_TIME")]
    pub start_time: Option<i64>,

    /// Window end as epoch seconds (default: start + 1h)
    #[arg(long = "end-time", env = "END_TIME")]
    pub end_time: Option<i64>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
