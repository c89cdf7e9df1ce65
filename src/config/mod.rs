
use chrono::Utc;
use url::Url;

use crate::args::JobArgs;
use crate::error::ConfigError;

/// Default window: starts two hours before the invocation and spans one hour.
const DEFAULT_WINDOW_OFFSET_SECS: i64 = 7200;
const DEFAULT_WINDOW_SPAN_SECS: i64 = 3600;

/// Validated, immutable configuration for one run.
#[derive(Debug, Clone)]
pub struct JobConfig {
    pub api_key: String,
    pub app_key: String,
    pub api_url: Url,
    pub source_query: String,
    pub error_thresholds: Vec<f64>,
    pub destination_metric_name: String,
    pub destination_metric_tags: Vec<String>,
    pub granularity_divisor: usize,
    pub start_time: i64,
    pub end_time: i64,
}

impl JobConfig {
    /// Validates raw arguments into a configuration value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingFields` naming every absent required
    /// field, or an error for a malformed API URL or inverted time window.
    pub fn from_args(args: &JobArgs) -> Result<Self, ConfigError> {
        let mut missing: Vec<&'static str> = Vec::new();

        let api_key = required(args.api_key.as_ref(), "api-key (DATADOG_API_KEY)", &mut missing);
        let app_key = required(args.app_key.as_ref(), "app-key (DATADOG_APP_KEY)", &mut missing);
        let source_query = required(
            args.source_query.as_ref(),
            "source-query (SOURCE_METRIC_QUERY)",
            &mut missing,
        );
        let destination_metric_name = required(
            args.destination_metric_name.as_ref(),
            "destination-metric-name (DESTINATION_METRIC_NAME)",
            &mut missing,
        );
        if args.error_thresholds.is_empty() {
            missing.push("error-thresholds (ERROR_THRESHOLDS)");
        }
        if args.destination_metric_tags.is_empty() {
            missing.push("destination-metric-tags (DESTINATION_METRIC_TAGS)");
        }

        if !missing.is_empty() {
            return Err(ConfigError::MissingFields { fields: missing });
        }

        let api_url = Url::parse(&args.api_url).map_err(|err| ConfigError::InvalidApiUrl {
            value: args.api_url.clone(),
            source: err,
        })?;

        let start_time = args.start_time.unwrap_or_else(default_start_time);
        let end_time = args
            .end_time
            .unwrap_or_else(|| start_time.saturating_add(DEFAULT_WINDOW_SPAN_SECS));
        if end_time <= start_time {
            return Err(ConfigError::WindowInverted {
                start: start_time,
                end: end_time,
            });
        }

        Ok(Self {
            api_key,
            app_key,
            api_url,
            source_query,
            error_thresholds: args.error_thresholds.clone(),
            destination_metric_name,
            destination_metric_tags: args.destination_metric_tags.clone(),
            granularity_divisor: args.granularity_divisor.get(),
            start_time,
            end_time,
        })
    }
}

fn required(
    value: Option<&String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> String {
    value.cloned().unwrap_or_else(|| {
        missing.push(name);
        String::new()
    })
}

fn default_start_time() -> i64 {
    Utc::now()
        .timestamp()
        .saturating_sub(DEFAULT_WINDOW_OFFSET_SECS)
}
