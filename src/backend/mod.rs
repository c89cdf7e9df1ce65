//! Client for the two backend calls: the error-rate query and the series
//! publish. One call-and-return per run; retries and timeouts beyond the
//! reqwest defaults are deliberately absent.
mod wire;


pub use wire::{GAUGE, PublishAck, QueryResponse, QuerySeries, SeriesRecord};

use reqwest::Client;
use tracing::info;
use url::Url;

use crate::config::JobConfig;
use crate::derive::Sample;
use crate::error::BackendError;

use wire::SeriesPayload;

const QUERY_PATH: &str = "api/v1/query";
const SERIES_PATH: &str = "api/v1/series";
const API_KEY_HEADER: &str = "DD-API-KEY";
const APP_KEY_HEADER: &str = "DD-APPLICATION-KEY";
const ACK_OK: &str = "ok";

pub struct BackendClient {
    http: Client,
    api_url: Url,
    api_key: String,
    app_key: String,
}

impl BackendClient {
    /// Builds the HTTP client for one run.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reqwest client cannot be built.
    pub fn new(config: &JobConfig) -> Result<Self, BackendError> {
        let http = Client::builder()
            .build()
            .map_err(|err| BackendError::BuildClientFailed { source: err })?;
        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            app_key: config.app_key.clone(),
        })
    }

    /// Fetches the configured window and returns the first series' pointlist
    /// as samples.
    ///
    /// Responses carrying more than one series are truncated to the first;
    /// the rest is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error for transport failures, non-success HTTP statuses,
    /// undecodable bodies, or a response with no series or no points.
    pub async fn query_error_rate(&self, config: &JobConfig) -> Result<Vec<Sample>, BackendError> {
        let url = self.endpoint(QUERY_PATH)?;
        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(APP_KEY_HEADER, &self.app_key)
            .query(&[
                ("from", config.start_time.to_string()),
                ("to", config.end_time.to_string()),
                ("query", config.source_query.clone()),
            ])
            .send()
            .await
            .map_err(|err| BackendError::QueryRequest { source: err })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::QueryStatus { status });
        }

        let body: QueryResponse = response
            .json()
            .await
            .map_err(|err| BackendError::QueryDecode { source: err })?;
        let first = body
            .series
            .into_iter()
            .next()
            .ok_or_else(|| BackendError::NoSeries {
                query: config.source_query.clone(),
            })?;
        if first.pointlist.is_empty() {
            return Err(BackendError::NoData {
                query: config.source_query.clone(),
            });
        }

        let samples: Vec<Sample> = first
            .pointlist
            .into_iter()
            .map(|(timestamp, value)| Sample { timestamp, value })
            .collect();
        info!(
            "Retrieved {} measurements for query {}",
            samples.len(),
            config.source_query
        );
        Ok(samples)
    }

    /// Publishes all gauge records in a single request.
    ///
    /// # Errors
    ///
    /// Returns an error for transport failures, non-success HTTP statuses,
    /// undecodable bodies, or an acknowledgement whose status is not `ok`.
    pub async fn publish(&self, records: &[SeriesRecord]) -> Result<PublishAck, BackendError> {
        let url = self.endpoint(SERIES_PATH)?;
        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(APP_KEY_HEADER, &self.app_key)
            .json(&SeriesPayload { series: records })
            .send()
            .await
            .map_err(|err| BackendError::PublishRequest { source: err })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::PublishStatus { status });
        }

        let ack: PublishAck = response
            .json()
            .await
            .map_err(|err| BackendError::PublishDecode { source: err })?;
        if ack.status != ACK_OK {
            return Err(BackendError::PublishRejected { status: ack.status });
        }
        Ok(ack)
    }

    fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        self.api_url
            .join(path)
            .map_err(|err| BackendError::InvalidEndpoint {
                endpoint: path.to_owned(),
                source: err,
            })
    }
}
