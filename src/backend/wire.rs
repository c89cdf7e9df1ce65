use serde::{Deserialize, Serialize};

/// Metric type attached to every published series.
pub const GAUGE: &str = "gauge";

#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub series: Vec<QuerySeries>,
}

#[derive(Debug, Deserialize)]
pub struct QuerySeries {
    #[serde(default)]
    pub pointlist: Vec<(f64, f64)>,
}

/// One destination series as the series endpoint expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRecord {
    pub metric: String,
    pub tags: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Serialize)]
pub struct SeriesPayload<'records> {
    pub series: &'records [SeriesRecord],
}

#[derive(Debug, Deserialize)]
pub struct PublishAck {
    pub status: String,
}
