use super::types::ThresholdSeries;
use crate::backend::{GAUGE, SeriesRecord};
use crate::config::JobConfig;

/// Formats derived availability into one gauge record per threshold.
///
/// The metric name is `{destination_metric_name}.{threshold}` with the
/// threshold rendered in its natural numeric form (`0.01`, not `0.010000`).
/// Tags are shared unmodified across thresholds; points keep group order.
#[must_use]
pub fn format_series(derived: &[ThresholdSeries], config: &JobConfig) -> Vec<SeriesRecord> {
    derived
        .iter()
        .map(|series| SeriesRecord {
            metric: format!(
                "{}.{}",
                config.destination_metric_name, series.threshold
            ),
            tags: config.destination_metric_tags.clone(),
            kind: GAUGE.to_owned(),
            points: series
                .points
                .iter()
                .map(|point| (point.timestamp, point.value))
                .collect(),
        })
        .collect()
}
