use super::partition::partition;
use super::types::{AvailabilityPoint, Sample, ThresholdSeries};
use crate::error::DeriveError;

/// Percentage of samples in `group` that do not exceed `threshold`.
///
/// A breach is a strict comparison: a sample exactly at the threshold still
/// counts as available. The result is in `[0, 100]`, exactly `100.0` when no
/// sample breaches and exactly `0.0` when all do.
///
/// # Errors
///
/// Returns `DeriveError::EmptyGroup` for an empty group; the percentage is
/// undefined there.
pub fn availability(group: &[Sample], threshold: f64) -> Result<f64, DeriveError> {
    if group.is_empty() {
        return Err(DeriveError::EmptyGroup);
    }
    let breaches = group
        .iter()
        .filter(|sample| sample.value > threshold)
        .count();
    Ok(100.0 - breaches as f64 / group.len() as f64 * 100.0)
}

/// Derives one availability series per threshold from the sampled window.
///
/// With a divisor of 1 each threshold gets a single point covering the whole
/// window. For an hour of minute samples, a divisor of 6 reports availability
/// per ten minutes, and a divisor of 60 reports boolean up/down per sample.
/// Each point carries the timestamp of the last sample in its group.
///
/// # Errors
///
/// Returns `DeriveError::NoSamples` for an empty window.
pub fn derive_availability(
    samples: &[Sample],
    thresholds: &[f64],
    divisor: usize,
) -> Result<Vec<ThresholdSeries>, DeriveError> {
    let groups = partition(samples, divisor)?;
    let mut derived = Vec::with_capacity(thresholds.len());
    for &threshold in thresholds {
        let mut points = Vec::with_capacity(groups.len());
        for group in &groups {
            let last = group.last().ok_or(DeriveError::EmptyGroup)?;
            points.push(AvailabilityPoint {
                timestamp: last.timestamp,
                value: availability(group, threshold)?,
            });
        }
        derived.push(ThresholdSeries { threshold, points });
    }
    Ok(derived)
}
