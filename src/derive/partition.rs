use tracing::warn;

use super::types::Sample;
use crate::error::DeriveError;

/// Splits `samples` into contiguous chunks, honoring a requested divisor.
///
/// The divisor is clamped to the sample count; available samples may
/// legitimately be fewer than the requested granularity when the source has
/// data gaps. Chunk size is the integer quotient `len / divisor` and chunks
/// are cut at multiples of that size until the input is consumed, so an
/// uneven split leaves a shorter trailing chunk (and can yield slightly more
/// than `divisor` chunks).
///
/// Every sample lands in exactly one chunk, in input order.
///
/// # Errors
///
/// Returns `DeriveError::NoSamples` when `samples` is empty.
pub fn partition(samples: &[Sample], divisor: usize) -> Result<Vec<&[Sample]>, DeriveError> {
    let total = samples.len();
    if total == 0 {
        return Err(DeriveError::NoSamples);
    }

    let mut effective = divisor;
    if effective > total {
        warn!(
            "Configured granularity divisor ({}) greater than metric samples available ({}) - aligning",
            divisor, total
        );
        effective = total;
    }

    let size = total.checked_div(effective).unwrap_or(total).max(1);
    let count = total.div_ceil(size);

    let mut groups = Vec::with_capacity(count);
    for index in 0..count {
        let start = index.saturating_mul(size);
        let end = start.saturating_add(size).min(total);
        if let Some(group) = samples.get(start..end) {
            groups.push(group);
        }
    }
    Ok(groups)
}
