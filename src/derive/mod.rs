//! Availability derivation core: partitioner, availability reducer, and
//! series formatter. Everything here is a pure transformation over an
//! in-memory window of samples; fetching and publishing live in `backend`.
mod availability;
mod partition;
mod series;
mod types;


pub use availability::{availability, derive_availability};
pub use partition::partition;
pub use series::format_series;
pub use types::{AvailabilityPoint, Sample, ThresholdSeries};
