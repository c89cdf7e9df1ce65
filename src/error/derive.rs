use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeriveError {
    #[error("No samples to partition.")]
    NoSamples,
    #[error("Cannot compute availability of an empty group.")]
    EmptyGroup,
}
