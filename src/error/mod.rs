mod app;
mod backend;
mod config;
mod derive;
mod validation;

pub use app::{AppError, AppResult};
pub use backend::BackendError;
pub use config::ConfigError;
pub use derive::DeriveError;
pub use validation::ValidationError;
