use crate::model::WeatherRecord;
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod weatherapi;

/// The single failure kind a provider may report.
///
/// Transport errors, non-success HTTP statuses and malformed response
/// bodies all collapse into this; the caller never sees the raw cause.
/// The cause is logged at debug level before being swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("city not found")]
pub struct NotFoundError;

/// Source of current weather conditions for a free-form location string.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Look up current conditions for `location`. The location is sent
    /// verbatim; implementations are responsible for URL encoding.
    async fn current(&self, location: &str) -> Result<WeatherRecord, NotFoundError>;
}
