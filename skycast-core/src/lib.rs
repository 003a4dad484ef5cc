//! Core library for the `skycast` weather widget.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The weather provider abstraction and the WeatherAPI.com client
//! - The widget state machine (input, loading flag, result, error)
//! - Pure formatters for the temperature/condition/location lines
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries
//! or services.

pub mod config;
pub mod format;
pub mod model;
pub mod provider;
pub mod widget;

pub use config::Config;
pub use model::{Unit, WeatherRecord};
pub use provider::{NotFoundError, WeatherProvider, weatherapi::WeatherApiProvider};
pub use widget::{SearchTicket, WeatherWidget, WidgetError};
