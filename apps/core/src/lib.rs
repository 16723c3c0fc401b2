//! Pollstats core: stores pre/post poll responses and computes descriptive
//! analytics and pre/post differentials over them.

pub mod analytics;
pub mod catalogue;
pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod service;
pub mod source;
pub mod telemetry;

pub use analytics::{compute_analytics, AnalyticsReport};
pub use error::AppError;

#[cfg(test)]
mod tests;
