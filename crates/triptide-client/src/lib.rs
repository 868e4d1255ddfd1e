//! Typed HTTP client for the TripTide backend.

pub mod client;
pub mod error;
mod retry;
pub mod types;

pub use client::TripTideClient;
pub use error::ClientError;
pub use types::{
    AdminMetrics, Distance, ItineraryRequest, Measure, PackingRequest, SafetyScore, Weather,
};
