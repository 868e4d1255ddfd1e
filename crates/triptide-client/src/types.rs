//! Request and response shapes of the TripTide backend.
//!
//! Several backend fields are produced by an AI prompt or a lookup that can
//! fail softly, so they arrive as a number on success and as a string such as
//! `"unknown"` otherwise. [`Measure`] captures that pattern.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A value the backend sends as either a number or free text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Measure {
    Number(f64),
    Text(String),
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Number(n) => write!(f, "{n}"),
            Measure::Text(s) => f.write_str(s),
        }
    }
}

// ---------------------------------------------------------------------------
// /api/weather
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct WeatherResponse {
    pub weather: Weather,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Weather {
    /// Degrees Celsius.
    pub temp: Measure,
    pub condition: String,
    /// km/h.
    pub wind: Measure,
}

// ---------------------------------------------------------------------------
// /api/safety/region
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(crate) struct SafetyRequest<'a> {
    pub location: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SafetyScore {
    pub score: Measure,
}

// ---------------------------------------------------------------------------
// /api/culture, /api/local_experiences, /api/similar
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(crate) struct DestinationRequest<'a> {
    pub destination: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CultureResponse {
    pub story: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ExperiencesRequest<'a> {
    pub destination: &'a str,
    pub traveler_type: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExperiencesResponse {
    pub experiences: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SimilarResponse {
    #[serde(default)]
    pub stays: Vec<triptide_core::Listing>,
}

// ---------------------------------------------------------------------------
// /api/packing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackingRequest {
    pub destination: String,
    pub climate: String,
    /// Trip length in days.
    pub duration: u32,
    pub activities: Vec<String>,
    pub traveler_type: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PackingResponse {
    pub packing_list: String,
}

// ---------------------------------------------------------------------------
// /api/distance
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(crate) struct DistanceRequest<'a> {
    pub place: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Distance {
    /// Kilometres from the user, or `"unknown"` if the backend could not
    /// geocode the place.
    pub distance_km: Measure,
}

// ---------------------------------------------------------------------------
// /api/itinerary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItineraryRequest {
    pub destination: String,
    /// Sent as typed by the user; the backend interpolates it into a prompt.
    pub days: String,
    pub traveler_type: String,
    pub interests: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItineraryResponse {
    #[serde(default)]
    pub itinerary: Option<String>,
}

// ---------------------------------------------------------------------------
// /api/sus, /api/nps
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(crate) struct SusSubmission<'a> {
    pub score: f64,
    pub answers: &'a [u8],
}

#[derive(Debug, Serialize)]
pub(crate) struct NpsSubmission {
    pub score: u8,
}

// ---------------------------------------------------------------------------
// /api/admin/metrics
// ---------------------------------------------------------------------------

/// Aggregated UX metrics for the admin dashboard. Every field is optional on
/// the wire.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AdminMetrics {
    #[serde(default)]
    pub sus: Option<f64>,
    #[serde(default)]
    pub nps: Option<f64>,
    /// Task success rate, percent.
    #[serde(default)]
    pub tsr: Option<f64>,
    /// User error rate, percent.
    #[serde(default)]
    pub uer: Option<f64>,
    #[serde(default)]
    pub engagement: Option<f64>,
    /// Percent.
    #[serde(default)]
    pub retention: Option<f64>,
    #[serde(default)]
    pub ai_usage: BTreeMap<String, u64>,
    #[serde(default)]
    pub click_events: BTreeMap<String, u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_accepts_number_or_text() {
        let d: Distance = serde_json::from_str(r#"{"distance_km": 1523.4}"#).unwrap();
        assert_eq!(d.distance_km, Measure::Number(1523.4));
        assert_eq!(d.distance_km.to_string(), "1523.4");

        let d: Distance = serde_json::from_str(r#"{"distance_km": "unknown"}"#).unwrap();
        assert_eq!(d.distance_km.to_string(), "unknown");
    }

    #[test]
    fn admin_metrics_tolerates_missing_and_null_fields() {
        let m: AdminMetrics =
            serde_json::from_str(r#"{"sus": 83.3, "nps": null, "page_visits": {"home": 3}}"#)
                .unwrap();
        assert_eq!(m.sus, Some(83.3));
        assert_eq!(m.nps, None);
        assert!(m.ai_usage.is_empty());
    }

    #[test]
    fn itinerary_response_without_field_is_none() {
        let r: ItineraryResponse = serde_json::from_str("{}").unwrap();
        assert!(r.itinerary.is_none());
    }
}
