use triptide_client::{ItineraryRequest, TripTideClient};

use crate::view::{settle, PageView};

pub const ITINERARY_OUTPUT: &str = "itinerary_output";

pub const MISSING_INPUT: &str = "Please enter destination and days.";
pub const GENERATING: &str = "⏳ Generating itinerary...";
pub const UNAVAILABLE: &str = "❌ Unable to generate itinerary.";

/// Outcome of one planner submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannerStatus {
    /// Destination or days left blank; nothing was requested.
    Rejected(&'static str),
    /// The itinerary HTML, or [`UNAVAILABLE`] if none came back.
    Done(PageView),
}

/// Trip planner form.
#[derive(Debug, Clone, Default)]
pub struct PlannerPage {
    pub destination: String,
    pub days: String,
    pub traveler_type: String,
    pub interests: String,
}

impl PlannerPage {
    /// Content of the output box while the request is in flight.
    #[must_use]
    pub fn pending() -> PageView {
        let mut view = PageView::new();
        view.set(ITINERARY_OUTPUT, GENERATING);
        view
    }

    pub async fn generate(&self, client: &TripTideClient) -> PlannerStatus {
        if self.destination.trim().is_empty() || self.days.trim().is_empty() {
            return PlannerStatus::Rejected(MISSING_INPUT);
        }

        let request = ItineraryRequest {
            destination: self.destination.clone(),
            days: self.days.clone(),
            traveler_type: self.traveler_type.clone(),
            interests: self.interests.clone(),
        };
        let itinerary = settle(ITINERARY_OUTPUT, client.itinerary(&request).await).flatten();

        let mut view = PageView::new();
        view.set(
            ITINERARY_OUTPUT,
            itinerary.unwrap_or_else(|| UNAVAILABLE.to_string()),
        );
        PlannerStatus::Done(view)
    }
}
