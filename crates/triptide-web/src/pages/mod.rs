//! Page controllers. Each one issues its page's fetches, owns whatever state
//! later interactions need, and fills a [`PageView`](crate::PageView).

pub mod admin;
pub mod booking;
pub mod destination;
pub mod explore;
pub mod home;
pub mod planner;

use triptide_store::{KeyValueStore, ProfileStore};

pub use admin::AdminPage;
pub use booking::BookingPage;
pub use destination::DestinationPage;
pub use explore::ExplorePage;
pub use home::HomePage;
pub use planner::{PlannerPage, PlannerStatus};

pub const EXPLORE_PAGE_VIEWS: &str = "explore_page_views";
pub const VIEW_STAY_CLICKS: &str = "view_stay_clicks";

/// Bumps a profile counter. Storage failures never block the page.
pub(crate) fn track<S: KeyValueStore>(profile: &ProfileStore<S>, metric: &str) {
    match profile.increment_metric(metric) {
        Ok(count) => tracing::debug!(metric, count, "profile metric incremented"),
        Err(e) => tracing::warn!(metric, error = %e, "failed to record profile metric"),
    }
}
