use triptide_client::TripTideClient;
use triptide_core::{apply_filters, FilterCriteria, Listing};
use triptide_store::{KeyValueStore, ProfileStore};

use super::{track, EXPLORE_PAGE_VIEWS, VIEW_STAY_CLICKS};
use crate::render::stays::explore_grid;
use crate::view::{error_fragment, settle, PageView};

pub const EXPLORE_GRID: &str = "explore_grid";

/// Every stay from the static asset, filtered client-side.
///
/// The loaded list is kept for the lifetime of the page so filter changes
/// never refetch.
pub struct ExplorePage {
    stays: Vec<Listing>,
    loaded: bool,
}

impl ExplorePage {
    /// Loads all stays and counts the page view.
    pub async fn load<S: KeyValueStore>(
        client: &TripTideClient,
        profile: &ProfileStore<S>,
    ) -> Self {
        track(profile, EXPLORE_PAGE_VIEWS);

        match settle(EXPLORE_GRID, client.all_stays().await) {
            Some(stays) => {
                tracing::info!(count = stays.len(), "explore stays loaded");
                Self {
                    stays,
                    loaded: true,
                }
            }
            None => Self {
                stays: Vec::new(),
                loaded: false,
            },
        }
    }

    /// A page over an already-loaded list.
    #[must_use]
    pub fn with_stays(stays: Vec<Listing>) -> Self {
        Self {
            stays,
            loaded: true,
        }
    }

    #[must_use]
    pub fn stays(&self) -> &[Listing] {
        &self.stays
    }

    #[must_use]
    pub fn filtered(&self, criteria: &FilterCriteria) -> Vec<Listing> {
        apply_filters(&self.stays, criteria)
    }

    #[must_use]
    pub fn render(&self, criteria: &FilterCriteria) -> PageView {
        let mut view = PageView::new();
        if self.loaded {
            view.set(EXPLORE_GRID, explore_grid(&self.filtered(criteria)));
        } else {
            view.set(EXPLORE_GRID, error_fragment("stays"));
        }
        view
    }

    /// Counts a click on a card's "View Stay" link.
    pub fn record_stay_click<S: KeyValueStore>(profile: &ProfileStore<S>) {
        track(profile, VIEW_STAY_CLICKS);
    }
}
