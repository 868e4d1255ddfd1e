use triptide_client::{PackingRequest, TripTideClient};
use triptide_core::{apply_filters, FilterCriteria, Listing};

use crate::render::destination::{distance, map_src, safety, weather};
use crate::render::stays::stays_grid;
use crate::view::{error_fragment, settle, PageView, Widget};

pub const WEATHER_BOX: &str = "weather_box";
pub const SAFETY_BOX: &str = "safety_box";
pub const CULTURE_BOX: &str = "culture_box";
pub const PACKING_BOX: &str = "packing_box";
pub const STAYS_GRID: &str = "stays_grid";
pub const EXPERIENCES_BOX: &str = "experiences_box";
pub const MAP_IFRAME: &str = "map_iframe";
pub const DISTANCE_TEXT: &str = "distance_text";

/// Packing and experiences are always requested for a solo traveller.
const TRAVELER_TYPE: &str = "Solo";

/// Packing list parameters used for every destination.
fn packing_request(place: &str) -> PackingRequest {
    PackingRequest {
        destination: place.to_string(),
        climate: "tropical".to_string(),
        duration: 4,
        activities: vec!["tourism".to_string()],
        traveler_type: TRAVELER_TYPE.to_string(),
    }
}

/// One destination: live widgets plus a filterable stays grid.
pub struct DestinationPage {
    place: String,
    stays: Option<Vec<Listing>>,
    widgets: PageView,
}

impl DestinationPage {
    /// Fetches every widget concurrently. Each one settles independently; a
    /// failure only affects its own container.
    pub async fn load(client: &TripTideClient, place: &str) -> Self {
        let packing = packing_request(place);
        let (weather_r, safety_r, culture_r, packing_r, stays_r, experiences_r, distance_r) =
            futures::join!(
                client.weather(),
                client.region_safety(place),
                client.culture(place),
                client.packing(&packing),
                client.stays(place),
                client.local_experiences(place, TRAVELER_TYPE),
                client.distance(place),
            );

        let mut widgets = PageView::new();
        widgets.set_widget(
            WEATHER_BOX,
            Widget::from_result(WEATHER_BOX, "weather", weather_r, |w| weather(&w)),
        );
        widgets.set_widget(
            SAFETY_BOX,
            Widget::from_result(SAFETY_BOX, "safety score", safety_r, |s| safety(&s)),
        );
        widgets.set_widget(
            CULTURE_BOX,
            Widget::from_result(CULTURE_BOX, "culture story", culture_r, |story| story),
        );
        widgets.set_widget(
            PACKING_BOX,
            Widget::from_result(PACKING_BOX, "packing list", packing_r, |list| list),
        );
        widgets.set_widget(
            EXPERIENCES_BOX,
            Widget::from_result(EXPERIENCES_BOX, "local experiences", experiences_r, |html| html),
        );
        widgets.set(MAP_IFRAME, map_src(place));
        widgets.set_widget(
            DISTANCE_TEXT,
            Widget::from_result(DISTANCE_TEXT, "distance", distance_r, |d| distance(&d)),
        );

        Self {
            place: place.to_string(),
            stays: settle(STAYS_GRID, stays_r),
            widgets,
        }
    }

    #[must_use]
    pub fn place(&self) -> &str {
        &self.place
    }

    /// Loaded stays, or `None` if the stays fetch failed.
    #[must_use]
    pub fn stays(&self) -> Option<&[Listing]> {
        self.stays.as_deref()
    }

    /// All containers, with the stays grid filtered by `criteria`.
    #[must_use]
    pub fn render(&self, criteria: &FilterCriteria) -> PageView {
        let mut view = self.widgets.clone();
        let grid = match &self.stays {
            Some(stays) => stays_grid(&apply_filters(stays, criteria)),
            None => error_fragment("stays"),
        };
        view.set(STAYS_GRID, grid);
        view
    }
}
