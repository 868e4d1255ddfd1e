use triptide_client::TripTideClient;

use crate::render::destination::destination_grid;
use crate::view::{PageView, Widget};

pub const INDIA_GRID: &str = "india_grid";
pub const INTL_GRID: &str = "intl_grid";

/// Landing page with the India and international destination grids.
pub struct HomePage;

impl HomePage {
    /// Both grids come from the one destinations asset, so they fail together.
    pub async fn load(client: &TripTideClient) -> PageView {
        let destinations = client.destinations().await;

        let mut view = PageView::new();
        view.set_widget(
            INDIA_GRID,
            Widget::from_result(INDIA_GRID, "destinations", destinations.as_ref(), |f| {
                destination_grid(&f.india)
            }),
        );
        view.set_widget(
            INTL_GRID,
            Widget::from_result(INTL_GRID, "destinations", destinations.as_ref(), |f| {
                destination_grid(&f.international)
            }),
        );
        view
    }
}
