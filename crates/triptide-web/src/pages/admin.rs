use triptide_client::TripTideClient;

use crate::render::admin::{AdminDashboard, ChartSeries, CARD_IDS};
use crate::view::{error_fragment, settle, PageView};

pub const AI_CHART: &str = "aiChart";
pub const CLICK_CHART: &str = "clickChart";

/// Admin dashboard. Cards and charts are filled from one metrics fetch.
pub struct AdminPage;

impl AdminPage {
    /// Returns the dashboard, or `None` if the metrics fetch failed.
    pub async fn fetch(client: &TripTideClient) -> Option<AdminDashboard> {
        let metrics = settle("admin_metrics", client.admin_metrics().await)?;
        Some(AdminDashboard::from_metrics(&metrics))
    }

    /// Card texts, plus each chart's series as JSON under the chart id.
    pub async fn load(client: &TripTideClient) -> PageView {
        let mut view = PageView::new();
        let Some(dash) = Self::fetch(client).await else {
            for id in CARD_IDS {
                view.set(id, error_fragment("metrics"));
            }
            return view;
        };

        for (id, text) in &dash.cards {
            view.set(id, text.as_str());
        }
        view.set(AI_CHART, chart_json(&dash.ai_usage));
        view.set(CLICK_CHART, chart_json(&dash.click_events));
        view
    }
}

fn chart_json(series: &ChartSeries) -> String {
    // A series of strings and integers always serializes.
    serde_json::to_string(series).unwrap_or_default()
}
