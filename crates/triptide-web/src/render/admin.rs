//! Admin dashboard: metric cards and chart series.

use std::collections::BTreeMap;

use serde::Serialize;
use triptide_client::AdminMetrics;

/// Shown when the backend has no AI usage recorded yet.
pub const SAMPLE_AI_USAGE: [(&str, u64); 2] = [("local", 12), ("online", 7)];

/// Shown when the backend has no click events recorded yet.
pub const SAMPLE_CLICK_EVENTS: [(&str, u64); 4] = [
    ("Search Button", 14),
    ("Plan Trip", 9),
    ("Explore Destination", 6),
    ("AI Chat", 11),
];

/// Element ids of the metric cards, in display order.
pub const CARD_IDS: [&str; 6] = [
    "susValue",
    "npsValue",
    "tsrValue",
    "uerValue",
    "engageValue",
    "retentionValue",
];

/// Labels and values of one chart, index-aligned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

impl ChartSeries {
    fn from_counts(counts: &BTreeMap<String, u64>, sample: &[(&str, u64)]) -> Self {
        if counts.is_empty() {
            return Self {
                labels: sample.iter().map(|(l, _)| (*l).to_string()).collect(),
                values: sample.iter().map(|(_, v)| *v).collect(),
            };
        }
        Self {
            labels: counts.keys().cloned().collect(),
            values: counts.values().copied().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminDashboard {
    /// `(card id, text)` pairs in [`CARD_IDS`] order.
    pub cards: Vec<(&'static str, String)>,
    pub ai_usage: ChartSeries,
    pub click_events: ChartSeries,
}

impl AdminDashboard {
    #[must_use]
    pub fn from_metrics(m: &AdminMetrics) -> Self {
        let values = [
            raw(m.sus),
            raw(m.nps),
            percent(m.tsr),
            percent(m.uer),
            raw(m.engagement),
            percent(m.retention),
        ];
        Self {
            cards: CARD_IDS.into_iter().zip(values).collect(),
            ai_usage: ChartSeries::from_counts(&m.ai_usage, &SAMPLE_AI_USAGE),
            click_events: ChartSeries::from_counts(&m.click_events, &SAMPLE_CLICK_EVENTS),
        }
    }

    #[must_use]
    pub fn card(&self, id: &str) -> Option<&str> {
        self.cards
            .iter()
            .find(|(k, _)| *k == id)
            .map(|(_, v)| v.as_str())
    }
}

fn raw(value: Option<f64>) -> String {
    value.unwrap_or(0.0).to_string()
}

fn percent(value: Option<f64>) -> String {
    format!("{}%", raw(value))
}
