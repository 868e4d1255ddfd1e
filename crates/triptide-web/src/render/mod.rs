//! HTML fragments for each page's containers.

pub mod admin;
pub mod destination;
pub mod stays;

pub use admin::{AdminDashboard, ChartSeries};
