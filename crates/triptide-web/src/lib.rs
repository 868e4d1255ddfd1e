//! Page controllers and HTML rendering for the TripTide site.
//!
//! Each page issues its backend fetches, renders one HTML fragment per
//! container, and returns them as a [`PageView`]. A failed fetch degrades
//! only its own container to an error fragment.

pub mod pages;
pub mod render;
pub mod slideshow;
pub mod survey;
pub mod view;

pub use pages::{
    AdminPage, BookingPage, DestinationPage, ExplorePage, HomePage, PlannerPage, PlannerStatus,
};
pub use render::{AdminDashboard, ChartSeries};
pub use slideshow::{Slideshow, AUTO_ADVANCE, ONBOARD_DOTS};
pub use survey::{SubmissionReport, SurveyForm, SurveyState, THANK_YOU};
pub use view::{encode_component, error_fragment, html_escape, PageView, Widget};
