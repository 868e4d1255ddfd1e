use triptide_client::TripTideClient;
use triptide_store::{reserve_message, FavoritesStore, KeyValueStore, StoreError, FAVORITE_ADDED};

use crate::render::stays::similar_box;
use crate::view::{PageView, Widget};

pub const SIMILAR_BOX: &str = "similar_box";

/// Booking page for one stay at `destination`.
pub struct BookingPage {
    destination: String,
    stay: String,
}

impl BookingPage {
    #[must_use]
    pub fn new(destination: &str, stay: &str) -> Self {
        Self {
            destination: destination.to_string(),
            stay: stay.to_string(),
        }
    }

    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Fills the similar-stays box.
    pub async fn load(&self, client: &TripTideClient) -> PageView {
        let result = client.similar_stays(&self.destination).await;
        let mut view = PageView::new();
        view.set_widget(
            SIMILAR_BOX,
            Widget::from_result(SIMILAR_BOX, "similar stays", result, |stays| {
                similar_box(&self.destination, &stays)
            }),
        );
        view
    }

    /// Confirmation shown for the reserve button.
    #[must_use]
    pub fn reserve(&self) -> String {
        reserve_message(&self.stay)
    }

    /// Saves this stay to the favorites list and returns the acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the list cannot be persisted.
    pub fn add_favorite<S: KeyValueStore>(
        &self,
        favorites: &FavoritesStore<S>,
    ) -> Result<&'static str, StoreError> {
        let all = favorites.add(&self.destination, &self.stay)?;
        tracing::info!(
            destination = %self.destination,
            stay = %self.stay,
            total = all.len(),
            "favorite added"
        );
        Ok(FAVORITE_ADDED)
    }
}
