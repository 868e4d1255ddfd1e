use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::storage::KeyValueStore;

pub const FAVORITES_KEY: &str = "favorites";

/// Acknowledgement shown after a stay is saved.
pub const FAVORITE_ADDED: &str = "❤️ Added to your favorites!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub destination: String,
    pub stay: String,
}

/// Append-only list of saved stays under [`FAVORITES_KEY`].
pub struct FavoritesStore<S> {
    storage: S,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the saved favorites. A missing or unparseable value reads as
    /// an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the storage read fails.
    pub fn list(&self) -> Result<Vec<Favorite>, StoreError> {
        let Some(raw) = self.storage.get(FAVORITES_KEY)? else {
            return Ok(Vec::new());
        };
        Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "stored favorites are corrupt, treating as empty");
            Vec::new()
        }))
    }

    /// Appends a favorite. Duplicates are kept.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the storage read or write fails.
    pub fn add(&self, destination: &str, stay: &str) -> Result<Vec<Favorite>, StoreError> {
        let mut favorites = self.list()?;
        favorites.push(Favorite {
            destination: destination.to_string(),
            stay: stay.to_string(),
        });
        let body = serde_json::to_string(&favorites).map_err(|e| StoreError::Serialize {
            key: FAVORITES_KEY.to_string(),
            source: e,
        })?;
        self.storage.set(FAVORITES_KEY, body)?;
        Ok(favorites)
    }
}

/// Confirmation text for the booking page's reserve button.
#[must_use]
pub fn reserve_message(stay: &str) -> String {
    format!("🎉 Your stay at {stay} has been reserved!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn add_appends_in_order_and_keeps_duplicates() {
        let store = FavoritesStore::new(MemoryStore::new());
        store.add("goa", "Sea Breeze").unwrap();
        store.add("agra", "Taj View").unwrap();
        let all = store.add("goa", "Sea Breeze").unwrap();

        assert_eq!(all.len(), 3);
        assert_eq!(store.list().unwrap(), all);
        assert_eq!(
            all[1],
            Favorite {
                destination: "agra".to_string(),
                stay: "Taj View".to_string()
            }
        );
    }

    #[test]
    fn corrupt_favorites_start_over() {
        let storage = MemoryStore::new();
        storage.set(FAVORITES_KEY, "[{broken".to_string()).unwrap();
        let store = FavoritesStore::new(storage);

        assert!(store.list().unwrap().is_empty());
        assert_eq!(store.add("goa", "Sea Breeze").unwrap().len(), 1);
    }

    #[test]
    fn stored_shape_matches_browser_format() {
        let storage = std::sync::Arc::new(MemoryStore::new());
        FavoritesStore::new(std::sync::Arc::clone(&storage))
            .add("goa", "Sea Breeze")
            .unwrap();
        assert_eq!(
            storage.get(FAVORITES_KEY).unwrap().as_deref(),
            Some(r#"[{"destination":"goa","stay":"Sea Breeze"}]"#)
        );
    }

    #[test]
    fn reserve_message_names_the_stay() {
        assert_eq!(
            reserve_message("Fort Villa"),
            "🎉 Your stay at Fort Villa has been reserved!"
        );
    }
}
