//! Durable local storage for TripTide: the anonymous usage profile and the
//! favorites list, both kept as JSON values under fixed keys.

pub mod error;
pub mod favorites;
pub mod profile;
pub mod storage;

pub use error::StoreError;
pub use favorites::{reserve_message, Favorite, FavoritesStore, FAVORITES_KEY, FAVORITE_ADDED};
pub use profile::{Profile, ProfileStore, UxStats, PROFILE_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
