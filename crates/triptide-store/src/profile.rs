//! Anonymous per-install usage profile.
//!
//! Every operation loads the whole profile, mutates it, and saves it back.
//! Nothing guards against a second process doing the same against shared
//! storage: interleaved updates lose writes, last writer wins.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rand::TryRngCore;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::StoreError;
use crate::storage::KeyValueStore;

pub const PROFILE_KEY: &str = "triptide_profile";

/// Counters every fresh profile starts with.
const DEFAULT_METRICS: [&str; 3] = ["explore_page_views", "view_stay_clicks", "searches"];

/// Only `user_id` is required when reading a stored profile. Timestamps,
/// counters and the UX block that fail to parse are reset individually so the
/// identifier survives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    #[serde(default = "Utc::now", deserialize_with = "lenient_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now", deserialize_with = "lenient_timestamp")]
    pub last_seen_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "lenient_counters")]
    pub metrics: BTreeMap<String, u64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_ux"
    )]
    pub ux: Option<UxStats>,
}

fn lenient_timestamp<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(value
        .as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map_or_else(Utc::now, |t| t.with_timezone(&Utc)))
}

/// Keeps counters stored as non-negative whole numbers (`2` or `2.0`).
fn lenient_counters<'de, D: Deserializer<'de>>(d: D) -> Result<BTreeMap<String, u64>, D::Error> {
    let value = Value::deserialize(d)?;
    let Value::Object(entries) = value else {
        return Ok(BTreeMap::new());
    };
    Ok(entries
        .into_iter()
        .filter_map(|(name, v)| counter_value(&v).map(|n| (name, n)))
        .collect())
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]
fn counter_value(v: &Value) -> Option<u64> {
    if let Some(n) = v.as_u64() {
        return Some(n);
    }
    let f = v.as_f64()?;
    (f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64).then(|| f as u64)
}

fn lenient_ux<'de, D: Deserializer<'de>>(d: D) -> Result<Option<UxStats>, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(serde_json::from_value(value).ok())
}

impl Profile {
    fn fresh() -> Self {
        let now = Utc::now();
        Self {
            user_id: generate_user_id(),
            created_at: now,
            last_seen_at: now,
            metrics: DEFAULT_METRICS
                .iter()
                .map(|name| ((*name).to_string(), 0))
                .collect(),
            ux: None,
        }
    }

    /// Current value of a counter; unknown counters read as zero.
    #[must_use]
    pub fn metric(&self, name: &str) -> u64 {
        self.metrics.get(name).copied().unwrap_or(0)
    }
}

/// Running UX survey statistics.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UxStats {
    pub last_score: f64,
    pub num_submissions: u64,
    pub avg_score: f64,
}

impl UxStats {
    /// Folds one more score into the running mean.
    #[allow(clippy::cast_precision_loss)]
    fn record(&mut self, score: f64) {
        self.last_score = score;
        self.num_submissions += 1;
        let n = self.num_submissions as f64;
        self.avg_score = (self.avg_score * (n - 1.0) + score) / n;
    }
}

/// Reads and updates the [`Profile`] stored under [`PROFILE_KEY`].
pub struct ProfileStore<S> {
    storage: S,
}

impl<S: KeyValueStore> ProfileStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the stored profile, creating and persisting a fresh one if the
    /// key is absent or its value does not parse.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] only if the storage medium itself fails.
    pub fn load(&self) -> Result<Profile, StoreError> {
        if let Some(raw) = self.storage.get(PROFILE_KEY)? {
            match serde_json::from_str::<Profile>(&raw) {
                Ok(profile) => return Ok(profile),
                Err(e) => {
                    tracing::warn!(error = %e, "stored profile is corrupt, starting a fresh one");
                }
            }
        }

        let profile = Profile::fresh();
        tracing::info!(user_id = %profile.user_id, "created anonymous profile");
        self.write(&profile)?;
        Ok(profile)
    }

    /// Stamps `last_seen_at` with the current time and persists the profile.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the storage write fails.
    pub fn save(&self, profile: &mut Profile) -> Result<(), StoreError> {
        profile.last_seen_at = Utc::now();
        self.write(profile)
    }

    /// Adds one to the named counter, creating it at zero first if needed.
    /// Returns the new count.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the storage read or write fails.
    pub fn increment_metric(&self, name: &str) -> Result<u64, StoreError> {
        let mut profile = self.load()?;
        let counter = profile.metrics.entry(name.to_string()).or_insert(0);
        *counter += 1;
        let count = *counter;
        self.save(&mut profile)?;
        tracing::debug!(metric = name, count, "incremented profile metric");
        Ok(count)
    }

    /// Records a UX survey score and returns the updated statistics.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the storage read or write fails.
    pub fn set_ux_score(&self, score: f64) -> Result<UxStats, StoreError> {
        let mut profile = self.load()?;
        let ux = profile.ux.get_or_insert_with(UxStats::default);
        ux.record(score);
        let stats = *ux;
        self.save(&mut profile)?;
        Ok(stats)
    }

    fn write(&self, profile: &Profile) -> Result<(), StoreError> {
        let body = serde_json::to_string(profile).map_err(|e| StoreError::Serialize {
            key: PROFILE_KEY.to_string(),
            source: e,
        })?;
        self.storage.set(PROFILE_KEY, body)
    }
}

/// Random v4 UUID from the OS entropy source, or a timestamp-based id when
/// that source is unavailable. Ids only correlate analytics events.
fn generate_user_id() -> String {
    let mut bytes = [0u8; 16];
    match rand::rngs::OsRng.try_fill_bytes(&mut bytes) {
        Ok(()) => uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "OS entropy unavailable, using fallback user id");
            fallback_user_id()
        }
    }
}

fn fallback_user_id() -> String {
    format!(
        "uid_{}_{:x}",
        Utc::now().timestamp_millis(),
        rand::random::<u64>()
    )
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
