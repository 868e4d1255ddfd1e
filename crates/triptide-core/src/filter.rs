//! Client-side listing filters and sorts.
//!
//! Criteria are parsed from the raw values of the page's filter controls.
//! Every predicate is independent and AND-combined; the sort (if any) runs
//! last and is stable, so ties keep their filtered order.

use std::str::FromStr;

use crate::listing::Listing;
use crate::CoreError;

/// Price band selected in the price control.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PriceRange {
    #[default]
    All,
    /// Inclusive on both ends; `max: None` means open-ended.
    Between { min: f64, max: Option<f64> },
}

impl PriceRange {
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        match *self {
            PriceRange::All => true,
            PriceRange::Between { min, max } => price >= min && max.is_none_or(|m| price <= m),
        }
    }
}

impl FromStr for PriceRange {
    type Err = CoreError;

    /// Accepts `"all"`, `"<min>"`, `"<min>-"`, and `"<min>-<max>"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(PriceRange::All);
        }

        let invalid = || CoreError::InvalidPriceRange(s.to_string());
        let parse_bound = |raw: &str| -> Result<f64, CoreError> {
            raw.trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(invalid)
        };

        let (min_raw, max_raw) = match s.split_once('-') {
            Some((min, max)) => (min, Some(max)),
            None => (s, None),
        };

        let min = parse_bound(min_raw)?;
        let max = match max_raw.map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_bound(raw)?),
        };

        Ok(PriceRange::Between { min, max })
    }
}

/// Minimum star rating selected in the rating control.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RatingFilter {
    #[default]
    All,
    AtLeast(f64),
}

impl FromStr for RatingFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(RatingFilter::All);
        }
        s.parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(RatingFilter::AtLeast)
            .ok_or_else(|| CoreError::InvalidRating(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    None,
    PriceAsc,
    PriceDesc,
    RatingDesc,
}

impl FromStr for SortKey {
    type Err = CoreError;

    /// Accepts the canonical keys plus the explore page's control values
    /// (`price_low_high`, `price_high_low`, `rating_high_low`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" => Ok(SortKey::None),
            "price_asc" | "price_low_high" => Ok(SortKey::PriceAsc),
            "price_desc" | "price_high_low" => Ok(SortKey::PriceDesc),
            "rating_desc" | "rating_high_low" => Ok(SortKey::RatingDesc),
            other => Err(CoreError::InvalidSortKey(other.to_string())),
        }
    }
}

/// The full set of filter and sort controls on a listing page.
///
/// `Default` is the "show everything, unsorted" state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub price: PriceRange,
    pub min_rating: RatingFilter,
    /// `None` means `"all"`.
    pub stay_type: Option<String>,
    /// `None` means `"all"`.
    pub amenity: Option<String>,
    pub sort: SortKey,
}

impl FilterCriteria {
    /// Builds criteria from the raw control values.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError`] if the price range, rating, or sort key cannot be
    /// parsed.
    pub fn from_controls(
        price: &str,
        rating: &str,
        stay_type: &str,
        amenity: &str,
        sort: &str,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            price: price.parse()?,
            min_rating: rating.parse()?,
            stay_type: choice(stay_type),
            amenity: choice(amenity),
            sort: sort.parse()?,
        })
    }

    fn matches(&self, listing: &Listing) -> bool {
        if !self.price.contains(listing.numeric_price) {
            return false;
        }
        if let RatingFilter::AtLeast(min) = self.min_rating {
            if listing.rating < min {
                return false;
            }
        }
        if let Some(t) = &self.stay_type {
            if listing.stay_type != *t {
                return false;
            }
        }
        if let Some(a) = &self.amenity {
            if !listing.has_amenity(a) {
                return false;
            }
        }
        true
    }
}

/// `"all"` (or blank) disables a string filter.
fn choice(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Returns the listings matching `criteria`, sorted if a sort key is set.
///
/// The input is never mutated. An empty result is a valid outcome.
#[must_use]
pub fn apply_filters(listings: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
    let mut filtered: Vec<Listing> = listings
        .iter()
        .filter(|l| criteria.matches(l))
        .cloned()
        .collect();

    match criteria.sort {
        SortKey::None => {}
        SortKey::PriceAsc => filtered.sort_by(|a, b| a.numeric_price.total_cmp(&b.numeric_price)),
        SortKey::PriceDesc => filtered.sort_by(|a, b| b.numeric_price.total_cmp(&a.numeric_price)),
        SortKey::RatingDesc => filtered.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }

    filtered
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
