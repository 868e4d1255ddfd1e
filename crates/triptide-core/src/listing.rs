//! Stay listings and destination cards as served by the backend and the
//! static data assets.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A bookable stay.
///
/// `numeric_price` is derived from the display `price` once at load time and
/// is what every price filter and sort compares against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawListing")]
pub struct Listing {
    pub name: String,
    pub destination: String,
    pub image: Option<String>,
    pub rating: f64,
    /// Price exactly as shown to the user, e.g. `"₹4,500"`.
    pub price: String,
    pub numeric_price: f64,
    #[serde(rename = "type")]
    pub stay_type: String,
    pub amenities: Vec<String>,
    pub tagline: Option<String>,
}

impl Listing {
    /// Returns `true` if the listing offers `amenity` (exact match).
    #[must_use]
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }

    /// Returns a copy whose destination is `destination` if the record did
    /// not carry one.
    #[must_use]
    pub fn with_default_destination(mut self, destination: &str) -> Self {
        if self.destination.is_empty() {
            self.destination = destination.to_string();
        }
        self
    }
}

/// Wire shape of a listing. Price and rating arrive as either strings or
/// numbers depending on who authored the data file.
#[derive(Deserialize)]
struct RawListing {
    name: String,
    #[serde(default)]
    destination: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    rating: Option<NumberOrText>,
    #[serde(default)]
    price: Option<NumberOrText>,
    #[serde(default, rename = "type")]
    stay_type: Option<String>,
    #[serde(default)]
    amenities: Vec<String>,
    #[serde(default)]
    tagline: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    fn as_display(&self) -> String {
        match self {
            NumberOrText::Number(n) => n.to_string(),
            NumberOrText::Text(s) => s.clone(),
        }
    }

    fn as_number(&self) -> f64 {
        match self {
            NumberOrText::Number(n) => *n,
            NumberOrText::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .unwrap_or(0.0),
        }
    }
}

impl From<RawListing> for Listing {
    fn from(raw: RawListing) -> Self {
        let price = raw
            .price
            .as_ref()
            .map(NumberOrText::as_display)
            .unwrap_or_default();
        let numeric_price = parse_numeric_price(&price);
        Listing {
            name: raw.name,
            destination: raw.destination.unwrap_or_default(),
            image: raw.image,
            rating: raw.rating.as_ref().map_or(0.0, NumberOrText::as_number),
            price,
            numeric_price,
            stay_type: raw.stay_type.unwrap_or_default(),
            amenities: raw.amenities,
            tagline: raw.tagline,
        }
    }
}

/// Parses a display price into a number.
///
/// Rupee and dollar signs, thousands separators, and spaces are stripped
/// before parsing. Anything that still fails to parse (e.g. `"free"`) is `0`.
#[must_use]
pub fn parse_numeric_price(price: &str) -> f64 {
    let cleaned: String = price
        .chars()
        .filter(|c| !matches!(c, '₹' | '$' | ',' | ' '))
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return 0.0;
    }
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// Contents of `/static/data/stays.json`: destination → listings, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaysFile(pub Vec<(String, Vec<Listing>)>);

impl<'de> Deserialize<'de> for StaysFile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StaysVisitor;

        impl<'de> Visitor<'de> for StaysVisitor {
            type Value = StaysFile;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of destination name to a list of stays")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((destination, stays)) = map.next_entry::<String, Vec<Listing>>()? {
                    entries.push((destination, stays));
                }
                Ok(StaysFile(entries))
            }
        }

        deserializer.deserialize_map(StaysVisitor)
    }
}

/// Flattens the per-destination map into one list, stamping each record with
/// the destination it was filed under.
#[must_use]
pub fn flatten_stays(file: StaysFile) -> Vec<Listing> {
    file.0
        .into_iter()
        .flat_map(|(destination, stays)| {
            stays.into_iter().map(move |mut s| {
                s.destination.clone_from(&destination);
                s
            })
        })
        .collect()
}

/// A destination tile on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationCard {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
}

/// Contents of `/static/data/destinations.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationsFile {
    #[serde(default)]
    pub india: Vec<DestinationCard>,
    #[serde(default)]
    pub international: Vec<DestinationCard>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_price_strips_rupee_and_commas() {
        assert!((parse_numeric_price("₹1,200") - 1200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn numeric_price_strips_dollar() {
        assert!((parse_numeric_price("$50") - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn numeric_price_non_numeric_is_zero() {
        assert!(parse_numeric_price("free").abs() < f64::EPSILON);
        assert!(parse_numeric_price("").abs() < f64::EPSILON);
    }

    #[test]
    fn numeric_price_keeps_decimals_and_spaces() {
        assert!((parse_numeric_price("$ 1 299.50") - 1299.5).abs() < f64::EPSILON);
    }

    #[test]
    fn listing_accepts_numeric_price_and_string_rating() {
        let listing: Listing = serde_json::from_value(serde_json::json!({
            "name": "Palm Cove",
            "price": 3500,
            "rating": "4.6",
            "type": "Resort",
            "amenities": ["Pool", "WiFi"]
        }))
        .unwrap();
        assert_eq!(listing.price, "3500");
        assert!((listing.numeric_price - 3500.0).abs() < f64::EPSILON);
        assert!((listing.rating - 4.6).abs() < f64::EPSILON);
        assert_eq!(listing.stay_type, "Resort");
        assert!(listing.has_amenity("Pool"));
        assert!(!listing.has_amenity("pool"));
        assert!(listing.destination.is_empty());
        assert!(listing.tagline.is_none());
    }

    #[test]
    fn stays_file_keeps_file_order_and_stamps_destination() {
        let raw = r#"{
            "goa": [{"name": "Sea Breeze", "price": "₹2,000", "rating": 4.1}],
            "agra": [
                {"name": "Taj View", "price": "₹5,500", "rating": 4.8},
                {"name": "Fort Inn", "price": "₹1,100", "rating": 3.9}
            ]
        }"#;
        let file: StaysFile = serde_json::from_str(raw).unwrap();
        let all = flatten_stays(file);
        let names: Vec<&str> = all.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Sea Breeze", "Taj View", "Fort Inn"]);
        assert_eq!(all[0].destination, "goa");
        assert_eq!(all[2].destination, "agra");
        assert!((all[1].numeric_price - 5500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn with_default_destination_only_fills_blank() {
        let listing: Listing =
            serde_json::from_value(serde_json::json!({"name": "A", "destination": "goa"})).unwrap();
        assert_eq!(listing.with_default_destination("agra").destination, "goa");

        let blank: Listing = serde_json::from_value(serde_json::json!({"name": "B"})).unwrap();
        assert_eq!(blank.with_default_destination("agra").destination, "agra");
    }

    #[test]
    fn destinations_file_defaults_missing_regions() {
        let file: DestinationsFile = serde_json::from_str(
            r#"{"india": [{"id": "goa", "name": "Goa", "image": "static/images/goa.jpg"}]}"#,
        )
        .unwrap();
        assert_eq!(file.india.len(), 1);
        assert!(file.international.is_empty());
    }
}
