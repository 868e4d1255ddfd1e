//! Destination page widgets and the home page destination tiles.

use triptide_client::{Distance, SafetyScore, Weather};
use triptide_core::{destination_image, DestinationCard, DESTINATION_FALLBACK_IMAGE};

use crate::view::{encode_component, html_escape};

#[must_use]
pub fn weather(w: &Weather) -> String {
    format!(
        "<p><strong>Temperature:</strong> {}°C</p>\n\
         <p><strong>Condition:</strong> {}</p>\n\
         <p><strong>Wind:</strong> {} km/h</p>",
        html_escape(&w.temp.to_string()),
        html_escape(&w.condition),
        html_escape(&w.wind.to_string()),
    )
}

#[must_use]
pub fn safety(s: &SafetyScore) -> String {
    format!(
        "<p><strong>Safety Score:</strong> {}</p>",
        html_escape(&s.score.to_string())
    )
}

#[must_use]
pub fn distance(d: &Distance) -> String {
    format!(
        "Distance from you: <strong>{} km</strong>",
        html_escape(&d.distance_km.to_string())
    )
}

/// Embed URL for the `map_iframe` source.
#[must_use]
pub fn map_src(place: &str) -> String {
    format!(
        "https://www.google.com/maps?q={}&output=embed",
        encode_component(place)
    )
}

/// Tiles linking to `/destination/<id>`. Only the file name of each image is
/// kept; the browser falls back to the placeholder if it is missing.
#[must_use]
pub fn destination_grid(cards: &[DestinationCard]) -> String {
    cards
        .iter()
        .map(|d| {
            format!(
                r#"
<a href="/destination/{id}" class="block">
    <img src="{img}" class="w-full h-40 object-cover rounded-xl shadow" onerror="this.src='{fallback}'">
    <p class="mt-2 font-semibold text-center">{name}</p>
</a>"#,
                id = html_escape(&encode_component(&d.id)),
                img = html_escape(&destination_image(&d.image)),
                fallback = DESTINATION_FALLBACK_IMAGE,
                name = html_escape(&d.name),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use triptide_client::Measure;

    use super::*;

    #[test]
    fn weather_lists_three_readings() {
        let html = weather(&Weather {
            temp: Measure::Number(31.0),
            condition: "Sunny".to_string(),
            wind: Measure::Number(12.5),
        });
        assert!(html.contains("<strong>Temperature:</strong> 31°C"));
        assert!(html.contains("<strong>Condition:</strong> Sunny"));
        assert!(html.contains("<strong>Wind:</strong> 12.5 km/h"));
    }

    #[test]
    fn unknown_distance_is_rendered_verbatim() {
        let html = distance(&Distance {
            distance_km: Measure::Text("unknown".to_string()),
        });
        assert_eq!(html, "Distance from you: <strong>unknown km</strong>");
    }

    #[test]
    fn map_src_embeds_place() {
        assert_eq!(
            map_src("new delhi"),
            "https://www.google.com/maps?q=new%20delhi&output=embed"
        );
    }

    #[test]
    fn destination_tiles_keep_image_file_name() {
        let html = destination_grid(&[DestinationCard {
            id: "goa".to_string(),
            name: "Goa".to_string(),
            image: "assets/img/goa.jpg".to_string(),
        }]);
        assert!(html.contains(r#"href="/destination/goa""#));
        assert!(html.contains(r#"src="/static/images/goa.jpg""#));
        assert!(html.contains("this.src='/static/images/placeholder.jpg'"));
    }
}
