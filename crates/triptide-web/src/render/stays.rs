//! Stay cards for the explore grid, the destination stays grid, and the
//! booking page's similar-stays box.

use triptide_core::{resolve_image, Listing};

use crate::view::{encode_component, html_escape};

pub const NO_MATCHES: &str =
    r#"<p class="text-center text-gray-500">No stays match your filters.</p>"#;

/// `/book/<destination>/<name>`, both segments percent-encoded.
#[must_use]
pub fn book_href(destination: &str, name: &str) -> String {
    format!(
        "/book/{}/{}",
        encode_component(destination),
        encode_component(name)
    )
}

/// Explore grid: price badge over the image, destination line, "View Stay".
#[must_use]
pub fn explore_grid(stays: &[Listing]) -> String {
    if stays.is_empty() {
        return NO_MATCHES.to_string();
    }
    stays.iter().map(explore_card).collect()
}

fn explore_card(s: &Listing) -> String {
    let price = html_escape(&s.price);
    format!(
        r#"
<div class="bg-white rounded-xl shadow p-4">
    <div class="relative">
        <img src="{img}" class="w-full h-40 object-cover rounded-xl">
        <div class="absolute bottom-2 right-2 bg-black/70 text-white text-xs font-semibold px-2 py-1 rounded-full">
            Approx. {price} / day
        </div>
    </div>
    <h3 class="text-xl font-bold mt-2">{name}</h3>
    <p class="text-gray-600">{destination}</p>
    <p class="mt-1 font-semibold">⭐ {rating}</p>
    <p class="text-[#196561] font-bold">{price}</p>
    <a href="{href}" class="book-link block mt-3 w-full text-center py-2 bg-[#196561] text-white rounded-xl">
        View Stay
    </a>
</div>"#,
        img = html_escape(&resolve_image(s.image.as_deref())),
        name = html_escape(&s.name),
        destination = html_escape(&s.destination),
        rating = s.rating,
        href = html_escape(&book_href(&s.destination, &s.name)),
    )
}

/// Destination page stays grid: tagline line, "Book Now".
#[must_use]
pub fn stays_grid(stays: &[Listing]) -> String {
    if stays.is_empty() {
        return NO_MATCHES.to_string();
    }
    stays.iter().map(stay_card).collect()
}

fn stay_card(s: &Listing) -> String {
    format!(
        r#"
<div class="bg-white rounded-xl shadow p-4">
    <img src="{img}" class="w-full h-40 object-cover rounded-xl">
    <h3 class="text-xl font-bold mt-2">{name}</h3>
    <p class="text-gray-600">{tagline}</p>
    <p class="mt-2 font-semibold">⭐ {rating}</p>
    <p class="text-[#196561] font-bold">{price}</p>
    <a href="{href}" class="block mt-3 w-full text-center py-2 bg-[#196561] text-white rounded-xl">
        Book Now
    </a>
</div>"#,
        img = html_escape(&resolve_image(s.image.as_deref())),
        name = html_escape(&s.name),
        tagline = html_escape(s.tagline.as_deref().unwrap_or_default()),
        rating = s.rating,
        price = html_escape(&s.price),
        href = html_escape(&book_href(&s.destination, &s.name)),
    )
}

/// Similar stays on the booking page. Links point back into `destination`,
/// the destination being booked.
#[must_use]
pub fn similar_box(destination: &str, stays: &[Listing]) -> String {
    if stays.is_empty() {
        return NO_MATCHES.to_string();
    }
    stays
        .iter()
        .map(|s| {
            format!(
                r#"
<div class="bg-white rounded-xl shadow p-4">
    <img src="{img}" class="w-full h-32 object-cover rounded-xl">
    <h3 class="mt-2 text-xl font-bold">{name}</h3>
    <p class="text-gray-700">⭐ {rating}</p>
    <p class="font-semibold text-[#196561]">{price}</p>
    <a href="{href}" class="block mt-3 w-full text-center py-2 bg-[#196561] text-white rounded-xl">
        View
    </a>
</div>"#,
                img = html_escape(&resolve_image(s.image.as_deref())),
                name = html_escape(&s.name),
                rating = s.rating,
                price = html_escape(&s.price),
                href = html_escape(&book_href(destination, &s.name)),
            )
        })
        .collect()
}
