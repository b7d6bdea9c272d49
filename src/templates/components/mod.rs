use std::collections::HashMap;

use crate::domain::Listing;
use maud::{html, Markup};

pub mod error;

pub use error::{error_banner, error_page};

pub fn note_banner(message: &str) -> Markup {
    html! {
        div class="banner note" role="status" { (message) }
    }
}

/// The search form. `values` holds the raw submitted fields so the form
/// keeps what the user typed.
pub fn search_form(values: &HashMap<String, String>) -> Markup {
    let value = |key: &str| values.get(key).map(String::as_str).unwrap_or("");

    html! {
        form class="search-form" method="post" action="/" {
            label for="city" {
                "City"
                input type="text" id="city" name="city" placeholder="Chennai" value=(value("city"));
            }
            label for="nearby_college" {
                "Nearby college"
                input type="text" id="nearby_college" name="nearby_college" placeholder="Anna University" value=(value("nearby_college"));
            }
            label for="max_rent" {
                "Max rent (INR / month)"
                input type="number" id="max_rent" name="max_rent" min="0" step="1" value=(value("max_rent"));
            }
            label for="room_type" {
                "Room type"
                input type="text" id="room_type" name="room_type" placeholder="Single, Shared…" value=(value("room_type"));
            }
            label for="amenities" {
                "Amenities (comma separated)"
                input type="text" id="amenities" name="amenities" placeholder="WiFi, Food" value=(value("amenities"));
            }
            label for="max_distance" {
                "Max distance to college (km)"
                input type="number" id="max_distance" name="max_distance" min="0" step="0.1" value=(value("max_distance"));
            }
            label for="min_rating" {
                "Minimum rating"
                input type="number" id="min_rating" name="min_rating" min="0" max="5" step="0.1" value=(value("min_rating"));
            }
            button type="submit" { "Find PGs" }
        }
    }
}

pub fn listing_table(listings: &[&Listing]) -> Markup {
    html! {
        p { "Found " strong { (listings.len()) } " PGs." }

        @if !listings.is_empty() {
            table {
                thead {
                    tr {
                        th scope="col" { "Name" }
                        th scope="col" { "City" }
                        th scope="col" { "Nearby college" }
                        th scope="col" { "Rent (INR/month)" }
                        th scope="col" { "Room type" }
                        th scope="col" { "Amenities" }
                        th scope="col" { "Distance (km)" }
                        th scope="col" { "Rating" }
                    }
                }
                tbody {
                    @for listing in listings {
                        tr {
                            td { (listing.display_name()) }
                            td { (listing.city.as_deref().unwrap_or("—")) }
                            td { (listing.nearby_college.as_deref().unwrap_or("—")) }
                            td { "₹" (listing.rent_per_month) }
                            td { (listing.room_type.as_deref().unwrap_or("—")) }
                            td {
                                @if listing.amenities.is_empty() { "—" } @else { (listing.amenities_label()) }
                            }
                            td { (format!("{:.1}", listing.distance_km)) }
                            td { (format!("{:.1}", listing.rating)) }
                        }
                    }
                }
            }
        }
    }
}
