// src/domain/filter.rs

use std::cmp::Ordering;

use crate::domain::criteria::Criteria;
use crate::domain::listing::Listing;

pub const FALLBACK_NOTE: &str = "No exact matches found. Here are some related PGs.";

/// Ordered matches plus an optional note. The note is only set when the
/// exact pass came back empty and the relaxed pass was used instead.
#[derive(Debug)]
pub struct Recommendation<'a> {
    pub listings: Vec<&'a Listing>,
    pub note: Option<&'static str>,
}

impl Recommendation<'_> {
    pub fn is_fallback(&self) -> bool {
        self.note.is_some()
    }
}

/// Filter `table` by every supplied criterion. If nothing matches, retry
/// with only city, college and rent ceiling. Either way results come back
/// best-rated first, cheapest first within a rating.
pub fn recommend<'a>(table: &'a [Listing], criteria: &Criteria) -> Recommendation<'a> {
    let mut exact = apply(table, criteria);
    if !exact.is_empty() {
        sort_by_rating_then_rent(&mut exact);
        return Recommendation {
            listings: exact,
            note: None,
        };
    }

    let mut related = apply(table, &criteria.relaxed());
    sort_by_rating_then_rent(&mut related);
    Recommendation {
        listings: related,
        note: Some(FALLBACK_NOTE),
    }
}

fn apply<'a>(table: &'a [Listing], criteria: &Criteria) -> Vec<&'a Listing> {
    // Lowercase the needles once per pass, not once per row.
    let city = criteria.city.as_deref().map(str::to_lowercase);
    let college = criteria.nearby_college.as_deref().map(str::to_lowercase);
    let room_type = criteria.room_type.as_deref().map(str::to_lowercase);
    let amenities: Vec<String> = criteria.amenities.iter().map(|a| a.to_lowercase()).collect();

    table
        .iter()
        .filter(|l| text_matches(l.city.as_deref(), city.as_deref()))
        .filter(|l| text_matches(l.nearby_college.as_deref(), college.as_deref()))
        .filter(|l| criteria.max_rent.map_or(true, |max| l.rent_per_month <= max))
        .filter(|l| criteria.max_distance.map_or(true, |max| l.distance_km <= max))
        .filter(|l| criteria.min_rating.map_or(true, |min| l.rating >= min))
        .filter(|l| text_matches(l.room_type.as_deref(), room_type.as_deref()))
        .filter(|l| amenities.iter().all(|wanted| l.amenities.contains(wanted)))
        .collect()
}

/// `None` needle means the criterion is absent. A missing value never matches.
fn text_matches(value: Option<&str>, needle: Option<&str>) -> bool {
    match (needle, value) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(needle), Some(value)) => value.to_lowercase().contains(needle),
    }
}

/// Rating descending, then rent ascending. `sort_by` is stable, so
/// remaining ties keep table order.
fn sort_by_rating_then_rent(listings: &mut [&Listing]) {
    listings.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.rent_per_month.cmp(&b.rent_per_month))
    });
}
