use crate::core::request::CafeQuery;
use crate::core::{Venue, VenueLookup};

/// Names matching `query`, in catalog order, capped at `query.count`.
///
/// An unknown city yields an empty list; [`CafeQuery`] construction already
/// rejects those.
pub fn select_venues<'a>(catalog: &'a impl VenueLookup, query: &CafeQuery) -> Vec<&'a str> {
    let venues = catalog.venues(&query.city).unwrap_or_default();
    filter_venues(venues, &query.search, query.count)
}

pub fn filter_venues<'a>(venues: &'a [Venue], search: &str, count: Option<usize>) -> Vec<&'a str> {
    let needle = search.to_lowercase();
    let limit = count.unwrap_or(usize::MAX);

    venues
        .iter()
        .map(|venue| venue.name.as_str())
        .filter(|name| needle.is_empty() || name.to_lowercase().contains(&needle))
        .take(limit)
        .collect()
}

/// Response body: names joined by `,`, empty when there are none.
pub fn render(names: &[&str]) -> String {
    names.join(",")
}
