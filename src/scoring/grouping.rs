use std::collections::HashSet;

use crate::input::types::{Rating, ReviewedItem};

/// Distinct reviewed items, first occurrence of each id wins.
///
/// Discovery order feeds the ranking tie-break, so the input order of first
/// appearances must be preserved.
pub fn unique_items(ratings: &[Rating]) -> Vec<&ReviewedItem> {
    let mut seen = HashSet::new();
    ratings
        .iter()
        .map(|rating| &rating.item_reviewed)
        .filter(|item| seen.insert(item.id.as_str()))
        .collect()
}

/// Distinct rating authors, first occurrence wins.
pub fn unique_authors(ratings: &[Rating]) -> Vec<&str> {
    let mut seen = HashSet::new();
    ratings
        .iter()
        .map(|rating| rating.author.as_str())
        .filter(|author| seen.insert(*author))
        .collect()
}

/// Partition the rating list down to one item's ratings, in input order.
pub fn ratings_for_item<'a>(ratings: &'a [Rating], item: &'a ReviewedItem) -> ItemRatings<'a> {
    ItemRatings {
        item,
        ratings: ratings
            .iter()
            .filter(|rating| rating.item_reviewed.id == item.id)
            .collect(),
    }
}

/// Partition the rating list down to the ratings one author handed out.
pub fn ratings_by_author<'a>(ratings: &'a [Rating], author: &'a str) -> AuthorRatings<'a> {
    AuthorRatings {
        author,
        ratings: ratings
            .iter()
            .filter(|rating| rating.author == author)
            .collect(),
    }
}

/// Ratings that all concern one reviewed item.
///
/// Only constructible through [`ratings_for_item`], so the aggregator can
/// never be handed a mixed-item bucket.
pub struct ItemRatings<'a> {
    pub(crate) item: &'a ReviewedItem,
    pub(crate) ratings: Vec<&'a Rating>,
}

/// Ratings that all share one author. Only constructible through
/// [`ratings_by_author`].
pub struct AuthorRatings<'a> {
    pub(crate) author: &'a str,
    pub(crate) ratings: Vec<&'a Rating>,
}
