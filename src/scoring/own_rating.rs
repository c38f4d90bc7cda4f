use super::aggregate::RatingGiven;
use super::grouping;
use crate::input::types::{Rating, ReviewedItem};

/// Synthetic stand-in for an owner's self-assessment: the average rating the
/// owner handed out elsewhere, with the contributing count carried alongside.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyRating {
    pub author: String,
    pub item_reviewed: ReviewedItem,
    pub rating_value: f64,
    pub rating_count: usize,
}

/// One slot per distinct reviewed item: the owner's proxy rating, or an
/// explicit marker that the owner never rated anyone.
///
/// Keeping the slot lets callers tell "item present, proxy unavailable"
/// apart from "item absent".
#[derive(Debug, Clone, PartialEq)]
pub enum OwnRating {
    Available(ProxyRating),
    Unavailable(ReviewedItem),
}

impl OwnRating {
    pub fn item(&self) -> &ReviewedItem {
        match self {
            OwnRating::Available(proxy) => &proxy.item_reviewed,
            OwnRating::Unavailable(item) => item,
        }
    }
}

/// For every distinct reviewed item, look up the average rating its owner
/// has given to others, to serve as a tamper-resistant baseline.
///
/// Returns `None` for empty input, or when fewer than two distinct authors
/// are present: compensation needs at least two independent rating behaviors
/// to compare, otherwise an owner would be compensated against their own
/// single data point.
pub fn resolve_own_ratings(ratings: &[Rating]) -> Option<Vec<OwnRating>> {
    if ratings.is_empty() {
        return None;
    }

    let authors = grouping::unique_authors(ratings);
    if authors.len() < 2 {
        return None;
    }

    let given: Vec<RatingGiven> = authors
        .into_iter()
        .filter_map(|author| grouping::ratings_by_author(ratings, author).aggregate())
        .collect();

    let slots = grouping::unique_items(ratings)
        .into_iter()
        .map(|item| match given.iter().find(|g| g.author == item.owner) {
            Some(g) => OwnRating::Available(ProxyRating {
                author: g.author.clone(),
                item_reviewed: item.clone(),
                rating_value: g.rating_value,
                rating_count: g.rating_count,
            }),
            None => OwnRating::Unavailable(item.clone()),
        })
        .collect();

    Some(slots)
}
