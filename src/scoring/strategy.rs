use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::aggregate::{self, AggregateRating};
use super::average::round2;
use super::own_rating::{self, OwnRating};
use crate::input::types::Rating;

/// Selectable aggregation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Plain per-item averages, no compensation
    Standard,
    /// Each owner's own-rating proxy weighs in as one extra vote
    StandardCompensated,
    /// Each owner's proxy counts for half the final score
    HeavilyCompensated,
    /// Like standard-compensated, but owners who never rated get a zero vote
    Penalty,
}

impl Strategy {
    /// Run the selected strategy over a rating list.
    pub fn compute(self, ratings: &[Rating]) -> Option<Vec<AggregateRating>> {
        match self {
            Strategy::Standard => aggregate::aggregate_all(ratings),
            Strategy::StandardCompensated => standard_compensated(ratings),
            Strategy::HeavilyCompensated => heavily_compensated(ratings),
            Strategy::Penalty => penalty(ratings),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::Standard => "standard",
            Strategy::StandardCompensated => "standard-compensated",
            Strategy::HeavilyCompensated => "heavily-compensated",
            Strategy::Penalty => "penalty",
        })
    }
}

fn proxy_to_rating(proxy: own_rating::ProxyRating) -> Rating {
    Rating {
        author: proxy.author,
        rating_value: proxy.rating_value,
        item_reviewed: proxy.item_reviewed,
    }
}

/// Fold each owner's proxy rating in as exactly one extra vote.
///
/// Dilution is 1/(N+1): items with many real raters barely move, items with
/// one or two raters are meaningfully rebalanced. Items whose owner never
/// rated anyone keep their plain average.
pub fn standard_compensated(ratings: &[Rating]) -> Option<Vec<AggregateRating>> {
    let own_ratings = own_rating::resolve_own_ratings(ratings)?;

    let mut augmented = ratings.to_vec();
    augmented.extend(own_ratings.into_iter().filter_map(|slot| match slot {
        OwnRating::Available(proxy) => Some(proxy_to_rating(proxy)),
        OwnRating::Unavailable(_) => None,
    }));

    aggregate::aggregate_all(&augmented)
}

/// Blend each item's plain average with its owner's proxy at equal weight,
/// no matter how many real raters contributed.
///
/// Items whose owner never rated anyone fall back to the uncompensated
/// entry, value and count untouched.
pub fn heavily_compensated(ratings: &[Rating]) -> Option<Vec<AggregateRating>> {
    let own_ratings = own_rating::resolve_own_ratings(ratings)?;
    let standard = aggregate::aggregate_all(ratings)?;

    let mut combined: Vec<AggregateRating> = standard
        .into_iter()
        .map(|summary| {
            let proxy = own_ratings.iter().find_map(|slot| match slot {
                OwnRating::Available(p) if p.item_reviewed.id == summary.item_reviewed.id => {
                    Some(p)
                }
                _ => None,
            });
            match proxy {
                Some(proxy) => AggregateRating {
                    rating_value: round2((summary.rating_value + proxy.rating_value) / 2.0),
                    rating_count: summary.rating_count + 1,
                    item_reviewed: summary.item_reviewed,
                },
                None => summary,
            }
        })
        .collect();

    // Combination changes the scores, so the ranking is recomputed with the
    // same stable comparator.
    aggregate::sort_descending(&mut combined);
    Some(combined)
}

/// Standard-compensated without the unavailable-proxy escape hatch.
///
/// Every item gets a proxy vote; an owner who never rated anyone contributes
/// a zero vote against their own items.
pub fn penalty(ratings: &[Rating]) -> Option<Vec<AggregateRating>> {
    let own_ratings = own_rating::resolve_own_ratings(ratings)?;

    let mut augmented = ratings.to_vec();
    augmented.extend(own_ratings.into_iter().map(|slot| match slot {
        OwnRating::Available(proxy) => proxy_to_rating(proxy),
        OwnRating::Unavailable(item) => Rating {
            author: item.owner.clone(),
            rating_value: 0.0,
            item_reviewed: item,
        },
    }));

    aggregate::aggregate_all(&augmented)
}
