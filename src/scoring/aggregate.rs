use serde::Serialize;

use super::average::average;
use super::grouping::{self, AuthorRatings, ItemRatings};
use crate::input::types::{Rating, ReviewedItem};

/// Summary score for one reviewed item. Derived, recomputed on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRating {
    pub item_reviewed: ReviewedItem,
    pub rating_value: f64,
    pub rating_count: usize,
}

/// Summary of the ratings one author handed out across all items.
///
/// Internal compensation signal only; never part of a returned result
/// collection.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingGiven {
    pub author: String,
    pub rating_value: f64,
    pub rating_count: usize,
}

impl ItemRatings<'_> {
    /// Collapse the bucket into a count + average summary, or `None` for an
    /// empty bucket.
    pub fn aggregate(&self) -> Option<AggregateRating> {
        let values: Vec<f64> = self.ratings.iter().map(|r| r.rating_value).collect();
        Some(AggregateRating {
            item_reviewed: self.item.clone(),
            rating_value: average(&values)?,
            rating_count: self.ratings.len(),
        })
    }
}

impl AuthorRatings<'_> {
    /// Same algorithm as the per-item aggregation, keyed by author.
    pub fn aggregate(&self) -> Option<RatingGiven> {
        let values: Vec<f64> = self.ratings.iter().map(|r| r.rating_value).collect();
        Some(RatingGiven {
            author: self.author.to_string(),
            rating_value: average(&values)?,
            rating_count: self.ratings.len(),
        })
    }
}

/// Aggregate a flat rating list into ranked per-item summaries.
///
/// Items are discovered in input order, summarized, then sorted by score
/// descending. Returns `None` for empty input; a non-empty input always
/// produces a non-empty result.
pub fn aggregate_all(ratings: &[Rating]) -> Option<Vec<AggregateRating>> {
    if ratings.is_empty() {
        return None;
    }

    let mut summaries: Vec<AggregateRating> = grouping::unique_items(ratings)
        .into_iter()
        .filter_map(|item| grouping::ratings_for_item(ratings, item).aggregate())
        .collect();

    sort_descending(&mut summaries);
    Some(summaries)
}

/// Stable descending sort by rating value.
///
/// Entries with equal values must keep their current relative order, so the
/// comparator reports ties as equal instead of inventing a secondary key.
pub(crate) fn sort_descending(summaries: &mut [AggregateRating]) {
    summaries.sort_by(|a, b| {
        b.rating_value
            .partial_cmp(&a.rating_value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, owner: &str) -> ReviewedItem {
        ReviewedItem {
            id: id.to_string(),
            owner: owner.to_string(),
        }
    }

    fn rating(author: &str, value: f64, item: &ReviewedItem) -> Rating {
        Rating {
            author: author.to_string(),
            rating_value: value,
            item_reviewed: item.clone(),
        }
    }

    fn find<'a>(summaries: &'a [AggregateRating], id: &str) -> &'a AggregateRating {
        summaries
            .iter()
            .find(|s| s.item_reviewed.id == id)
            .unwrap()
    }

    #[test]
    fn test_aggregate_single_rating() {
        let subject = item("item-1", "owner");
        let ratings = vec![rating("alice", 43.0, &subject)];

        let summary = grouping::ratings_for_item(&ratings, &subject)
            .aggregate()
            .unwrap();
        assert_eq!(summary.item_reviewed, subject);
        assert_eq!(summary.rating_count, 1);
        assert_eq!(summary.rating_value, 43.0);
    }

    #[test]
    fn test_aggregate_two_ratings() {
        let subject = item("item-1", "owner");
        let ratings = vec![rating("alice", 35.0, &subject), rating("bob", 15.0, &subject)];

        let summary = grouping::ratings_for_item(&ratings, &subject)
            .aggregate()
            .unwrap();
        assert_eq!(summary.rating_count, 2);
        assert_eq!(summary.rating_value, 25.0);
    }

    #[test]
    fn test_aggregate_multiple_ratings() {
        let subject = item("item-1", "owner");
        let ratings = vec![
            rating("alice", 27.0, &subject),
            rating("bob", 12.0, &subject),
            rating("carol", 69.0, &subject),
        ];

        let summary = grouping::ratings_for_item(&ratings, &subject)
            .aggregate()
            .unwrap();
        assert_eq!(summary.rating_count, 3);
        assert_eq!(summary.rating_value, 36.0);
    }

    #[test]
    fn test_aggregate_empty_bucket_is_none() {
        let subject = item("item-1", "owner");
        let bucket = grouping::ratings_for_item(&[], &subject);
        assert_eq!(bucket.aggregate(), None);
    }

    #[test]
    fn test_aggregate_author_bucket() {
        let first = item("item-1", "owner");
        let second = item("item-2", "owner");
        let ratings = vec![
            rating("alice", 60.0, &first),
            rating("bob", 10.0, &first),
            rating("alice", 80.0, &second),
        ];

        let given = grouping::ratings_by_author(&ratings, "alice")
            .aggregate()
            .unwrap();
        assert_eq!(given.author, "alice");
        assert_eq!(given.rating_count, 2);
        assert_eq!(given.rating_value, 70.0);
    }

    #[test]
    fn test_aggregate_all_empty_is_none() {
        assert_eq!(aggregate_all(&[]), None);
    }

    #[test]
    fn test_aggregate_all_summarizes_each_item() {
        let first = item("item-1", "owner");
        let second = item("other-item", "owner");
        let ratings = vec![
            rating("alice", 2.0, &first),
            rating("alice", 48.0, &first),
            rating("alice", 21.0, &first),
            rating("alice", 13.0, &second),
            rating("alice", 23.0, &second),
            rating("alice", 12.0, &first),
        ];

        let summaries = aggregate_all(&ratings).unwrap();
        assert_eq!(summaries.len(), 2);

        let second_summary = find(&summaries, "other-item");
        assert_eq!(second_summary.rating_count, 2);
        assert_eq!(second_summary.rating_value, 18.0);

        let first_summary = find(&summaries, "item-1");
        assert_eq!(first_summary.rating_count, 4);
        assert_eq!(first_summary.rating_value, 20.75);
    }

    #[test]
    fn test_aggregate_all_orders_descending() {
        let first = item("item-1", "owner");
        let second = item("other-item", "owner");
        let third = item("yet-another-item", "owner");
        let fourth = item("yet-again-another-item", "owner");
        let ratings = vec![
            rating("alice", 2.0, &first),
            rating("alice", 48.0, &third),
            rating("alice", 13.0, &second),
            rating("alice", 21.0, &first),
            rating("alice", 13.0, &second),
            rating("alice", 31.0, &first),
            rating("alice", 23.0, &third),
            rating("alice", 12.0, &first),
            rating("alice", 17.0, &first),
            rating("alice", 12.0, &fourth),
        ];

        let summaries = aggregate_all(&ratings).unwrap();
        let ids: Vec<&str> = summaries.iter().map(|s| s.item_reviewed.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["yet-another-item", "item-1", "other-item", "yet-again-another-item"]
        );
        let values: Vec<f64> = summaries.iter().map(|s| s.rating_value).collect();
        assert_eq!(values, vec![35.5, 16.6, 13.0, 12.0]);
        let counts: Vec<usize> = summaries.iter().map(|s| s.rating_count).collect();
        assert_eq!(counts, vec![2, 5, 2, 1]);
    }

    #[test]
    fn test_aggregate_all_ties_keep_discovery_order() {
        // Both items average 15; the one rated first must stay first.
        let first = item("seen-first", "owner");
        let second = item("seen-second", "owner");
        let ratings = vec![
            rating("alice", 10.0, &first),
            rating("alice", 15.0, &second),
            rating("alice", 20.0, &first),
            rating("alice", 15.0, &second),
        ];

        let summaries = aggregate_all(&ratings).unwrap();
        assert_eq!(summaries[0].item_reviewed.id, "seen-first");
        assert_eq!(summaries[1].item_reviewed.id, "seen-second");
        assert_eq!(summaries[0].rating_value, summaries[1].rating_value);

        // Permuting the input flips the tie-break with it.
        let reversed = vec![
            rating("alice", 15.0, &second),
            rating("alice", 10.0, &first),
            rating("alice", 15.0, &second),
            rating("alice", 20.0, &first),
        ];
        let summaries = aggregate_all(&reversed).unwrap();
        assert_eq!(summaries[0].item_reviewed.id, "seen-second");
        assert_eq!(summaries[1].item_reviewed.id, "seen-first");
    }
}
