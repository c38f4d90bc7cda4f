use serde::{Deserialize, Serialize};

/// A shared item somebody can rate. Identity is `id`; `owner` is the author
/// credited as its producer, who may or may not rate other items.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReviewedItem {
    pub id: String,
    pub owner: String,
}

/// One person's score for one item. Produced entirely by the caller;
/// never mutated by the scoring core.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Rating {
    pub author: String,
    pub rating_value: f64,
    pub item_reviewed: ReviewedItem,
}

/// Document root of a ratings file.
#[derive(Debug, Deserialize, Serialize)]
pub struct RatingsFile {
    pub ratings: Vec<Rating>,
}
