pub mod aggregate;
pub mod average;
pub mod grouping;
pub mod own_rating;
pub mod strategy;

pub use aggregate::{aggregate_all, AggregateRating, RatingGiven};
pub use average::{average, round2};
pub use grouping::{
    ratings_by_author, ratings_for_item, unique_authors, unique_items, AuthorRatings, ItemRatings,
};
pub use own_rating::{resolve_own_ratings, OwnRating, ProxyRating};
pub use strategy::{heavily_compensated, penalty, standard_compensated, Strategy};
