pub mod reader;
pub mod types;
pub mod validate;

pub use reader::load_ratings;
pub use types::{Rating, RatingsFile, ReviewedItem};
pub use validate::validate_ratings;
