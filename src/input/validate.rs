use super::types::Rating;

/// Validate a loaded rating list before it reaches the scoring core.
/// Returns all validation errors at once (not just the first).
pub fn validate_ratings(ratings: &[Rating]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (i, rating) in ratings.iter().enumerate() {
        if !rating.rating_value.is_finite() {
            errors.push(format!(
                "ratings[{}].rating_value: must be a finite number",
                i
            ));
        }
        if rating.author.trim().is_empty() {
            errors.push(format!("ratings[{}].author: must not be empty", i));
        }
        if rating.item_reviewed.id.trim().is_empty() {
            errors.push(format!("ratings[{}].item_reviewed.id: must not be empty", i));
        }
        if rating.item_reviewed.owner.trim().is_empty() {
            errors.push(format!(
                "ratings[{}].item_reviewed.owner: must not be empty",
                i
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
