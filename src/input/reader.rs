use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::types::{Rating, RatingsFile};

/// Load a rating list from a YAML or JSON file.
///
/// A `.json` extension selects JSON; everything else is parsed as YAML.
pub fn load_ratings(path: &Path) -> Result<Vec<Rating>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read ratings file at {}", path.display()))?;

    let file: RatingsFile = if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&content).with_context(|| {
            format!("Failed to parse ratings: invalid JSON in {}", path.display())
        })?
    } else {
        serde_saphyr::from_str(&content).with_context(|| {
            format!("Failed to parse ratings: invalid YAML in {}", path.display())
        })?
    };

    Ok(file.ratings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_ratings() {
        let yaml = r#"
ratings:
  - author: alice
    rating_value: 60
    item_reviewed: { id: item-1, owner: bob }
  - author: bob
    rating_value: 20.5
    item_reviewed:
      id: item-2
      owner: alice
"#;
        let file: RatingsFile = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(file.ratings.len(), 2);
        assert_eq!(file.ratings[0].author, "alice");
        assert_eq!(file.ratings[0].rating_value, 60.0);
        assert_eq!(file.ratings[0].item_reviewed.owner, "bob");
        assert_eq!(file.ratings[1].rating_value, 20.5);
    }

    #[test]
    fn test_parse_json_ratings() {
        let json = r#"{
  "ratings": [
    {
      "author": "alice",
      "rating_value": 60,
      "item_reviewed": { "id": "item-1", "owner": "bob" }
    }
  ]
}"#;
        let file: RatingsFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.ratings.len(), 1);
        assert_eq!(file.ratings[0].item_reviewed.id, "item-1");
    }

    #[test]
    fn test_load_ratings_dispatches_on_extension() {
        let dir = std::env::temp_dir();

        let yaml_path = dir.join("peer-rank-reader-test.yaml");
        fs::write(
            &yaml_path,
            "ratings:\n  - author: alice\n    rating_value: 10\n    item_reviewed: { id: a, owner: b }\n",
        )
        .unwrap();
        let ratings = load_ratings(&yaml_path).unwrap();
        assert_eq!(ratings.len(), 1);
        fs::remove_file(&yaml_path).unwrap();

        let json_path = dir.join("peer-rank-reader-test.json");
        fs::write(
            &json_path,
            r#"{"ratings":[{"author":"alice","rating_value":10,"item_reviewed":{"id":"a","owner":"b"}}]}"#,
        )
        .unwrap();
        let ratings = load_ratings(&json_path).unwrap();
        assert_eq!(ratings.len(), 1);
        fs::remove_file(&json_path).unwrap();
    }

    #[test]
    fn test_load_ratings_missing_file_is_error() {
        let path = std::env::temp_dir().join("peer-rank-does-not-exist.yaml");
        let result = load_ratings(&path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read"));
    }
}
