use super::ApiError;
use crate::constants::messages;

/// Recipe ids in paths must be plain non-negative integers; anything else is
/// treated as a route that does not exist.
pub fn parse_recipe_id(raw: &str) -> Result<i32, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::recipe_not_found(raw));
    }

    raw.parse::<i32>()
        .map_err(|_| ApiError::recipe_not_found(raw))
}

/// Returns the category, or a validation error when it is missing or empty.
pub fn require_category(category: Option<&str>) -> Result<&str, ApiError> {
    match category {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::validation(messages::MISSING_CATEGORY)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recipe_id() {
        assert_eq!(parse_recipe_id("42").unwrap(), 42);
        assert_eq!(parse_recipe_id("0").unwrap(), 0);
        assert!(matches!(parse_recipe_id("-1"), Err(ApiError::NotFound(_))));
        assert!(matches!(parse_recipe_id("abc"), Err(ApiError::NotFound(_))));
        assert!(matches!(parse_recipe_id(""), Err(ApiError::NotFound(_))));
        assert!(matches!(
            parse_recipe_id("99999999999"),
            Err(ApiError::NotFound(_))
        ));
    }

    #[test]
    fn test_require_category() {
        assert_eq!(require_category(Some("soup")).unwrap(), "soup");
        assert!(require_category(Some("")).is_err());
        assert!(require_category(None).is_err());
    }
}
