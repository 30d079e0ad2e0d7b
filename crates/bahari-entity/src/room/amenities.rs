//! Amenities column normalization.
//!
//! The amenities column has historically held three shapes: a JSON array of
//! strings, a comma-separated list, or a single bare string. Everything is
//! normalized to a deduplicated, trimmed list of strings at the data-store
//! boundary by one parsing function with a defined fallback chain:
//! JSON parse → comma split → empty.

/// Parse a raw amenities column value into a normalized list.
pub fn parse_amenities(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if let Ok(serde_json::Value::Array(items)) = serde_json::from_str(trimmed) {
        return normalize(
            items
                .into_iter()
                .filter_map(|v| v.as_str().map(str::to_string)),
        );
    }

    normalize(trimmed.split(',').map(str::to_string))
}

/// Serialize a normalized amenities list back to its canonical column form
/// (a JSON array).
pub fn amenities_to_column(amenities: &[String]) -> String {
    serde_json::to_string(amenities).unwrap_or_else(|_| "[]".to_string())
}

fn normalize<I: Iterator<Item = String>>(items: I) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_array_shape() {
        assert_eq!(
            parse_amenities(r#"["Wi-Fi", "Ocean View", "Mini Bar"]"#),
            vec!["Wi-Fi", "Ocean View", "Mini Bar"]
        );
    }

    #[test]
    fn test_comma_list_shape() {
        assert_eq!(
            parse_amenities("Wi-Fi, Ocean View ,Mini Bar"),
            vec!["Wi-Fi", "Ocean View", "Mini Bar"]
        );
    }

    #[test]
    fn test_bare_string_shape() {
        assert_eq!(parse_amenities("Wi-Fi"), vec!["Wi-Fi"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(parse_amenities("").is_empty());
        assert!(parse_amenities("   ").is_empty());
        assert!(parse_amenities("[]").is_empty());
        assert!(parse_amenities(" , ,").is_empty());
    }

    #[test]
    fn test_deduplication_is_case_insensitive() {
        assert_eq!(parse_amenities("Wi-Fi, wi-fi, WI-FI"), vec!["Wi-Fi"]);
    }

    #[test]
    fn test_json_array_with_non_strings_keeps_strings() {
        assert_eq!(parse_amenities(r#"["Pool", 42, null]"#), vec!["Pool"]);
    }

    #[test]
    fn test_round_trip_to_column() {
        let amenities = parse_amenities("Pool, Spa");
        let column = amenities_to_column(&amenities);
        assert_eq!(parse_amenities(&column), amenities);
    }
}
