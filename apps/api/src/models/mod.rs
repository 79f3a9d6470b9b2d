pub mod job;
pub mod project;
pub mod user;

/// Decodes a JSON string-list column. Malformed or non-list content reads as empty.
pub fn parse_string_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Encodes a string list for a JSON text column.
pub fn encode_string_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_string_list_valid() {
        assert_eq!(
            parse_string_list(r#"["Rust", "Go"]"#),
            vec!["Rust".to_string(), "Go".to_string()]
        );
    }

    #[test]
    fn test_parse_string_list_is_lenient() {
        assert!(parse_string_list("not json").is_empty());
        assert!(parse_string_list(r#"{"a": 1}"#).is_empty());
        assert!(parse_string_list("").is_empty());
    }

    #[test]
    fn test_encode_string_list() {
        assert_eq!(encode_string_list(&[]), "[]");
        assert_eq!(encode_string_list(&["React".to_string()]), r#"["React"]"#);
    }
}
