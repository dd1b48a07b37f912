//! JSON output formatting.

/// Format a value as JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use syllabus_core::catalog::Course;

    #[test]
    fn test_format_json_is_compact() {
        let course = Course::new("C1", "Algebra", "MATH-101");
        let json = format_json(&course);
        assert!(json.starts_with(r#"{"id":"C1","name":"Algebra""#));
        assert!(!json.contains('\n'));
    }
}
