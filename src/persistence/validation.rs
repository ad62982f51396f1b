//! Shape checks applied before an imported document replaces the current one

use serde_json::Value;

/// Top-level fields an import must carry
pub const REQUIRED_FIELDS: [&str; 2] = ["semesters", "gradeSystem"];

/// Loose truthiness: null, false, 0 and "" are empty; arrays and objects never are
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// First required field that is absent or empty
pub fn missing_field(root: &Value) -> Option<&'static str> {
    REQUIRED_FIELDS
        .into_iter()
        .find(|field| !root.get(field).map(is_truthy).unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!("4")));
        assert!(is_truthy(&json!(10)));
    }

    #[test]
    fn test_missing_field() {
        assert_eq!(missing_field(&json!({"semesters": [], "gradeSystem": "10"})), None);
        assert_eq!(
            missing_field(&json!({"semesters": [], "foo": 1})),
            Some("gradeSystem")
        );
        assert_eq!(missing_field(&json!({"gradeSystem": "4"})), Some("semesters"));
        assert_eq!(
            missing_field(&json!({"semesters": null, "gradeSystem": "4"})),
            Some("semesters")
        );
        assert_eq!(missing_field(&json!([1, 2])), Some("semesters"));
    }
}
