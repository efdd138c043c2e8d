//! Reusable field rules
//!
//! Rules check a single JSON value. A rule that does not apply to the
//! value's kind passes (another rule on the same field handles the type);
//! only `Required` rejects null itself.

use crate::form::locale::{Locale, render};
use regex::Regex;
use serde_json::Value;
use uuid::Uuid;
use validator::ValidateEmail;

/// A single validation rule for one field
#[derive(Debug, Clone)]
pub enum Rule {
    /// Value must be present and non-null
    Required,
    /// String must have at least this many characters
    MinLength(usize),
    /// String must have at most this many characters
    MaxLength(usize),
    /// String must be a valid e-mail address
    Email,
    /// String must be a valid UUID
    Uuid,
    /// Number must be at least this value
    Min(f64),
    /// Number must be at most this value
    Max(f64),
    /// String must match this pattern
    Matches(Regex),
    /// String must be one of the allowed values
    OneOf(Vec<String>),
    /// String must parse as a date in this chrono format (e.g. `"%Y-%m-%d"`)
    Date(&'static str),
}

impl Rule {
    /// Check the rule against a value, yielding a localized message on failure
    pub fn check(&self, value: &Value, locale: &Locale) -> Result<(), String> {
        match self {
            Rule::Required => {
                if value.is_null() {
                    Err(locale.required.clone())
                } else {
                    Ok(())
                }
            }
            Rule::MinLength(min) => match value.as_str() {
                Some(s) if s.chars().count() < *min => {
                    Err(render(&locale.string_min, "min", &min.to_string()))
                }
                _ => Ok(()),
            },
            Rule::MaxLength(max) => match value.as_str() {
                Some(s) if s.chars().count() > *max => {
                    Err(render(&locale.string_max, "max", &max.to_string()))
                }
                _ => Ok(()),
            },
            Rule::Email => match value.as_str() {
                Some(s) if !s.validate_email() => Err(locale.email.clone()),
                _ => Ok(()),
            },
            Rule::Uuid => match value.as_str() {
                Some(s) if Uuid::parse_str(s).is_err() => Err(locale.uuid.clone()),
                _ => Ok(()),
            },
            Rule::Min(min) => match value.as_f64() {
                Some(n) if n < *min => Err(render(&locale.number_min, "min", &min.to_string())),
                _ => Ok(()),
            },
            Rule::Max(max) => match value.as_f64() {
                Some(n) if n > *max => Err(render(&locale.number_max, "max", &max.to_string())),
                _ => Ok(()),
            },
            Rule::Matches(pattern) => match value.as_str() {
                Some(s) if !pattern.is_match(s) => Err(locale.pattern.clone()),
                _ => Ok(()),
            },
            Rule::OneOf(allowed) => match value.as_str() {
                Some(s) if !allowed.iter().any(|a| a == s) => {
                    Err(render(&locale.one_of, "values", &allowed.join(", ")))
                }
                _ => Ok(()),
            },
            Rule::Date(format) => match value.as_str() {
                Some(s) if chrono::NaiveDate::parse_from_str(s, format).is_err() => {
                    Err(locale.date.clone())
                }
                _ => Ok(()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(rule: Rule, value: Value) -> Result<(), String> {
        rule.check(&value, &Locale::default())
    }

    #[test]
    fn test_required_rejects_null_only() {
        assert!(check(Rule::Required, Value::Null).is_err());
        assert!(check(Rule::Required, json!("")).is_ok());
        assert!(check(Rule::Required, json!(0)).is_ok());
    }

    #[test]
    fn test_min_length_counts_characters() {
        assert!(check(Rule::MinLength(3), json!("ab")).is_err());
        assert!(check(Rule::MinLength(3), json!("abc")).is_ok());
        // Umlauts are one character, not two bytes
        assert!(check(Rule::MinLength(3), json!("äöü")).is_ok());
    }

    #[test]
    fn test_min_length_message_interpolates() {
        let err = check(Rule::MinLength(8), json!("kurz")).unwrap_err();
        assert!(err.contains('8'), "message should name the minimum: {err}");
    }

    #[test]
    fn test_email() {
        assert!(check(Rule::Email, json!("user@example.com")).is_ok());
        assert!(check(Rule::Email, json!("keine-adresse")).is_err());
    }

    #[test]
    fn test_uuid() {
        assert!(check(Rule::Uuid, json!(Uuid::nil().to_string())).is_ok());
        assert!(check(Rule::Uuid, json!("nicht-uuid")).is_err());
    }

    #[test]
    fn test_number_bounds() {
        assert!(check(Rule::Min(1.0), json!(0.5)).is_err());
        assert!(check(Rule::Min(1.0), json!(1)).is_ok());
        assert!(check(Rule::Max(10.0), json!(11)).is_err());
        assert!(check(Rule::Max(10.0), json!(10)).is_ok());
    }

    #[test]
    fn test_non_applicable_types_pass() {
        // A number is not a string; the length rule leaves it to other rules
        assert!(check(Rule::MinLength(3), json!(42)).is_ok());
        assert!(check(Rule::Min(1.0), json!("not a number")).is_ok());
        assert!(check(Rule::Email, Value::Null).is_ok());
    }

    #[test]
    fn test_one_of() {
        let rule = Rule::OneOf(vec!["rot".to_string(), "blau".to_string()]);
        assert!(check(rule.clone(), json!("rot")).is_ok());
        let err = check(rule, json!("grün")).unwrap_err();
        assert!(err.contains("rot, blau"));
    }

    #[test]
    fn test_date_format() {
        assert!(check(Rule::Date("%Y-%m-%d"), json!("2024-02-29")).is_ok());
        assert!(check(Rule::Date("%Y-%m-%d"), json!("29.02.2024")).is_err());
    }

    #[test]
    fn test_matches() {
        let rule = Rule::Matches(Regex::new(r"^\d{5}$").unwrap());
        assert!(check(rule.clone(), json!("12345")).is_ok());
        assert!(check(rule, json!("123")).is_err());
    }
}
