//! Heuristic resolution of well-known fields.
//!
//! Email and display-name detection over arbitrary schemas is inherently
//! fuzzy, so the rules live behind a capability trait. Alternate schemas can
//! ship their own resolver without touching the campaign builder.

use rolodex_core::types::Record;

/// Display name used when no name-like field is present.
pub const DEFAULT_DISPLAY_NAME: &str = "Client";

/// Locates the email address and display name of a record.
pub trait FieldResolver: Send + Sync {
    /// The record's email address, if an email-like field with a non-empty
    /// value exists.
    fn email(&self, record: &Record) -> Option<String>;

    /// The record's display name; falls back to [`DEFAULT_DISPLAY_NAME`].
    fn display_name(&self, record: &Record) -> String;
}

/// The shipped field resolver.
///
/// Email: the first field whose name contains `"email"` (case-insensitive)
/// or equals `"e-mail"`. Display name: the first non-empty of `Name`,
/// `name`, `First Name`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicResolver;

impl FieldResolver for HeuristicResolver {
    fn email(&self, record: &Record) -> Option<String> {
        record
            .fields
            .iter()
            .find(|f| {
                let lower = f.name.to_lowercase();
                lower.contains("email") || lower == "e-mail"
            })
            .map(|f| f.value.render())
            .filter(|v| !v.trim().is_empty())
    }

    fn display_name(&self, record: &Record) -> String {
        for name in ["Name", "name", "First Name"] {
            if let Some(value) = record.field(name) {
                let text = value.render();
                if !text.trim().is_empty() {
                    return text;
                }
            }
        }
        DEFAULT_DISPLAY_NAME.to_string()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex_core::types::{Field, FieldValue};

    fn rec(fields: &[(&str, &str)]) -> Record {
        Record {
            id: "rec1".to_string(),
            fields: fields
                .iter()
                .map(|(name, value)| Field {
                    name: name.to_string(),
                    value: FieldValue::Text(value.to_string()),
                })
                .collect(),
        }
    }

    // ---- Email heuristic ----

    #[test]
    fn test_email_exact_field() {
        let r = rec(&[("Name", "Jane"), ("Email", "jane@x.com")]);
        assert_eq!(
            HeuristicResolver.email(&r),
            Some("jane@x.com".to_string())
        );
    }

    #[test]
    fn test_email_name_contains_email() {
        let r = rec(&[("Work Email Address", "j@work.com")]);
        assert_eq!(HeuristicResolver.email(&r), Some("j@work.com".to_string()));
    }

    #[test]
    fn test_email_hyphenated_variant() {
        let r = rec(&[("E-Mail", "j@x.com")]);
        assert_eq!(HeuristicResolver.email(&r), Some("j@x.com".to_string()));
    }

    #[test]
    fn test_email_first_matching_field_wins() {
        let r = rec(&[("Email", "first@x.com"), ("Backup Email", "second@x.com")]);
        assert_eq!(HeuristicResolver.email(&r), Some("first@x.com".to_string()));
    }

    #[test]
    fn test_email_empty_value_is_none() {
        let r = rec(&[("Email", "   ")]);
        assert!(HeuristicResolver.email(&r).is_none());
    }

    #[test]
    fn test_no_email_like_field_is_none() {
        let r = rec(&[("Name", "Jane"), ("Phone", "555-0100")]);
        assert!(HeuristicResolver.email(&r).is_none());
    }

    // ---- Display name ----

    #[test]
    fn test_display_name_prefers_capital_name() {
        let r = rec(&[("name", "lower"), ("Name", "Jane Doe")]);
        assert_eq!(HeuristicResolver.display_name(&r), "Jane Doe");
    }

    #[test]
    fn test_display_name_lowercase_fallback() {
        let r = rec(&[("name", "jane")]);
        assert_eq!(HeuristicResolver.display_name(&r), "jane");
    }

    #[test]
    fn test_display_name_first_name_fallback() {
        let r = rec(&[("First Name", "Jane"), ("Email", "j@x.com")]);
        assert_eq!(HeuristicResolver.display_name(&r), "Jane");
    }

    #[test]
    fn test_display_name_default_when_absent() {
        let r = rec(&[("Email", "j@x.com")]);
        assert_eq!(HeuristicResolver.display_name(&r), DEFAULT_DISPLAY_NAME);
    }

    #[test]
    fn test_display_name_skips_empty_values() {
        let r = rec(&[("Name", ""), ("First Name", "Jane")]);
        assert_eq!(HeuristicResolver.display_name(&r), "Jane");
    }

    #[test]
    fn test_email_renders_non_text_values() {
        let r = Record {
            id: "rec1".to_string(),
            fields: vec![Field {
                name: "Emails".to_string(),
                value: FieldValue::MultiSelect(vec!["a@x.com".to_string()]),
            }],
        };
        assert_eq!(HeuristicResolver.email(&r), Some("a@x.com".to_string()));
    }
}
