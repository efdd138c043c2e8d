//! Schema-driven form validation
//!
//! A [`FormSchema`] is an ordered list of field schemas plus a [`Locale`].
//! Validation runs every field against every rule (no abort on the first
//! failure) and records the first failing rule's message per field, so a
//! form can render one message under each input.

pub mod locale;
pub mod rules;

pub use locale::Locale;
pub use rules::Rule;

use indexmap::IndexMap;
use serde_json::Value;

/// Field name → first failing message, in schema order
pub type ErrorBag = IndexMap<String, String>;

/// Schema for a single form field
#[derive(Debug, Clone)]
pub struct FieldSchema {
    /// Property name in the validated object
    pub name: String,
    /// Human-readable label for rendering
    pub label: String,
    /// Rules checked in declaration order
    pub rules: Vec<Rule>,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            rules: Vec::new(),
        }
    }

    /// Append one rule
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }
}

/// An ordered set of field schemas with an explicit locale
#[derive(Debug, Clone)]
pub struct FormSchema {
    fields: Vec<FieldSchema>,
    locale: Locale,
}

impl FormSchema {
    /// Build a schema with the default (German) locale
    pub fn new(fields: Vec<FieldSchema>) -> Self {
        Self::with_locale(fields, Locale::default())
    }

    /// Build a schema with an explicit locale
    ///
    /// The locale lives exactly as long as the schema; nothing is
    /// configured process-wide.
    pub fn with_locale(fields: Vec<FieldSchema>, locale: Locale) -> Self {
        Self { fields, locale }
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    /// Validate an object against every field schema
    ///
    /// Fields absent from the object validate as null. Per field, rules run
    /// in declaration order and the first failure wins; other fields are
    /// still checked.
    pub fn validate(&self, value: &Value) -> Result<(), ErrorBag> {
        let mut errors = ErrorBag::new();

        for field in &self.fields {
            let field_value = value.get(&field.name).unwrap_or(&Value::Null);
            for rule in &field.rules {
                if let Err(message) = rule.check(field_value, &self.locale) {
                    errors.insert(field.name.clone(), message);
                    break;
                }
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
