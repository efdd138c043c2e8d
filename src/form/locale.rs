//! Localized validation messages
//!
//! The locale is an explicit value passed at schema construction; there is
//! no process-wide locale configuration. Message templates carry `{min}`,
//! `{max}` and `{values}` slots substituted at validation time.

/// Message templates for every rule outcome
#[derive(Debug, Clone)]
pub struct Locale {
    /// Missing or null required field
    pub required: String,
    /// Value of the wrong kind for the rule (not a string, not a number, ...)
    pub invalid: String,
    /// String shorter than `{min}` characters
    pub string_min: String,
    /// String longer than `{max}` characters
    pub string_max: String,
    /// Number below `{min}`
    pub number_min: String,
    /// Number above `{max}`
    pub number_max: String,
    /// Not a valid e-mail address
    pub email: String,
    /// Not a valid UUID
    pub uuid: String,
    /// Not one of the allowed `{values}`
    pub one_of: String,
    /// Not a date in the expected format
    pub date: String,
    /// Does not match the expected pattern
    pub pattern: String,
}

impl Default for Locale {
    /// German messages matching the application default
    fn default() -> Self {
        Self {
            required: "Dieses Feld ist ein Pflichtfeld".to_string(),
            invalid: "Bitte einen gültigen Wert eintragen.".to_string(),
            string_min: "Es müssen mindestens {min} Zeichen verwendet werden.".to_string(),
            string_max: "Es können maximal {max} Zeichen verwendet werden.".to_string(),
            number_min: "Der Wert muss mindestens {min} betragen.".to_string(),
            number_max: "Der Wert kann maximal {max} betragen.".to_string(),
            email: "Bitte eine gültige E-Mail Adresse eintragen.".to_string(),
            uuid: "Bitte einen gültigen Wert eintragen.".to_string(),
            one_of: "Bitte einen der folgenden Werte wählen: {values}".to_string(),
            date: "Bitte ein gültiges Datum eintragen.".to_string(),
            pattern: "Bitte einen gültigen Wert eintragen.".to_string(),
        }
    }
}

/// Substitute one `{slot}` in a message template
pub(crate) fn render(template: &str, slot: &str, value: &str) -> String {
    template.replace(&format!("{{{}}}", slot), value)
}
