//! Client-side validation results.
//!
//! Errors are keyed by form field and carry a translation key, so the UI can
//! render the message inline under the offending input in either language.

use std::collections::BTreeMap;

pub const MSG_REQUIRED: &str = "validation.required";
pub const MSG_POSITIVE: &str = "validation.positive";
pub const MSG_NON_NEGATIVE: &str = "validation.non_negative";
pub const MSG_INVALID_EMAIL: &str = "validation.invalid_email";
pub const MSG_DATE_RANGE: &str = "validation.date_range";

#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("validation failed for {} field(s)", .0.len())]
pub struct ValidationErrors(BTreeMap<String, &'static str>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error; the first error reported for a field wins.
    pub fn add(&mut self, field: impl Into<String>, message_key: &'static str) {
        self.0.entry(field.into()).or_insert(message_key);
    }

    pub fn require_text(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, MSG_REQUIRED);
        }
    }

    pub fn require<T>(&mut self, field: &str, value: &Option<T>) {
        if value.is_none() {
            self.add(field, MSG_REQUIRED);
        }
    }

    pub fn require_email(&mut self, field: &str, value: &Option<String>) {
        if let Some(v) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            let valid = v
                .split_once('@')
                .map(|(user, host)| !user.is_empty() && host.contains('.') && !host.ends_with('.'))
                .unwrap_or(false);
            if !valid {
                self.add(field, MSG_INVALID_EMAIL);
            }
        }
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &'static str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Field key of a line-level error, e.g. `details.2.quantity`.
pub fn line_field(collection: &str, index: usize, field: &str) -> String {
    format!("{collection}.{index}.{field}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_error_per_field_wins() {
        let mut errors = ValidationErrors::new();
        errors.add("name", MSG_REQUIRED);
        errors.add("name", MSG_POSITIVE);
        assert_eq!(errors.get("name"), Some(MSG_REQUIRED));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn blank_text_is_required() {
        let mut errors = ValidationErrors::new();
        errors.require_text("name", "   ");
        errors.require_text("code", "A-1");
        assert_eq!(errors.get("name"), Some(MSG_REQUIRED));
        assert!(errors.get("code").is_none());
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn email_is_checked_only_when_present() {
        let mut errors = ValidationErrors::new();
        errors.require_email("email", &None);
        errors.require_email("email", &Some(String::new()));
        assert!(errors.is_empty());

        errors.require_email("email", &Some("nobody@localhost".to_string()));
        assert_eq!(errors.get("email"), Some(MSG_INVALID_EMAIL));

        let mut ok = ValidationErrors::new();
        ok.require_email("email", &Some("buyer@example.com".to_string()));
        assert!(ok.into_result().is_ok());
    }
}
