//! Field-level validation helpers shared by the domain and HTTP layers.

use std::borrow::Cow;
use std::collections::BTreeMap;

use validator::{ValidationError, ValidationErrors};

/// Field name → messages, in stable key order.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Flattens `validator` errors into the map returned to API clients.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

/// Builds a `ValidationError` carrying a client-facing message.
pub fn rule_violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Phone-like format: optional leading `+`, digits and the separators
/// space, `-`, `.`, `(`, `)`, with an optional `x`/`ext`/`ext.` extension.
pub fn is_phone_number(value: &str) -> bool {
    let value = value.trim();
    let (number, extension) = split_extension(value);

    if let Some(ext) = extension {
        if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
    }

    let number = number.trim_end();
    let number = number.strip_prefix('+').unwrap_or(number);

    let mut digits = 0;
    for c in number.chars() {
        match c {
            '0'..='9' => digits += 1,
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => return false,
        }
    }
    digits > 0
}

fn split_extension(value: &str) -> (&str, Option<&str>) {
    let lower = value.to_ascii_lowercase();
    for marker in ["ext.", "ext", "x"] {
        if let Some(pos) = lower.rfind(marker) {
            let ext = value[pos + marker.len()..].trim_start();
            return (&value[..pos], Some(ext));
        }
    }
    (value, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_phone_formats() {
        for phone in [
            "555-0100",
            "+1 (555) 010-0100",
            "555.010.0100",
            "+44 20 7946 0958",
            "5550100 x123",
            "555-0100 ext. 42",
            "555-0100ext7",
        ] {
            assert!(is_phone_number(phone), "{phone} should be accepted");
        }
    }

    #[test]
    fn rejects_non_phone_values() {
        for phone in ["", "   ", "call me", "555-0100 x", "++1 555", "555_0100", "()-", "555 ext abc"] {
            assert!(!is_phone_number(phone), "{phone} should be rejected");
        }
    }

    #[test]
    fn blank_detects_whitespace_only() {
        assert!(is_blank(""));
        assert!(is_blank(" \t"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn field_errors_collects_messages_per_field() {
        let mut errors = ValidationErrors::new();
        errors.add("FirstName", rule_violation("required", "First name is required"));
        errors.add("Email", rule_violation("email", "Invalid email address format"));

        let map = field_errors(&errors);
        assert_eq!(map["FirstName"], vec!["First name is required"]);
        assert_eq!(map["Email"], vec!["Invalid email address format"]);
        assert_eq!(map.len(), 2);
    }
}
