//! Contact domain entity

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use validator::{Validate, ValidateEmail, ValidationErrors};

use crate::shared::validations::{is_blank, is_phone_number, rule_violation};

/// Maximum length, in characters, of the first and last name.
pub const NAME_MAX_LENGTH: usize = 50;

/// A stored contact.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    /// Server-assigned identifier
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    /// Set once on insert
    pub created_at: DateTime<Utc>,
    /// Set on every update, `None` until the first one
    pub updated_at: Option<DateTime<Utc>>,
}

impl Contact {
    /// Builds a freshly inserted contact.
    pub fn new(id: i32, input: ContactInput, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            phone_number: input.phone_number,
            email: input.email,
            created_at,
            updated_at: None,
        }
    }

    /// Overwrites the writable fields. `id` and `created_at` never change.
    pub fn apply(&mut self, input: ContactInput, updated_at: DateTime<Utc>) {
        self.first_name = input.first_name;
        self.last_name = input.last_name;
        self.phone_number = input.phone_number;
        self.email = input.email;
        self.updated_at = Some(updated_at);
    }

    /// Listing order: last name, then first name.
    pub fn listing_order(a: &Contact, b: &Contact) -> Ordering {
        a.last_name
            .cmp(&b.last_name)
            .then_with(|| a.first_name.cmp(&b.first_name))
    }
}

/// The client-writable fields of a contact, used for create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInput {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
}

impl Validate for ContactInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        check_name(
            &mut errors,
            "FirstName",
            &self.first_name,
            "First name is required",
            "First name cannot be longer than 50 characters",
        );
        check_name(
            &mut errors,
            "LastName",
            &self.last_name,
            "Last name is required",
            "Last name cannot be longer than 50 characters",
        );

        if is_blank(&self.phone_number) {
            errors.add(
                "PhoneNumber",
                rule_violation("required", "Phone number is required"),
            );
        } else if !is_phone_number(&self.phone_number) {
            errors.add(
                "PhoneNumber",
                rule_violation("phone", "Invalid phone number format"),
            );
        }

        if is_blank(&self.email) {
            errors.add("Email", rule_violation("required", "Email is required"));
        } else if !self.email.validate_email() {
            errors.add(
                "Email",
                rule_violation("email", "Invalid email address format"),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn check_name(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    required: &'static str,
    too_long: &'static str,
) {
    if is_blank(value) {
        errors.add(field, rule_violation("required", required));
    }
    if value.chars().count() > NAME_MAX_LENGTH {
        errors.add(field, rule_violation("length", too_long));
    }
}
