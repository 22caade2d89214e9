//! Record validation
//!
//! Pure parsing and validation: raw text in, structured record or rejection
//! reason out. Checks run in field order and the first failure wins; errors
//! are not accumulated.

use thiserror::Error;

/// Expected number of digits in a phone number
pub const PHONE_DIGITS: usize = 11;

/// Upper bound of a plausible human age
pub const MAX_AGE: u8 = 150;

/// Why a submitted message was not persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("malformed input: expected 4 comma-separated fields")]
    MalformedInput,

    #[error("invalid name: must not be empty")]
    InvalidName,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid phone: expected exactly 11 digits")]
    InvalidPhone,

    #[error("invalid age: expected an integer between 0 and 150")]
    InvalidAge,
}

/// One validated customer submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Customer name (non-empty, trimmed)
    pub name: String,

    /// Email address (trimmed)
    pub email: String,

    /// Phone number (exactly [`PHONE_DIGITS`] ASCII digits)
    pub phone: String,

    /// Age in years (0..=[`MAX_AGE`])
    pub age: u8,
}

impl Record {
    /// Parse and validate one raw message line
    ///
    /// Field checks run in order: name, email, phone, age. The first failing
    /// check decides the rejection reason.
    pub fn parse(raw: &str) -> Result<Self, Rejection> {
        let fields: Vec<&str> = raw.split(',').collect();
        if fields.len() != 4 {
            return Err(Rejection::MalformedInput);
        }

        let name = fields[0].trim();
        if name.is_empty() {
            return Err(Rejection::InvalidName);
        }

        let email = fields[1].trim();
        if !is_valid_email(email) {
            return Err(Rejection::InvalidEmail);
        }

        let phone = fields[2].trim();
        if !is_valid_phone(phone) {
            return Err(Rejection::InvalidPhone);
        }

        let age = parse_age(fields[3].trim()).ok_or(Rejection::InvalidAge)?;

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            age,
        })
    }

    /// Serialize in the canonical line format `name,email,phone,age`
    ///
    /// Matches the field order [`Record::parse`] expects, so a serialized
    /// record parses back to itself.
    pub fn to_line(&self) -> String {
        format!("{},{},{},{}", self.name, self.email, self.phone, self.age)
    }
}

/// Exactly one "@", non-empty on both sides, domain contains at least one "."
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && domain.contains('.')
        }
        _ => false,
    }
}

/// Entirely ASCII digits, exactly [`PHONE_DIGITS`] of them
fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_DIGITS && phone.chars().all(|c| c.is_ascii_digit())
}

/// Non-negative integer within the plausible bound
fn parse_age(raw: &str) -> Option<u8> {
    let age = raw.parse::<i64>().ok()?;
    if (0..=MAX_AGE as i64).contains(&age) {
        Some(age as u8)
    } else {
        None
    }
}
