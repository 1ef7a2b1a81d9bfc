//! Per-field validation rules for the signup payload. The account service
//! applies these in a fixed order and short-circuits on the first failure.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;
use validator::ValidationError;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[\w\-.]+@([\w-]+\.)+[\w-]{2,4}$").expect("valid email pattern")
    })
}

/// Validates a display name: ASCII letters and spaces only.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if !name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        return Err(ValidationError::new("name_invalid_characters"));
    }
    Ok(())
}

/// Structural email check; deliverability is proven by the verification
/// email, not here.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !email_regex().is_match(email) {
        return Err(ValidationError::new("email_invalid"));
    }
    Ok(())
}

/// Parses a `YYYY-MM-DD` date of birth.
pub fn parse_date_of_birth(date_of_birth: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(date_of_birth, "%Y-%m-%d")
        .map_err(|_| ValidationError::new("date_of_birth_invalid"))
}

/// Minimum password length of 8 characters.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.len() < 8 {
        return Err(ValidationError::new("password_too_short"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rejects_digits_and_punctuation() {
        assert!(validate_name("Jane Doe").is_ok());
        assert!(validate_name("Jane D0e").is_err());
        assert!(validate_name("Jane-Doe").is_err());
    }

    #[test]
    fn email_requires_a_structural_match() {
        assert!(validate_email("jane@x.com").is_ok());
        assert!(validate_email("jane.doe@mail.example.org").is_ok());
        assert!(validate_email("jane@").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("jane@x.toolongtld").is_err());
    }

    #[test]
    fn date_of_birth_must_be_a_calendar_date() {
        assert_eq!(
            parse_date_of_birth("1990-01-01").unwrap(),
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
        );
        assert!(parse_date_of_birth("1990-02-30").is_err());
        assert!(parse_date_of_birth("yesterday").is_err());
    }

    #[test]
    fn password_minimum_length_is_eight() {
        assert!(validate_password("longenough1").is_ok());
        assert!(validate_password("short12").is_err());
    }
}
