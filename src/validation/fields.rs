//! Text field validators: email, phone number, name, city

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Check that `email` looks like `local@domain.tld`
///
/// Neither part may contain whitespace or a second `@`, and the domain part
/// must contain at least one `.` with something on both sides of it.
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Trimmed, lowercased email used as the account key
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Keep only the ASCII digits of `s`
pub fn strip_non_digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// True iff `phone_number` contains exactly ten digits, ignoring everything else
pub fn validate_phone_number(phone_number: &str) -> bool {
    strip_non_digits(phone_number).len() == 10
}

/// True iff the trimmed name has at least two characters
pub fn validate_name(name: &str) -> bool {
    name.trim().chars().count() >= 2
}

/// True iff the trimmed city has at least two characters
pub fn validate_city(city: &str) -> bool {
    city.trim().chars().count() >= 2
}

/// Format a ten-digit phone number as `XXX-XXX-XXXX`
///
/// Anything that does not strip down to exactly ten digits is returned as
/// given, not in its stripped form.
pub fn format_phone_number(phone_number: &str) -> String {
    let digits = strip_non_digits(phone_number);
    if digits.len() != 10 {
        return phone_number.to_string();
    }
    format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..])
}
