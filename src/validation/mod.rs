//! Standalone field validators
//!
//! Pure functions with no shared state. The sign-up engine uses some of them
//! for its step rules; other screens (password entry, profile display) use
//! the rest directly.

pub mod date;
pub mod fields;
pub mod password;

pub use date::{
    month_index, parse_date_of_birth, picker_years, validate_date_of_birth,
    validate_date_of_birth_on, MONTHS, PICKER_DAYS, PICKER_YEAR_SPAN,
};
pub use fields::{
    format_phone_number, normalize_email, strip_non_digits, validate_city, validate_email,
    validate_name, validate_phone_number,
};
pub use password::{
    get_password_strength, password_score, password_strength_color, validate_password,
    PasswordStrength, PASSWORD_SYMBOLS,
};
