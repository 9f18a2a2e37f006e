//! Password rules and strength scoring

use std::fmt;

use serde::{Deserialize, Serialize};

/// Symbols that count towards a password's symbol requirement
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

fn is_symbol(c: char) -> bool {
    PASSWORD_SYMBOLS.contains(c)
}

/// Check a password against the sign-up rules
///
/// At least eight characters, at least one symbol from [`PASSWORD_SYMBOLS`],
/// and nothing but ASCII letters, digits and those symbols.
pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
        && password.chars().any(is_symbol)
        && password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || is_symbol(c))
}

/// Coarse password strength classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Lowercase label ("weak", "medium", "strong")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }

    /// Indicator colour for this strength
    pub fn color(&self) -> &'static str {
        password_strength_color(self.as_str())
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Score a password from 0 to 5, one point per satisfied check
pub fn password_score(password: &str) -> u8 {
    let checks = [
        password.chars().count() >= MIN_PASSWORD_LENGTH,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(is_symbol),
    ];
    checks.iter().filter(|&&passed| passed).count() as u8
}

/// Classify a password: score below 2 is weak, below 4 medium, otherwise strong
pub fn get_password_strength(password: &str) -> PasswordStrength {
    match password_score(password) {
        0 | 1 => PasswordStrength::Weak,
        2 | 3 => PasswordStrength::Medium,
        _ => PasswordStrength::Strong,
    }
}

/// Map a strength label to its indicator colour; unknown labels are grey
pub fn password_strength_color(strength: &str) -> &'static str {
    match strength {
        "weak" => "#FF6B6B",
        "medium" => "#FFA500",
        "strong" => "#4CAF50",
        _ => "#E0E0E0",
    }
}
