//! Validator CLI commands
//!
//! Exposes the standalone field validators. Each command prints its verdict
//! and reports validity back so `main` can set the exit status.

use clap::Subcommand;

use crate::error::ShopResult;
use crate::validation::{
    format_phone_number, get_password_strength, validate_city, validate_date_of_birth,
    validate_email, validate_name, validate_password, validate_phone_number,
};

/// Validate subcommands
#[derive(Subcommand)]
pub enum ValidateCommands {
    /// Check an email address
    Email { value: String },

    /// Check a password and report its strength
    Password {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Check a phone number (10 digits, separators ignored)
    Phone {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Check a name (at least 2 characters)
    Name { value: String },

    /// Check a city (at least 2 characters)
    City { value: String },

    /// Check a date of birth, e.g. `dob Dec 10 1985`
    Dob {
        /// Month label (Jan, Feb, March, April, May, June, July, August, Sept, Oct, Nov, Dec)
        month: String,
        day: String,
        year: String,
    },

    /// Print a phone number as XXX-XXX-XXXX
    #[command(name = "format-phone")]
    FormatPhone {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

/// Handle a validate command, returning whether the input was valid
pub fn handle_validate_command(cmd: ValidateCommands) -> ShopResult<bool> {
    let valid = match cmd {
        ValidateCommands::Email { value } => report(validate_email(&value)),
        ValidateCommands::Password { value } => {
            let valid = report(validate_password(&value));
            let strength = get_password_strength(&value);
            println!("strength: {} ({})", strength, strength.color());
            valid
        }
        ValidateCommands::Phone { value } => report(validate_phone_number(&value)),
        ValidateCommands::Name { value } => report(validate_name(&value)),
        ValidateCommands::City { value } => report(validate_city(&value)),
        ValidateCommands::Dob { month, day, year } => {
            report(validate_date_of_birth(&month, &day, &year))
        }
        ValidateCommands::FormatPhone { value } => {
            println!("{}", format_phone_number(&value));
            true
        }
    };

    Ok(valid)
}

fn report(valid: bool) -> bool {
    println!("{}", if valid { "valid" } else { "invalid" });
    valid
}
