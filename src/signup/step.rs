//! Form fields and step definitions for the sign-up flow

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Keys of the sign-up form
///
/// `Month`, `Day` and `Year` together make up the date of birth;
/// `DateOfBirth` carries no value of its own and is only used as the step's
/// field and error key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    PhoneNumber,
    City,
    Gender,
    Month,
    Day,
    Year,
    DateOfBirth,
}

impl Field {
    /// Every field that holds a value in [`FormState`](super::FormState)
    pub const VALUE_FIELDS: [Field; 8] = [
        Field::Name,
        Field::Email,
        Field::PhoneNumber,
        Field::City,
        Field::Gender,
        Field::Month,
        Field::Day,
        Field::Year,
    ];

    /// The camelCase key of this field
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
            Self::City => "city",
            Self::Gender => "gender",
            Self::Month => "month",
            Self::Day => "day",
            Self::Year => "year",
            Self::DateOfBirth => "dateOfBirth",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Error returned when parsing an unknown field key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown form field: {}", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::VALUE_FIELDS
            .iter()
            .chain(std::iter::once(&Field::DateOfBirth))
            .find(|f| f.key() == s)
            .copied()
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// The check a step runs when the user tries to move past it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StepRule {
    Name,
    Email,
    PhoneNumber,
    City,
    Gender,
    DateOfBirth,
}

/// One page of a multi-step form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Field this page collects
    pub field: Field,
    /// Heading shown above the input
    pub title: &'static str,
    /// Hint shown in the empty input
    pub placeholder: &'static str,
    /// Validation run on "next"
    pub rule: StepRule,
}

impl Step {
    /// Define a step
    pub const fn new(
        field: Field,
        title: &'static str,
        placeholder: &'static str,
        rule: StepRule,
    ) -> Self {
        Self {
            field,
            title,
            placeholder,
            rule,
        }
    }
}

/// Selectable genders on the gender step
pub const GENDERS: [&str; 2] = ["Male", "Female"];

/// The sign-up steps in presentation order
pub const SIGNUP_STEPS: [Step; 6] = [
    Step::new(Field::Name, "Enter Your Name", "Name", StepRule::Name),
    Step::new(Field::Email, "Enter Your Email", "Email", StepRule::Email),
    Step::new(
        Field::PhoneNumber,
        "Enter Your Phone Number",
        "Phone",
        StepRule::PhoneNumber,
    ),
    Step::new(Field::City, "City Of Residence", "Address", StepRule::City),
    Step::new(Field::Gender, "Select Your Gender", "Gender", StepRule::Gender),
    Step::new(
        Field::DateOfBirth,
        "Date Of Birth",
        "Date of Birth",
        StepRule::DateOfBirth,
    ),
];

/// The sign-up steps as an owned sequence
pub fn signup_steps() -> Vec<Step> {
    SIGNUP_STEPS.to_vec()
}
