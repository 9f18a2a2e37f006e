//! Customer profile stored after sign-up

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;
use crate::signup::{Field, FormState};
use crate::validation::{format_phone_number, normalize_email, parse_date_of_birth};

/// Date of birth as picked on the sign-up screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOfBirth {
    pub month: String,
    pub day: String,
    pub year: String,
}

impl DateOfBirth {
    /// The calendar date, when the picked values form one
    pub fn to_date(&self) -> Option<NaiveDate> {
        parse_date_of_birth(&self.month, &self.day, &self.year)
    }
}

impl fmt::Display for DateOfBirth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {}", self.month, self.day, self.year)
    }
}

/// A registered customer's profile document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Stored in display form (`XXX-XXX-XXXX` when it has ten digits)
    pub phone_number: String,
    pub city: String,
    pub gender: String,
    pub date_of_birth: DateOfBirth,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Build a profile from a finished sign-up form
    pub fn from_form(id: UserId, form: &FormState) -> Self {
        Self {
            id,
            name: form.get(Field::Name).trim().to_string(),
            email: normalize_email(form.get(Field::Email)),
            phone_number: format_phone_number(form.get(Field::PhoneNumber).trim()),
            city: form.get(Field::City).trim().to_string(),
            gender: form.get(Field::Gender).to_string(),
            date_of_birth: DateOfBirth {
                month: form.get(Field::Month).to_string(),
                day: form.get(Field::Day).to_string(),
                year: form.get(Field::Year).to_string(),
            },
            created_at: Utc::now(),
        }
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}
