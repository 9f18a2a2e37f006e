//! Collected values, validation messages and the inbound seed

use std::collections::BTreeMap;

use serde::Serialize;
use zeroize::Zeroizing;

use super::step::Field;

/// Values entered so far, keyed by field
///
/// Every value field has an entry from construction onward, empty until the
/// user edits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormState {
    values: BTreeMap<Field, String>,
}

impl FormState {
    /// A form with every value field present and empty
    pub fn new() -> Self {
        Self {
            values: Field::VALUE_FIELDS
                .iter()
                .map(|f| (*f, String::new()))
                .collect(),
        }
    }

    /// The current value of a field ("" if never set)
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Replace the value of a field
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Whether the field has an entry (empty or not)
    pub fn contains(&self, field: Field) -> bool {
        self.values.contains_key(&field)
    }

    /// Iterate over (field, value) pairs in field order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.values.iter().map(|(f, v)| (*f, v.as_str()))
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Validation messages for the step last validated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap {
    messages: BTreeMap<Field, String>,
}

impl ErrorMap {
    /// An empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// The message for a field, if one is set and non-empty
    pub fn get(&self, field: Field) -> Option<&str> {
        self.messages
            .get(&field)
            .map(String::as_str)
            .filter(|m| !m.is_empty())
    }

    /// Whether the field currently counts as valid
    pub fn is_valid(&self, field: Field) -> bool {
        self.get(field).is_none()
    }

    /// Record a message for a field
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.messages.insert(field, message.into());
    }

    /// Drop the message for a field; returns whether one was set
    pub fn clear(&mut self, field: Field) -> bool {
        self.messages.remove(&field).is_some()
    }

    /// True when no field has a non-empty message
    pub fn is_empty(&self) -> bool {
        self.messages.values().all(|m| m.is_empty())
    }

    /// Number of fields with a message
    pub fn len(&self) -> usize {
        self.messages.values().filter(|m| !m.is_empty()).count()
    }

    /// Iterate over (field, message) pairs with non-empty messages
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.messages
            .iter()
            .filter(|(_, m)| !m.is_empty())
            .map(|(f, m)| (*f, m.as_str()))
    }
}

/// Values carried into the flow from the previous screen
///
/// The password is opaque to the flow; it is kept only so the caller can
/// create the account once the last step passes.
#[derive(Debug, Clone, Default)]
pub struct SignupSeed {
    pub email: Option<String>,
    pub password: Option<Zeroizing<String>>,
}

impl SignupSeed {
    /// A seed with both values set
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(Zeroizing::new(password.into())),
        }
    }
}
