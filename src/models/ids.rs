//! Strongly-typed ID wrappers for all entity types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse an ID from a full UUID string
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(Uuid::parse_str(s)?))
            }

            /// Document key used when storing this entity through a backend
            pub fn key(&self) -> String {
                self.0.to_string()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(UserId, "usr-");
define_id!(CategoryId, "cat-");
define_id!(SubCategoryId, "sub-");
define_id!(ItemId, "itm-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = CategoryId::new();
        let display = id.to_string();
        assert!(display.starts_with("cat-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_key_is_full_uuid() {
        let id = UserId::new();
        assert_eq!(id.key(), id.as_uuid().to_string());
        assert_eq!(UserId::parse(&id.key()).unwrap(), id);
    }

    #[test]
    fn test_from_str_accepts_prefix() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let plain: ItemId = uuid_str.parse().unwrap();
        let prefixed: ItemId = format!("itm-{}", uuid_str).parse().unwrap();
        assert_eq!(plain, prefixed);
    }

    #[test]
    fn test_id_serialization() {
        let id = SubCategoryId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: SubCategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
