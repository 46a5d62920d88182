//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a `ProductId` where a `ListingId` is expected.
//!
//! The backend serializes identifiers as JSON numbers in some endpoints and
//! as strings in others, so deserialization accepts both and normalizes to
//! the string form.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<i64> for $name {
            fn from(n: i64) -> Self {
                Self(n.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct IdVisitor;

                impl<'de> Visitor<'de> for IdVisitor {
                    type Value = String;

                    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        f.write_str("a string or integer identifier")
                    }

                    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
                        Ok(v.to_string())
                    }

                    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
                        Ok(v)
                    }

                    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
                        Ok(v.to_string())
                    }

                    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
                        Ok(v.to_string())
                    }
                }

                deserializer.deserialize_any(IdVisitor).map(Self)
            }
        }
    };
}

// Define all ID types
define_id!(ProductId);
define_id!(ListingId);
define_id!(SellerId);
define_id!(CategoryId);
define_id!(CartItemId);
define_id!(ReviewId);
define_id!(UserId);
define_id!(AddressId);
define_id!(PassportId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ListingId::new("listing-12");
        assert_eq!(id.as_str(), "listing-12");
    }

    #[test]
    fn test_id_from_string() {
        let id: ProductId = "42".into();
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn test_id_display() {
        let id = SellerId::new("seller-7");
        assert_eq!(format!("{}", id), "seller-7");
    }

    #[test]
    fn test_id_equality() {
        let id1 = ProductId::new("same");
        let id2 = ProductId::new("same");
        let id3 = ProductId::new("different");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_deserialize_from_number() {
        let id: ListingId = serde_json::from_str("42").unwrap();
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn test_deserialize_from_string() {
        let id: ListingId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn test_serialize_as_string() {
        let id = ProductId::from(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
    }
}
