//! Primary Key System - Identifier values read from wrapped records
//!
//! Integer keys are reported as-is. Structured identifiers (UUIDs) are
//! reported in their canonical string form so callers can compare and print
//! them without knowing the field's type.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::record::{FieldKind, FieldValue};

/// Primary key value of a wrapped record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimaryKey {
    /// Integer primary key, widened to i64
    Integer(i64),
    /// UUID (canonical hyphenated form) or text primary key
    Text(String),
}

impl std::fmt::Display for PrimaryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrimaryKey::Integer(id) => write!(f, "{}", id),
            PrimaryKey::Text(id) => write!(f, "{}", id),
        }
    }
}

impl PrimaryKey {
    /// Convert a raw field value according to the field's declared kind
    pub(crate) fn from_field(kind: FieldKind, value: FieldValue) -> Option<Self> {
        match (kind, value) {
            (_, FieldValue::Null) => None,
            (FieldKind::Uuid, FieldValue::Uuid(id)) => Some(PrimaryKey::Text(id.to_string())),
            (_, FieldValue::Int(id)) => Some(PrimaryKey::Integer(id)),
            (_, FieldValue::Text(id)) => Some(PrimaryKey::Text(id)),
            (_, other) => Some(PrimaryKey::Text(other.to_string())),
        }
    }

    /// Extract as i64 if this is an Integer primary key
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            PrimaryKey::Integer(id) => Some(*id),
            _ => None,
        }
    }

    /// Extract the string form if this is a text or UUID primary key
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PrimaryKey::Text(id) => Some(id),
            _ => None,
        }
    }

    /// Parse back into a UUID if this key holds one
    pub fn as_uuid(&self) -> Option<Uuid> {
        self.as_str().and_then(|id| Uuid::parse_str(id).ok())
    }

    /// Check if this is a valid (non-zero) primary key
    pub fn is_valid(&self) -> bool {
        match self {
            PrimaryKey::Integer(id) => *id != 0,
            PrimaryKey::Text(id) => match Uuid::parse_str(id) {
                Ok(uuid) => !uuid.is_nil(),
                Err(_) => !id.is_empty(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_key_display() {
        let int_key = PrimaryKey::Integer(123);
        assert_eq!(format!("{}", int_key), "123");

        let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let uuid_key = PrimaryKey::from_field(FieldKind::Uuid, FieldValue::Uuid(uuid)).unwrap();
        assert_eq!(
            format!("{}", uuid_key),
            "550e8400-e29b-41d4-a716-446655440000"
        );
        assert_eq!(uuid_key.as_uuid(), Some(uuid));
    }

    #[test]
    fn test_primary_key_from_field() {
        assert_eq!(
            PrimaryKey::from_field(FieldKind::Int32, FieldValue::Int(7)),
            Some(PrimaryKey::Integer(7))
        );
        assert_eq!(
            PrimaryKey::from_field(FieldKind::Text, FieldValue::Text("sku-1".to_string())),
            Some(PrimaryKey::Text("sku-1".to_string()))
        );
        assert_eq!(PrimaryKey::from_field(FieldKind::Uuid, FieldValue::Null), None);
    }

    #[test]
    fn test_primary_key_validation() {
        assert!(!PrimaryKey::Integer(0).is_valid());
        assert!(PrimaryKey::Integer(1).is_valid());

        assert!(!PrimaryKey::Text(Uuid::nil().to_string()).is_valid());
        assert!(PrimaryKey::Text(Uuid::new_v4().to_string()).is_valid());

        assert!(!PrimaryKey::Text(String::new()).is_valid());
        assert!(PrimaryKey::Text("sku-1".to_string()).is_valid());
    }

    #[test]
    fn test_primary_key_accessors() {
        assert_eq!(PrimaryKey::Integer(9).as_i64(), Some(9));
        assert_eq!(PrimaryKey::Integer(9).as_str(), None);
        assert_eq!(PrimaryKey::Text("a".to_string()).as_str(), Some("a"));
        assert_eq!(PrimaryKey::Text("a".to_string()).as_uuid(), None);
    }
}
