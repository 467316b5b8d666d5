//! Strongly-typed value objects and normalization helpers used by domain
//! entities, so that once a value reaches the domain layer it can be
//! treated as trusted.
use std::str::FromStr;

use phonenumber::{Mode, parse};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use uuid::Uuid;
use validator::ValidateEmail;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Phone number did not meet expected format.
    #[error("invalid phone number")]
    InvalidPhone,
    /// Provided uuid failed format validation.
    #[error("invalid uuid value")]
    InvalidUuid,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Normalizes and validates an email string.
pub fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Normalizes a phone number string to E.164 format.
pub fn normalize_phone_to_e164(value: &str) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    let parsed = parse(None, trimmed).map_err(|_| TypeConstraintError::InvalidPhone)?;
    Ok(parsed.format().mode(Mode::E164).to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Public identifier exposed by the API instead of the internal row id.
pub struct PublicId(Uuid);

impl PublicId {
    /// Generate a new random public ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse from raw bytes (DB boundary)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TypeConstraintError> {
        Ok(Self(
            Uuid::from_slice(bytes).map_err(|_| TypeConstraintError::InvalidUuid)?,
        ))
    }

    /// Convert to raw bytes (DB boundary)
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Display for PublicId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PublicId {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(
            Uuid::parse_str(s).map_err(|_| TypeConstraintError::InvalidUuid)?,
        ))
    }
}

impl Default for PublicId {
    fn default() -> Self {
        Self::new()
    }
}

/// Entity reference as the frontend sends it: either the internal numeric id
/// (possibly as a string) or the public UUID. Routes accept both and resolve
/// to the internal id before touching the repository.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityRef {
    Id(i32),
    Public(PublicId),
}

impl FromStr for EntityRef {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        if let Ok(id) = trimmed.parse::<i32>() {
            if id > 0 {
                return Ok(Self::Id(id));
            }
            return Err(TypeConstraintError::NonPositiveId);
        }
        trimmed.parse::<PublicId>().map(Self::Public)
    }
}

impl From<i32> for EntityRef {
    fn from(value: i32) -> Self {
        Self::Id(value)
    }
}

impl Display for EntityRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Public(public_id) => write!(f, "{public_id}"),
        }
    }
}

impl<'de> Deserialize<'de> for EntityRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntityRefVisitor;

        impl Visitor<'_> for EntityRefVisitor {
            type Value = EntityRef;

            fn expecting(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("a positive integer id or a UUID string")
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                let id = i32::try_from(value).map_err(|_| E::custom("id out of range"))?;
                if id > 0 {
                    Ok(EntityRef::Id(id))
                } else {
                    Err(E::custom(TypeConstraintError::NonPositiveId))
                }
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                let id = i32::try_from(value).map_err(|_| E::custom("id out of range"))?;
                if id > 0 {
                    Ok(EntityRef::Id(id))
                } else {
                    Err(E::custom(TypeConstraintError::NonPositiveId))
                }
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                value.parse::<EntityRef>().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(EntityRefVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_normalized() {
        assert_eq!(
            normalize_email("  John.Doe@Example.COM ").unwrap(),
            "john.doe@example.com"
        );
        assert_eq!(
            normalize_email("not-an-email"),
            Err(TypeConstraintError::InvalidEmail)
        );
    }

    #[test]
    fn phone_number_normalizes_to_e164() {
        assert_eq!(
            normalize_phone_to_e164("+1 (415) 555-2671").unwrap(),
            "+14155552671"
        );
        assert_eq!(
            normalize_phone_to_e164("   "),
            Err(TypeConstraintError::EmptyString)
        );
    }

    #[test]
    fn public_id_roundtrips_through_bytes() {
        let id = PublicId::new();
        let parsed = PublicId::from_bytes(id.as_bytes()).unwrap();
        assert_eq!(id, parsed);
        assert!(PublicId::from_bytes(&[1, 2, 3]).is_err());
    }

    #[test]
    fn entity_ref_parses_numeric_and_uuid() {
        assert_eq!("42".parse::<EntityRef>().unwrap(), EntityRef::Id(42));

        let uuid = "550e8400-e29b-41d4-a716-446655440000";
        match uuid.parse::<EntityRef>().unwrap() {
            EntityRef::Public(public_id) => assert_eq!(public_id.to_string(), uuid),
            other => panic!("expected public ref, got {other:?}"),
        }

        assert!("0".parse::<EntityRef>().is_err());
        assert!("garbage".parse::<EntityRef>().is_err());
    }

    #[test]
    fn entity_ref_deserializes_from_json_number_and_string() {
        let from_number: EntityRef = serde_json::from_str("7").unwrap();
        assert_eq!(from_number, EntityRef::Id(7));

        let from_string: EntityRef = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(from_string, EntityRef::Id(7));

        let from_uuid: EntityRef =
            serde_json::from_str("\"550e8400-e29b-41d4-a716-446655440000\"").unwrap();
        assert!(matches!(from_uuid, EntityRef::Public(_)));

        assert!(serde_json::from_str::<EntityRef>("0").is_err());
    }
}
