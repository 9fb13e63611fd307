//! Entity ID - database-assigned 64-bit row identifier
//!
//! Every table keys its rows with a `BIGSERIAL`; the value handed back by
//! `INSERT ... RETURNING id` is wrapped here so ids of different tables can
//! not be confused with plain counters.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Database row identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EntityId(i64);

impl EntityId {
    /// Create a new EntityId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Ids issued by the database start at 1
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.0 > 0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, EntityIdParseError> {
        let id = s
            .parse::<i64>()
            .map_err(|_| EntityIdParseError::InvalidFormat)?;
        if id <= 0 {
            return Err(EntityIdParseError::NotPositive);
        }
        Ok(Self(id))
    }
}

/// Error when parsing an EntityId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EntityIdParseError {
    #[error("invalid id format")]
    InvalidFormat,

    #[error("id must be positive")]
    NotPositive,
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<EntityId> for i64 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl std::str::FromStr for EntityId {
    type Err = EntityIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityId::parse(s)
    }
}

impl Serialize for EntityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

// Clients send ids either as JSON numbers or as strings
impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct EntityIdVisitor;

        impl Visitor<'_> for EntityIdVisitor {
            type Value = EntityId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer representing an id")
            }

            fn visit_i64<E>(self, value: i64) -> Result<EntityId, E>
            where
                E: de::Error,
            {
                Ok(EntityId(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<EntityId, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(EntityId)
                    .map_err(|_| de::Error::custom("id out of range"))
            }

            fn visit_str<E>(self, value: &str) -> Result<EntityId, E>
            where
                E: de::Error,
            {
                value
                    .parse::<i64>()
                    .map(EntityId)
                    .map_err(|_| de::Error::custom("invalid id string"))
            }
        }

        deserializer.deserialize_any(EntityIdVisitor)
    }
}
