//! Entity identity - prefixed ULID identifiers
//!
//! Every record gets an ID of the form `PREFIX-ULID` (e.g. `PRJ-01J9...`).
//! The prefix makes IDs self-describing on the command line and in audit
//! output; the ULID part keeps them sortable by creation time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Entity type prefixes used in IDs and directory layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityPrefix {
    /// Project (`PRJ-`)
    Prj,
    /// Engineer (`ENG-`)
    Eng,
    /// Engineer request (`REQ-`)
    Req,
    /// Audit log entry (`AUD-`)
    Aud,
}

impl EntityPrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPrefix::Prj => "PRJ",
            EntityPrefix::Eng => "ENG",
            EntityPrefix::Req => "REQ",
            EntityPrefix::Aud => "AUD",
        }
    }

    /// Workspace directory where entities of this type live
    pub fn directory(&self) -> &'static str {
        match self {
            EntityPrefix::Prj => "projects",
            EntityPrefix::Eng => "engineers",
            EntityPrefix::Req => "requests",
            EntityPrefix::Aud => "audit",
        }
    }

    pub fn all() -> [EntityPrefix; 4] {
        [
            EntityPrefix::Prj,
            EntityPrefix::Eng,
            EntityPrefix::Req,
            EntityPrefix::Aud,
        ]
    }
}

impl std::fmt::Display for EntityPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EntityPrefix {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PRJ" => Ok(EntityPrefix::Prj),
            "ENG" => Ok(EntityPrefix::Eng),
            "REQ" => Ok(EntityPrefix::Req),
            "AUD" => Ok(EntityPrefix::Aud),
            _ => Err(IdParseError::UnknownPrefix(s.to_string())),
        }
    }
}

/// Errors from parsing entity ID strings
#[derive(Debug, Error)]
pub enum IdParseError {
    #[error("Unknown entity prefix: {0}")]
    UnknownPrefix(String),

    #[error("Malformed entity ID: {0} (expected PREFIX-ULID)")]
    Malformed(String),
}

/// A typed entity identifier (`PREFIX-ULID`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntityId(String);

// IDs are validated on the way in, so a corrupt record surfaces as a parse
// error naming the file instead of loading under the wrong prefix
impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        EntityId::parse(&raw).map_err(serde::de::Error::custom)
    }
}

impl EntityId {
    /// Generate a fresh ID for the given entity type
    pub fn new(prefix: EntityPrefix) -> Self {
        Self(format!("{}-{}", prefix.as_str(), ulid::Ulid::new()))
    }

    /// Parse and validate an ID string
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        let (prefix, rest) = s
            .split_once('-')
            .ok_or_else(|| IdParseError::Malformed(s.to_string()))?;
        prefix.parse::<EntityPrefix>()?;
        if rest.len() != 26 {
            return Err(IdParseError::Malformed(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    pub fn prefix(&self) -> EntityPrefix {
        // IDs are validated at construction and on deserialize, so the
        // prefix is always present and known
        self.0
            .split('-')
            .next()
            .and_then(|p| p.parse().ok())
            .unwrap_or(EntityPrefix::Prj)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form for display (prefix plus first 8 ULID chars)
    pub fn short(&self) -> String {
        match self.0.split_once('-') {
            Some((prefix, rest)) if rest.len() > 8 => format!("{}-{}", prefix, &rest[..8]),
            _ => self.0.clone(),
        }
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
