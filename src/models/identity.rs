//! Actor identity types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an actor (the current user, another user, or a
/// business profile).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(String);

impl ActorId {
    /// Creates a new actor ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ActorId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ActorId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Profile flavor of an actor.
///
/// Set once during profile setup and not changed afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    /// An individual person.
    #[default]
    Personal,
    /// An organization profile.
    Business,
}

impl ProfileKind {
    /// Returns the kind as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Business => "business",
        }
    }

    /// Parses a profile kind from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "personal" => Some(Self::Personal),
            "business" => Some(Self::Business),
            _ => None,
        }
    }

    /// Returns true for business profiles.
    #[must_use]
    pub const fn is_business(&self) -> bool {
        matches!(self, Self::Business)
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolved owner identity attached to a superpower or blik.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Stable actor identifier.
    pub id: ActorId,
    /// Display name.
    pub name: String,
    /// Avatar reference (URL or asset key).
    pub avatar: String,
    /// Profile flavor.
    pub kind: ProfileKind,
}

impl Owner {
    /// Creates a personal owner.
    #[must_use]
    pub fn personal(id: impl Into<ActorId>, name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: avatar.into(),
            kind: ProfileKind::Personal,
        }
    }

    /// Creates a business owner.
    #[must_use]
    pub fn business(id: impl Into<ActorId>, name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: avatar.into(),
            kind: ProfileKind::Business,
        }
    }
}
