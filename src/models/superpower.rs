//! Superpower types and the resolved, type-tagged record.

use super::{Owner, ProfileKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category bucket assigned to superpowers of entities that do not carry
/// full categorization data (other users viewed from their profiles).
pub const DEFAULT_CATEGORY: &str = "Flow";

/// Energy threshold above which a superpower trends up.
const TREND_UP_THRESHOLD: u8 = 80;

/// Energy threshold below which a superpower trends down.
const TREND_DOWN_THRESHOLD: u8 = 40;

/// Direction a superpower's energy is trending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Energy above 80.
    Up,
    /// Energy below 40.
    Down,
    /// Energy in the stable band.
    Stable,
}

impl Trend {
    /// Derives the trend from an energy value.
    #[must_use]
    pub const fn from_energy(energy: u8) -> Self {
        if energy > TREND_UP_THRESHOLD {
            Self::Up
        } else if energy < TREND_DOWN_THRESHOLD {
            Self::Down
        } else {
            Self::Stable
        }
    }

    /// Returns the trend as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Stable => "stable",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A superpower entry as carried on an entity's own list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperpowerSummary {
    /// Display name, the lookup key for resolution.
    pub name: String,
    /// Emoji shown alongside the name.
    pub emoji: String,
    /// Accumulated recognition score.
    pub bliks: u32,
    /// Current energy, clamped to 0-100.
    pub energy: u8,
    /// Category label, if the owning entity carries categorization data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl SuperpowerSummary {
    /// Creates a new summary with energy clamped to 0-100.
    #[must_use]
    pub fn new(name: impl Into<String>, emoji: impl Into<String>, bliks: u32, energy: u8) -> Self {
        Self {
            name: name.into(),
            emoji: emoji.into(),
            bliks,
            energy: energy.min(100),
            category: None,
        }
    }

    /// Sets the category label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Which flavor a resolved superpower carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuperpowerKind {
    /// Owned by an individual.
    Personal,
    /// Owned by an organization profile.
    Business,
}

impl SuperpowerKind {
    /// Returns the kind as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Business => "business",
        }
    }
}

impl fmt::Display for SuperpowerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalized stats shared by both resolved variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperpowerRecord {
    /// Display name.
    pub name: String,
    /// Emoji shown alongside the name.
    pub emoji: String,
    /// Accumulated recognition score.
    pub bliks: u32,
    /// Current energy, 0-100.
    pub energy: u8,
    /// Trend derived from energy.
    pub trend: Trend,
    /// Category label.
    pub category: String,
}

impl SuperpowerRecord {
    /// Builds a normalized record from a raw summary, deriving the trend and
    /// filling a missing category with the default bucket.
    #[must_use]
    pub fn from_summary(summary: &SuperpowerSummary) -> Self {
        Self {
            name: summary.name.clone(),
            emoji: summary.emoji.clone(),
            bliks: summary.bliks,
            energy: summary.energy,
            trend: Trend::from_energy(summary.energy),
            category: summary
                .category
                .clone()
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        }
    }
}

/// A superpower after resolution, tagged with its flavor.
///
/// Every downstream consumer pattern-matches on this tag instead of
/// re-deriving the type from field presence. A name resolves to exactly one
/// variant per (name, context) pair; resolution failure is an explicit error,
/// never a partially populated record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResolvedSuperpower {
    /// A superpower owned by an individual.
    Personal {
        /// Normalized stats.
        record: SuperpowerRecord,
        /// The individual who owns it.
        owner: Owner,
    },
    /// A superpower owned by an organization profile.
    Business {
        /// Normalized stats.
        record: SuperpowerRecord,
        /// The organization that owns it.
        owner: Owner,
    },
}

impl ResolvedSuperpower {
    /// Builds the variant matching the owner's profile flavor.
    #[must_use]
    pub fn for_owner(record: SuperpowerRecord, owner: Owner) -> Self {
        match owner.kind {
            ProfileKind::Personal => Self::Personal { record, owner },
            ProfileKind::Business => Self::Business { record, owner },
        }
    }

    /// Returns the flavor tag.
    #[must_use]
    pub const fn kind(&self) -> SuperpowerKind {
        match self {
            Self::Personal { .. } => SuperpowerKind::Personal,
            Self::Business { .. } => SuperpowerKind::Business,
        }
    }

    /// Returns the normalized stats.
    #[must_use]
    pub const fn record(&self) -> &SuperpowerRecord {
        match self {
            Self::Personal { record, .. } | Self::Business { record, .. } => record,
        }
    }

    /// Returns the owner identity.
    #[must_use]
    pub const fn owner(&self) -> &Owner {
        match self {
            Self::Personal { owner, .. } | Self::Business { owner, .. } => owner,
        }
    }
}
