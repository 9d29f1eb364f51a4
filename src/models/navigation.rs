//! Navigation state, resolution contexts, and provenance.

use super::{ActorId, ProfileKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Screens a superpower lookup can be invoked from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    /// The current user's own profile.
    Profile,
    /// The superpower library.
    Library,
    /// Another entity's profile.
    OtherEntityProfile,
    /// The shared value map. Dual-purpose: shows either the current user's
    /// map or another entity's, depending on whether one is selected.
    SharedValueMap,
    /// The main feed.
    Feed,
    /// The incoming bliks list.
    Incoming,
}

impl Screen {
    /// Returns the screen as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Library => "library",
            Self::OtherEntityProfile => "other-entity-profile",
            Self::SharedValueMap => "shared-value-map",
            Self::Feed => "feed",
            Self::Incoming => "incoming",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The disambiguating signal for superpower resolution.
///
/// Derived, never stored permanently: it is computed fresh from the current
/// [`NavigationState`] each time a superpower is selected, and cached only
/// inside [`Provenance`] for the back path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionContext {
    /// The current user's own personal profile.
    UserProfile,
    /// A business profile (the current user's or another entity's).
    BusinessProfile,
    /// The superpower library.
    Library,
    /// Another user's personal profile.
    OtherUser,
}

impl ResolutionContext {
    /// Returns the context as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UserProfile => "user-profile",
            Self::BusinessProfile => "business-profile",
            Self::Library => "library",
            Self::OtherUser => "other-user",
        }
    }
}

impl fmt::Display for ResolutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The entity currently being viewed, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewedEntity {
    /// The viewed entity's id.
    pub id: ActorId,
    /// The viewed entity's profile flavor.
    pub kind: ProfileKind,
}

/// Immutable snapshot of the navigation state.
///
/// Replaced wholesale on every transition; the resolution pipeline only ever
/// reads it, which keeps context derivation a pure function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    /// The screen the user is on.
    pub screen: Screen,
    /// The current user's profile flavor.
    pub user_kind: ProfileKind,
    /// The entity being viewed, when on another entity's screen.
    pub viewing: Option<ViewedEntity>,
}

impl NavigationState {
    /// Creates a state for one of the current user's own screens.
    #[must_use]
    pub const fn own_screen(screen: Screen, user_kind: ProfileKind) -> Self {
        Self {
            screen,
            user_kind,
            viewing: None,
        }
    }

    /// Creates a state for viewing another entity.
    #[must_use]
    pub fn viewing_entity(
        screen: Screen,
        user_kind: ProfileKind,
        entity: impl Into<ActorId>,
        entity_kind: ProfileKind,
    ) -> Self {
        Self {
            screen,
            user_kind,
            viewing: Some(ViewedEntity {
                id: entity.into(),
                kind: entity_kind,
            }),
        }
    }
}

/// Navigation provenance captured at superpower-selection time.
///
/// Read by the back path instead of recomputing the context, because by the
/// time "back" fires the ambient state may already have been mutated by the
/// detail screen. Also keeps the viewed entity id captured at selection time
/// so the other-user destination survives such mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    /// The superpower name that was selected.
    pub name: String,
    /// The resolution context at the moment of selection.
    pub source: ResolutionContext,
    /// The viewed entity at the moment of selection, if any.
    pub viewed_entity: Option<ActorId>,
}

/// Where a back action should land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackDestination {
    /// The superpower library.
    Library,
    /// The given entity's profile.
    OtherEntityProfile(ActorId),
    /// The current user's own profile.
    OwnProfile,
    /// No provenance was recorded; fall back to the configured safe screen.
    Fallback(Screen),
}
