//! Context resolution: which resolution context applies to a lookup.

use crate::models::{NavigationState, ProfileKind, ResolutionContext, Screen};

/// Derives the resolution context from the current navigation state.
///
/// Pure function of the state snapshot; identical inputs always produce the
/// same context. The rules are ordered and the first matching one wins:
///
/// 1. Own profile screen: business profile when the current user is a
///    business, otherwise the user's personal profile.
/// 2. Library screen: the library context.
/// 3. Another entity's profile with an entity selected: business profile for
///    business entities, otherwise the other-user context.
/// 4. The shared value map delegates to rule 3 when an entity is selected,
///    otherwise to rule 1.
/// 5. Any other screen (feed, incoming list, sidebar shortcuts) falls back
///    to rule 1 for the current user.
///
/// The ordering is load-bearing: the same superpower name can exist on the
/// current user's list and on another entity's list at once, and the screen
/// the user came from is the only disambiguating signal. The context must
/// never be guessed from the name alone.
#[must_use]
pub fn resolve_context(nav: &NavigationState) -> ResolutionContext {
    match nav.screen {
        Screen::Profile | Screen::Feed | Screen::Incoming => own_context(nav.user_kind),
        Screen::Library => ResolutionContext::Library,
        Screen::OtherEntityProfile | Screen::SharedValueMap => nav
            .viewing
            .as_ref()
            .map_or_else(|| own_context(nav.user_kind), |viewed| entity_context(viewed.kind)),
    }
}

/// Rule 1: context for the current user's own screens.
const fn own_context(user_kind: ProfileKind) -> ResolutionContext {
    match user_kind {
        ProfileKind::Business => ResolutionContext::BusinessProfile,
        ProfileKind::Personal => ResolutionContext::UserProfile,
    }
}

/// Rule 3: context for a selected other entity.
const fn entity_context(entity_kind: ProfileKind) -> ResolutionContext {
    match entity_kind {
        ProfileKind::Business => ResolutionContext::BusinessProfile,
        ProfileKind::Personal => ResolutionContext::OtherUser,
    }
}
