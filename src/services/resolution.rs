//! Superpower type resolution.
//!
//! Given a display name and a resolution context, searches the entity store
//! in a fixed priority order and produces a normalized, type-tagged record
//! plus its owner identity. The priority order is a literal list of
//! strategies tried in sequence, so each one can be exercised independently
//! in tests.

use crate::models::{
    NavigationState, ResolutionContext, ResolvedSuperpower, SuperpowerRecord,
};
use crate::store::EntityStore;
use crate::{Error, Result};

/// A single resolution strategy: returns a resolved superpower if it applies
/// under the given context and finds an exact name match.
type Strategy =
    fn(&str, ResolutionContext, &NavigationState, &EntityStore) -> Option<ResolvedSuperpower>;

/// Ordered strategy list; first success wins.
///
/// The contexts the strategies fire under are disjoint, which is what makes
/// the "exactly one owner per (name, context)" invariant hold. The labels
/// are used in logs and in the ambiguity diagnostic.
const STRATEGIES: &[(&str, Strategy)] = &[
    ("own-personal", resolve_own_personal),
    ("other-personal", resolve_other_personal),
    ("business", resolve_business),
];

/// Resolves superpower names against the entity store.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuperpowerResolver {
    /// Run the ambiguity diagnostic on every lookup instead of only under
    /// fuzzing. Costs one extra pass over the strategy list.
    strict: bool,
}

impl SuperpowerResolver {
    /// Creates a resolver with the default (non-strict) behavior.
    #[must_use]
    pub const fn new() -> Self {
        Self { strict: false }
    }

    /// Creates a resolver that checks for ambiguity on every lookup.
    #[must_use]
    pub const fn strict() -> Self {
        Self { strict: true }
    }

    /// Resolves a superpower name under the given context.
    ///
    /// Deterministic: identical `(name, context, state, store)` inputs
    /// always produce the same variant and owner. No iteration-order or
    /// timestamp dependence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResolutionNotFound`] when no strategy matches. The
    /// caller must treat this as a hard stop: no detail view with partial
    /// data, no screen transition. Returns [`Error::OwnerAmbiguous`] in
    /// strict mode if more than one strategy fires, which indicates a defect
    /// in the context gating, not a recoverable condition.
    pub fn resolve(
        &self,
        name: &str,
        context: ResolutionContext,
        nav: &NavigationState,
        store: &EntityStore,
    ) -> Result<ResolvedSuperpower> {
        if self.strict {
            Self::verify_unambiguous(name, context, nav, store)?;
        }

        for (label, strategy) in STRATEGIES {
            if let Some(resolved) = strategy(name, context, nav, store) {
                tracing::debug!(
                    superpower = name,
                    context = %context,
                    strategy = label,
                    owner = %resolved.owner().id,
                    kind = %resolved.kind(),
                    "Resolved superpower"
                );
                return Ok(resolved);
            }
        }

        tracing::warn!(superpower = name, context = %context, "Superpower resolution failed");
        Err(Error::ResolutionNotFound {
            name: name.to_string(),
            context,
        })
    }

    /// Diagnostic pass: counts how many strategies would fire for the same
    /// lookup. More than one means the context gating is broken; that is a
    /// programming defect and fails loudly rather than picking a winner.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OwnerAmbiguous`] when several strategies match.
    pub fn verify_unambiguous(
        name: &str,
        context: ResolutionContext,
        nav: &NavigationState,
        store: &EntityStore,
    ) -> Result<()> {
        let candidates = STRATEGIES
            .iter()
            .filter(|(_, strategy)| strategy(name, context, nav, store).is_some())
            .count();
        debug_assert!(candidates <= 1, "ambiguous resolution for '{name}' in {context}");
        if candidates > 1 {
            return Err(Error::OwnerAmbiguous {
                name: name.to_string(),
                context,
                candidates,
            });
        }
        Ok(())
    }
}

/// Priority 1: the current user's own personal list.
///
/// Applies in the user-profile and library contexts when no other entity is
/// selected.
fn resolve_own_personal(
    name: &str,
    context: ResolutionContext,
    nav: &NavigationState,
    store: &EntityStore,
) -> Option<ResolvedSuperpower> {
    if !matches!(
        context,
        ResolutionContext::UserProfile | ResolutionContext::Library
    ) || nav.viewing.is_some()
    {
        return None;
    }
    let user = store.current_user.as_ref()?;
    let summary = store.find_own_personal(name)?;
    Some(ResolvedSuperpower::Personal {
        record: SuperpowerRecord::from_summary(summary),
        owner: user.as_owner(),
    })
}

/// Priority 2: the selected other entity's personal list.
///
/// Synthesizes a personal-variant record whose owner fields point at that
/// entity, never at the current user. Other entities do not carry full
/// categorization data, so the record's category falls back to the shared
/// default bucket.
fn resolve_other_personal(
    name: &str,
    context: ResolutionContext,
    nav: &NavigationState,
    store: &EntityStore,
) -> Option<ResolvedSuperpower> {
    if context != ResolutionContext::OtherUser {
        return None;
    }
    let viewed = nav.viewing.as_ref()?;
    let entity = store.entity(&viewed.id)?;
    let summary = entity.find_superpower(name)?;
    Some(ResolvedSuperpower::Personal {
        record: SuperpowerRecord::from_summary(summary),
        owner: entity.as_owner(),
    })
}

/// Priority 3: business resolution.
///
/// Checks the current user's business list first (owner = current user),
/// then the selected entity's list if that entity is a business, then the
/// standalone business directory keyed by name.
fn resolve_business(
    name: &str,
    context: ResolutionContext,
    nav: &NavigationState,
    store: &EntityStore,
) -> Option<ResolvedSuperpower> {
    if context != ResolutionContext::BusinessProfile {
        return None;
    }

    if let Some(summary) = store.find_own_business(name)
        && let Some(user) = store.current_user.as_ref()
    {
        return Some(ResolvedSuperpower::Business {
            record: SuperpowerRecord::from_summary(summary),
            owner: user.as_owner(),
        });
    }

    if let Some(viewed) = nav.viewing.as_ref()
        && viewed.kind.is_business()
        && let Some(entity) = store.entity(&viewed.id)
        && let Some(summary) = entity.find_superpower(name)
    {
        return Some(ResolvedSuperpower::Business {
            record: SuperpowerRecord::from_summary(summary),
            owner: entity.as_owner(),
        });
    }

    store
        .find_standalone_business(name)
        .map(|(owner, summary)| ResolvedSuperpower::Business {
            record: SuperpowerRecord::from_summary(summary),
            owner: owner.clone(),
        })
}
