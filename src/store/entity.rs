//! Entity store: the current user, the entity directory, and the standalone
//! business directory.

use crate::models::{ActorId, Owner, ProfileKind, SuperpowerSummary};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The single authenticated actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Stable identifier.
    pub id: ActorId,
    /// Display name.
    pub name: String,
    /// Avatar reference.
    pub avatar: String,
    /// Profile flavor, set once during setup.
    pub kind: ProfileKind,
    /// Ordered personal superpower list.
    pub personal_superpowers: Vec<SuperpowerSummary>,
    /// Business superpower list; populated only for business profiles.
    #[serde(default)]
    pub business_superpowers: Vec<SuperpowerSummary>,
}

impl CurrentUser {
    /// Returns the current user as an owner identity.
    #[must_use]
    pub fn as_owner(&self) -> Owner {
        Owner {
            id: self.id.clone(),
            name: self.name.clone(),
            avatar: self.avatar.clone(),
            kind: self.kind,
        }
    }
}

/// A directory entry for any non-current actor.
///
/// Read-only from the core's perspective; there is no mutation path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtherEntity {
    /// Stable identifier.
    pub id: ActorId,
    /// Display name.
    pub name: String,
    /// Avatar reference.
    pub avatar: String,
    /// Profile flavor.
    pub kind: ProfileKind,
    /// The entity's own superpower list.
    pub superpowers: Vec<SuperpowerSummary>,
}

impl OtherEntity {
    /// Returns this entity as an owner identity.
    #[must_use]
    pub fn as_owner(&self) -> Owner {
        Owner {
            id: self.id.clone(),
            name: self.name.clone(),
            avatar: self.avatar.clone(),
            kind: self.kind,
        }
    }

    /// Finds a superpower on this entity's list by exact name match.
    #[must_use]
    pub fn find_superpower(&self, name: &str) -> Option<&SuperpowerSummary> {
        self.superpowers.iter().find(|s| s.name == name)
    }
}

/// Holds the three raw collections the resolver reads: the current user's
/// lists, the directory of other entities, and a standalone business
/// directory keyed by superpower name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityStore {
    /// The authenticated user.
    pub current_user: Option<CurrentUser>,
    /// Directory of other users and businesses, keyed by id.
    pub directory: HashMap<ActorId, OtherEntity>,
    /// Standalone businesses keyed by superpower name, for business
    /// superpowers reachable outside any profile (library tiles, map pins).
    pub business_directory: HashMap<String, (Owner, SuperpowerSummary)>,
}

impl EntityStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the current user.
    #[must_use]
    pub fn with_current_user(mut self, user: CurrentUser) -> Self {
        self.current_user = Some(user);
        self
    }

    /// Adds a directory entry.
    #[must_use]
    pub fn with_entity(mut self, entity: OtherEntity) -> Self {
        self.directory.insert(entity.id.clone(), entity);
        self
    }

    /// Adds a standalone business listing for a superpower name.
    #[must_use]
    pub fn with_business_listing(mut self, owner: Owner, summary: SuperpowerSummary) -> Self {
        self.business_directory
            .insert(summary.name.clone(), (owner, summary));
        self
    }

    /// Looks up a directory entity by id.
    #[must_use]
    pub fn entity(&self, id: &ActorId) -> Option<&OtherEntity> {
        self.directory.get(id)
    }

    /// Finds a superpower on the current user's personal list.
    #[must_use]
    pub fn find_own_personal(&self, name: &str) -> Option<&SuperpowerSummary> {
        self.current_user
            .as_ref()?
            .personal_superpowers
            .iter()
            .find(|s| s.name == name)
    }

    /// Finds a superpower on the current user's business list.
    ///
    /// Returns `None` unless the current user is a business profile.
    #[must_use]
    pub fn find_own_business(&self, name: &str) -> Option<&SuperpowerSummary> {
        let user = self.current_user.as_ref()?;
        if !user.kind.is_business() {
            return None;
        }
        user.business_superpowers.iter().find(|s| s.name == name)
    }

    /// Finds a standalone business listing by superpower name.
    #[must_use]
    pub fn find_standalone_business(&self, name: &str) -> Option<&(Owner, SuperpowerSummary)> {
        self.business_directory.get(name)
    }

    /// Applies the score and energy delta for an accepted blik to the
    /// current user's matching personal superpower.
    ///
    /// A blik for a superpower the user no longer lists is a no-op; the
    /// event itself still moves to the received collection.
    pub fn apply_accepted_blik(&mut self, superpower_name: &str) {
        if let Some(user) = self.current_user.as_mut()
            && let Some(summary) = user
                .personal_superpowers
                .iter_mut()
                .find(|s| s.name == superpower_name)
        {
            summary.bliks = summary.bliks.saturating_add(1);
            summary.energy = summary.energy.saturating_add(1).min(100);
            tracing::debug!(
                superpower = superpower_name,
                bliks = summary.bliks,
                energy = summary.energy,
                "Applied accepted blik to superpower"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user(kind: ProfileKind) -> CurrentUser {
        CurrentUser {
            id: ActorId::new("alice"),
            name: "Alice".to_string(),
            avatar: "alice.png".to_string(),
            kind,
            personal_superpowers: vec![SuperpowerSummary::new("Creativity", "🎨", 85, 89)],
            business_superpowers: vec![SuperpowerSummary::new("Automation", "⚙️", 96, 72)],
        }
    }

    #[test]
    fn test_find_own_personal() {
        let store = EntityStore::new().with_current_user(create_test_user(ProfileKind::Personal));
        assert!(store.find_own_personal("Creativity").is_some());
        assert!(store.find_own_personal("Telekinesis").is_none());
    }

    #[test]
    fn test_business_list_gated_on_kind() {
        let store = EntityStore::new().with_current_user(create_test_user(ProfileKind::Personal));
        assert!(store.find_own_business("Automation").is_none());

        let store = EntityStore::new().with_current_user(create_test_user(ProfileKind::Business));
        assert!(store.find_own_business("Automation").is_some());
    }

    #[test]
    fn test_accepted_blik_bumps_score_and_energy() {
        let mut store =
            EntityStore::new().with_current_user(create_test_user(ProfileKind::Personal));
        store.apply_accepted_blik("Creativity");

        let summary = store.find_own_personal("Creativity").unwrap();
        assert_eq!(summary.bliks, 86);
        assert_eq!(summary.energy, 90);

        // Unknown superpower is a no-op, not an error.
        store.apply_accepted_blik("Telekinesis");
    }

    #[test]
    fn test_energy_saturates_at_100() {
        let mut user = create_test_user(ProfileKind::Personal);
        user.personal_superpowers[0].energy = 100;
        let mut store = EntityStore::new().with_current_user(user);
        store.apply_accepted_blik("Creativity");
        assert_eq!(store.find_own_personal("Creativity").unwrap().energy, 100);
    }
}
