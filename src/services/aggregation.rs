//! Blik aggregation for a resolved superpower.

use crate::models::{ActorId, Blik, BlikId};
use crate::store::BlikCollections;
use std::collections::HashSet;

/// Collects the recognition events belonging to a resolved superpower.
///
/// The same logical event can legitimately appear in a global collection and
/// in an entity-specific collection at once; counting it twice would corrupt
/// every downstream count and ordering, so aggregation builds an id index
/// once per call and appends only unseen ids.
#[derive(Debug, Clone, Default)]
pub struct BlikAggregator {
    /// The current user's id, if known. Owners other than this one get
    /// their entity-specific collection appended.
    current_user: Option<ActorId>,
}

impl BlikAggregator {
    /// Creates an aggregator for the given current user.
    #[must_use]
    pub const fn new(current_user: Option<ActorId>) -> Self {
        Self { current_user }
    }

    /// Returns all bliks that reference the named superpower and the given
    /// owner, exactly once each.
    ///
    /// Output order is deterministic for a fixed input: global collection
    /// order (received, then sent), then the entity-specific appended order.
    /// An empty result is a valid state, not an error.
    #[must_use]
    pub fn bliks_for(
        &self,
        superpower_name: &str,
        owner: &ActorId,
        collections: &BlikCollections,
    ) -> Vec<Blik> {
        let mut seen: HashSet<BlikId> = HashSet::new();
        let mut result: Vec<Blik> = Vec::new();

        for blik in collections.global_iter() {
            if blik.concerns(superpower_name, owner) && seen.insert(blik.id.clone()) {
                result.push(blik.clone());
            }
        }

        // Entity-specific collections only exist for non-current owners.
        if self.current_user.as_ref() != Some(owner) {
            for blik in collections.per_entity(owner) {
                if blik.concerns(superpower_name, owner) && seen.insert(blik.id.clone()) {
                    result.push(blik.clone());
                }
            }
        }

        tracing::debug!(
            superpower = superpower_name,
            owner = %owner,
            count = result.len(),
            "Aggregated bliks"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BlikContent, Owner};
    use chrono::Utc;

    fn create_test_blik(id: &str, superpower: &str, author: &str, recipient: &str) -> Blik {
        Blik {
            id: BlikId::new(id),
            author: Owner::personal(author, author, ""),
            recipient: Owner::personal(recipient, recipient, ""),
            superpower_name: superpower.to_string(),
            superpower_emoji: "🎨".to_string(),
            content: BlikContent::Text {
                body: "great work".to_string(),
            },
            created_at: Utc::now(),
            timestamp_label: "just now".to_string(),
            likes: 0,
            comment_count: 0,
            liked_by: Vec::new(),
            comments: Vec::new(),
        }
    }

    fn aggregator() -> BlikAggregator {
        BlikAggregator::new(Some(ActorId::new("alice")))
    }

    #[test]
    fn test_filters_by_name_and_owner() {
        let mut collections = BlikCollections::new();
        collections.received.push(create_test_blik("r1", "Creativity", "bob", "alice"));
        collections.received.push(create_test_blik("r2", "Empathy", "bob", "alice"));
        collections.sent.push(create_test_blik("s1", "Creativity", "alice", "carol"));
        collections.sent.push(create_test_blik("s2", "Creativity", "carol", "dave"));

        let result = aggregator().bliks_for("Creativity", &ActorId::new("alice"), &collections);
        let ids: Vec<&str> = result.iter().map(|b| b.id.as_str()).collect();
        // Global order: received first, then sent. s2 concerns neither side.
        assert_eq!(ids, vec!["r1", "s1"]);
    }

    #[test]
    fn test_entity_collection_appended_for_other_owner() {
        let mut collections = BlikCollections::new();
        collections.received.push(create_test_blik("g1", "Creativity", "bob", "alice"));
        collections.per_entity.insert(
            ActorId::new("bob"),
            vec![create_test_blik("e1", "Creativity", "carol", "bob")],
        );

        let result = aggregator().bliks_for("Creativity", &ActorId::new("bob"), &collections);
        let ids: Vec<&str> = result.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["g1", "e1"]);
    }

    #[test]
    fn test_duplicate_id_appears_exactly_once() {
        // Same logical event in the received-global collection and in Bob's
        // entity-specific collection.
        let mut collections = BlikCollections::new();
        collections.received.push(create_test_blik("x1", "Creativity", "bob", "alice"));
        collections.per_entity.insert(
            ActorId::new("bob"),
            vec![
                create_test_blik("x1", "Creativity", "bob", "alice"),
                create_test_blik("x2", "Creativity", "carol", "bob"),
            ],
        );

        let result = aggregator().bliks_for("Creativity", &ActorId::new("bob"), &collections);
        let ids: Vec<&str> = result.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["x1", "x2"]);
    }

    #[test]
    fn test_current_user_skips_entity_collections() {
        let mut collections = BlikCollections::new();
        // An entity collection keyed by the current user should never exist,
        // but if it does it must not leak into the user's own aggregation.
        collections.per_entity.insert(
            ActorId::new("alice"),
            vec![create_test_blik("e1", "Creativity", "bob", "alice")],
        );

        let result = aggregator().bliks_for("Creativity", &ActorId::new("alice"), &collections);
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_aggregation_is_valid() {
        let collections = BlikCollections::new();
        let result = aggregator().bliks_for("Creativity", &ActorId::new("alice"), &collections);
        assert!(result.is_empty());
    }

    #[test]
    fn test_order_is_deterministic() {
        let mut collections = BlikCollections::new();
        for i in 0..5 {
            collections
                .received
                .push(create_test_blik(&format!("r{i}"), "Creativity", "bob", "alice"));
        }

        let owner = ActorId::new("alice");
        let first = aggregator().bliks_for("Creativity", &owner, &collections);
        let second = aggregator().bliks_for("Creativity", &owner, &collections);
        assert_eq!(first, second);
    }
}
