//! Property-based tests for the resolution pipeline.
//!
//! Uses proptest to verify invariants across random inputs:
//! - Context resolution is a total, deterministic function
//! - Resolution is idempotent for a fixed store snapshot
//! - A miss never yields a partially populated record
//! - Aggregation returns each blik id exactly once
//! - Trend derivation partitions the energy range

// Property tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use blikcore::models::{BlikContent, SuperpowerSummary, ViewedEntity};
use blikcore::services::BlikAggregator;
use blikcore::store::CurrentUser;
use blikcore::{
    ActorId, Blik, BlikCollections, BlikId, EntityStore, NavigationState, OtherEntity, Owner,
    ProfileKind, Screen, SuperpowerResolver, Trend, resolve_context,
};
use chrono::Utc;
use proptest::prelude::*;

fn any_screen() -> impl Strategy<Value = Screen> {
    prop::sample::select(vec![
        Screen::Profile,
        Screen::Library,
        Screen::OtherEntityProfile,
        Screen::SharedValueMap,
        Screen::Feed,
        Screen::Incoming,
    ])
}

fn any_kind() -> impl Strategy<Value = ProfileKind> {
    prop::sample::select(vec![ProfileKind::Personal, ProfileKind::Business])
}

fn any_nav() -> impl Strategy<Value = NavigationState> {
    (
        any_screen(),
        any_kind(),
        proptest::option::of((any_kind(), "[a-z]{1,8}")),
    )
        .prop_map(|(screen, user_kind, viewing)| NavigationState {
            screen,
            user_kind,
            viewing: viewing.map(|(kind, id)| ViewedEntity {
                id: ActorId::new(id),
                kind,
            }),
        })
}

fn create_store(names: &[String]) -> EntityStore {
    let mut store = EntityStore::new().with_current_user(CurrentUser {
        id: ActorId::new("alice"),
        name: "Alice".to_string(),
        avatar: String::new(),
        kind: ProfileKind::Personal,
        personal_superpowers: names
            .iter()
            .map(|n| SuperpowerSummary::new(n.clone(), "🎨", 10, 50))
            .collect(),
        business_superpowers: Vec::new(),
    });
    store = store.with_entity(OtherEntity {
        id: ActorId::new("bob"),
        name: "Bob".to_string(),
        avatar: String::new(),
        kind: ProfileKind::Personal,
        superpowers: names
            .iter()
            .map(|n| SuperpowerSummary::new(n.clone(), "🎨", 5, 30))
            .collect(),
    });
    store
}

fn create_blik(id: &str, superpower: &str, author: &str, recipient: &str) -> Blik {
    Blik {
        id: BlikId::new(id),
        author: Owner::personal(author, author, ""),
        recipient: Owner::personal(recipient, recipient, ""),
        superpower_name: superpower.to_string(),
        superpower_emoji: "🎨".to_string(),
        content: BlikContent::Text {
            body: String::new(),
        },
        created_at: Utc::now(),
        timestamp_label: String::new(),
        likes: 0,
        comment_count: 0,
        liked_by: Vec::new(),
        comments: Vec::new(),
    }
}

proptest! {
    /// Property: context resolution is total and deterministic.
    #[test]
    fn prop_context_resolution_deterministic(nav in any_nav()) {
        let first = resolve_context(&nav);
        let second = resolve_context(&nav);
        prop_assert_eq!(first, second);
    }

    /// Property: resolving twice against an unchanged store yields
    /// identical output, including owner identity and stats.
    #[test]
    fn prop_resolution_idempotent(
        names in prop::collection::vec("[A-Z][a-z]{2,10}", 1..5),
        nav in any_nav(),
    ) {
        let store = create_store(&names);
        let resolver = SuperpowerResolver::new();
        let context = resolve_context(&nav);

        for name in &names {
            let first = resolver.resolve(name, context, &nav, &store);
            let second = resolver.resolve(name, context, &nav, &store);
            match (first, second) {
                (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
                (Err(_), Err(_)) => {}
                _ => prop_assert!(false, "resolution not idempotent for '{}'", name),
            }
        }
    }

    /// Property: a name that exists nowhere resolves to NotFound under
    /// every context, never to a record.
    #[test]
    fn prop_unknown_name_never_resolves(nav in any_nav()) {
        let store = create_store(&["Creativity".to_string()]);
        let resolver = SuperpowerResolver::new();
        let context = resolve_context(&nav);
        prop_assert!(resolver.resolve("Telekinesis", context, &nav, &store).is_err());
    }

    /// Property: aggregation returns each id exactly once, even when the
    /// same id appears in a global and an entity-specific collection.
    #[test]
    fn prop_aggregation_exactly_once(
        global_ids in prop::collection::hash_set("[a-z][0-9]{1,3}", 0..12),
        shared in prop::collection::vec(any::<bool>(), 0..12),
    ) {
        let mut collections = BlikCollections::new();
        let bob = ActorId::new("bob");
        let mut entity_bliks = Vec::new();
        for (id, duplicate) in global_ids.iter().zip(shared.iter().chain(std::iter::repeat(&false))) {
            collections.received.push(create_blik(id, "Creativity", "bob", "alice"));
            if *duplicate {
                entity_bliks.push(create_blik(id, "Creativity", "bob", "alice"));
            }
        }
        collections.per_entity.insert(bob.clone(), entity_bliks);

        let aggregator = BlikAggregator::new(Some(ActorId::new("alice")));
        let result = aggregator.bliks_for("Creativity", &bob, &collections);

        let mut seen = std::collections::HashSet::new();
        for blik in &result {
            prop_assert!(seen.insert(blik.id.clone()), "id {} returned twice", blik.id);
        }
        prop_assert_eq!(result.len(), global_ids.len());
    }

    /// Property: trend derivation partitions the energy range.
    #[test]
    fn prop_trend_partitions_energy(energy in 0u8..=100) {
        let trend = Trend::from_energy(energy);
        match trend {
            Trend::Up => prop_assert!(energy > 80),
            Trend::Down => prop_assert!(energy < 40),
            Trend::Stable => prop_assert!((40..=80).contains(&energy)),
        }
    }
}
