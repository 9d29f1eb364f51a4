//! Detail-view orchestration: the full lookup pipeline and its reverse.

use super::{BlikAggregator, ProvenanceTracker, SuperpowerResolver, resolve_context};
use crate::config::AppConfig;
use crate::models::{
    ActorId, BackDestination, Blik, BlikId, Comment, NavigationState, ResolvedSuperpower,
};
use crate::notify::{NotificationKind, NotificationSink};
use crate::store::{BlikCollections, EntityStore};
use crate::{Error, Result};

/// Everything the rendering layer needs for a superpower detail view.
#[derive(Debug, Clone)]
pub struct DetailView {
    /// The resolved, type-tagged superpower.
    pub superpower: ResolvedSuperpower,
    /// The aggregated recognition events, exactly once each.
    pub bliks: Vec<Blik>,
    /// Whether the resolved owner is the current user.
    pub is_owner: bool,
}

/// Runs the synchronous lookup pipeline and tracks provenance.
///
/// One user interaction drives one pass: context resolution, type
/// resolution, aggregation, then the provenance record for the back path.
/// Each pass either completes or fails within the same call; there is no
/// background work and no cancellation.
pub struct DetailService<S: NotificationSink> {
    resolver: SuperpowerResolver,
    tracker: ProvenanceTracker,
    sink: S,
}

impl<S: NotificationSink> DetailService<S> {
    /// Creates a service from configuration and a notification sink.
    #[must_use]
    pub const fn new(config: &AppConfig, sink: S) -> Self {
        Self {
            resolver: if config.strict_resolution {
                SuperpowerResolver::strict()
            } else {
                SuperpowerResolver::new()
            },
            tracker: ProvenanceTracker::new(config.fallback_screen),
            sink,
        }
    }

    /// Opens a superpower detail view.
    ///
    /// Resolves the context from the navigation snapshot, resolves the
    /// superpower under it, aggregates its bliks, and records provenance for
    /// the back path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResolutionNotFound`] if the name has no owner under
    /// the derived context. The failure aborts the transition: exactly one
    /// user-visible notification is emitted, no provenance is recorded, and
    /// the caller must stay on the current screen.
    pub fn open_superpower(
        &mut self,
        name: &str,
        nav: &NavigationState,
        store: &EntityStore,
        collections: &BlikCollections,
    ) -> Result<DetailView> {
        let context = resolve_context(nav);

        let superpower = match self.resolver.resolve(name, context, nav, store) {
            Ok(resolved) => resolved,
            Err(err) => {
                if matches!(err, Error::ResolutionNotFound { .. }) {
                    self.sink.notify(
                        NotificationKind::Error,
                        &format!("Superpower \"{name}\" could not be found"),
                    );
                }
                return Err(err);
            }
        };

        let current_user = store.current_user.as_ref().map(|u| u.id.clone());
        let aggregator = BlikAggregator::new(current_user.clone());
        let bliks = aggregator.bliks_for(name, &superpower.owner().id, collections);
        let is_owner = current_user.as_ref() == Some(&superpower.owner().id);

        self.tracker.record(
            name,
            context,
            nav.viewing.as_ref().map(|v| v.id.clone()),
        );

        tracing::info!(
            superpower = name,
            context = %context,
            owner = %superpower.owner().id,
            bliks = bliks.len(),
            is_owner,
            "Opened superpower detail"
        );

        Ok(DetailView {
            superpower,
            bliks,
            is_owner,
        })
    }

    /// Computes the back destination from the recorded provenance and
    /// clears it. Safe without a record: falls through to the configured
    /// default screen.
    pub fn navigate_back(&mut self) -> BackDestination {
        self.tracker.take_back_destination()
    }

    /// Clears provenance on a main-tab switch.
    pub fn change_tab(&mut self) {
        self.tracker.clear();
    }

    /// Returns the currently recorded provenance, if any.
    #[must_use]
    pub const fn provenance(&self) -> Option<&crate::models::Provenance> {
        self.tracker.current()
    }

    /// Returns the notification sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Toggles the current user's like on a blik.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownBlik`] if no collection holds the id.
    pub fn toggle_like(
        &self,
        id: &BlikId,
        actor: &ActorId,
        collections: &mut BlikCollections,
    ) -> Result<bool> {
        collections.toggle_like(id, actor)
    }

    /// Adds a comment by the current user to a blik.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownBlik`] if no collection holds the id.
    pub fn comment(
        &self,
        id: &BlikId,
        author: ActorId,
        body: &str,
        collections: &mut BlikCollections,
    ) -> Result<()> {
        collections.add_comment(id, Comment::new(author, body))
    }

    /// Accepts an incoming blik: moves it to the received collection and
    /// applies the score/energy delta to the matching superpower.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownBlik`] if the id is not in the incoming list.
    pub fn accept_incoming(
        &self,
        id: &BlikId,
        store: &mut EntityStore,
        collections: &mut BlikCollections,
    ) -> Result<()> {
        let blik = collections.accept_incoming(id)?;
        store.apply_accepted_blik(&blik.superpower_name);
        Ok(())
    }

    /// Declines an incoming blik, moving it to the declined bucket.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownBlik`] if the id is not in the incoming list.
    pub fn decline_incoming(
        &self,
        id: &BlikId,
        collections: &mut BlikCollections,
    ) -> Result<()> {
        collections.decline_incoming(id)
    }
}
