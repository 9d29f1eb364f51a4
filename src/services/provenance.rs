//! Navigation provenance bookkeeping for the back path.

use crate::models::{ActorId, BackDestination, Provenance, ResolutionContext, Screen};

/// Remembers where a superpower detail view was entered from.
///
/// A single optional record, set at selection time and cleared when the
/// detail view is exited or the user switches main navigation tabs. The
/// back path reads this record instead of recomputing the context, because
/// by the time "back" fires the ambient state may already have been mutated
/// by the detail screen itself.
#[derive(Debug, Clone)]
pub struct ProvenanceTracker {
    record: Option<Provenance>,
    /// Safe landing screen when no provenance was recorded (deep links,
    /// sidebar shortcuts bypassing the selection flow).
    fallback: Screen,
}

impl ProvenanceTracker {
    /// Creates a tracker with the given fallback destination.
    #[must_use]
    pub const fn new(fallback: Screen) -> Self {
        Self {
            record: None,
            fallback,
        }
    }

    /// Records provenance at superpower-selection time.
    pub fn record(
        &mut self,
        name: impl Into<String>,
        source: ResolutionContext,
        viewed_entity: Option<ActorId>,
    ) {
        self.record = Some(Provenance {
            name: name.into(),
            source,
            viewed_entity,
        });
    }

    /// Returns the current record without consuming it.
    #[must_use]
    pub const fn current(&self) -> Option<&Provenance> {
        self.record.as_ref()
    }

    /// Clears the record (detail view exited or tab switched).
    pub fn clear(&mut self) {
        self.record = None;
    }

    /// Consumes the record and computes where back should land.
    ///
    /// Missing provenance is not an error; it falls through to the
    /// configured fallback screen.
    pub fn take_back_destination(&mut self) -> BackDestination {
        let Some(provenance) = self.record.take() else {
            tracing::debug!(fallback = %self.fallback, "Back without provenance");
            return BackDestination::Fallback(self.fallback);
        };

        match provenance.source {
            ResolutionContext::Library => BackDestination::Library,
            ResolutionContext::OtherUser => provenance.viewed_entity.map_or(
                // Context said other-user but no entity was captured; land
                // on the fallback rather than a wrong profile.
                BackDestination::Fallback(self.fallback),
                BackDestination::OtherEntityProfile,
            ),
            ResolutionContext::UserProfile | ResolutionContext::BusinessProfile => {
                BackDestination::OwnProfile
            }
        }
    }
}

impl Default for ProvenanceTracker {
    fn default() -> Self {
        Self::new(Screen::SharedValueMap)
    }
}
