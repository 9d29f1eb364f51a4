//! # Blikcore
//!
//! Superpower context resolution and blik aggregation core for the Blik
//! recognition network.
//!
//! Users exchange recognition events (bliks) that accrue to named
//! superpowers. A superpower is owned either by an individual (personal) or
//! by an organization profile (business), and the same display name can
//! legitimately exist on several owners at once. This crate implements the
//! subsystem that disambiguates which entity a name refers to, aggregates the
//! recognition events belonging to it, and remembers enough navigation
//! provenance to return the user to the originating screen.
//!
//! ## Pipeline
//!
//! One user interaction drives one synchronous pass:
//!
//! ```text
//! NavigationState → resolve_context → SuperpowerResolver → BlikAggregator
//! ```
//!
//! The provenance tracker is consulted only on the reverse (back) path.
//!
//! ## Example
//!
//! ```rust,ignore
//! use blikcore::{DetailService, NavigationState, Screen};
//!
//! let mut service = DetailService::new(config, sink);
//! let nav = NavigationState::own_screen(Screen::Profile, user_kind);
//! let view = service.open_superpower("Creativity", &nav, &store, &collections)?;
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
// multiple_crate_versions is inherently crate-level (detects duplicate transitive dependencies).
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod backend;
pub mod config;
pub mod models;
pub mod notify;
pub mod observability;
pub mod services;
pub mod store;

// Re-exports for convenience
pub use config::AppConfig;
pub use models::{
    ActorId, BackDestination, Blik, BlikId, NavigationState, Owner, ProfileKind, Provenance,
    ResolutionContext, ResolvedSuperpower, Screen, SuperpowerKind, SuperpowerSummary, Trend,
};
pub use notify::{NotificationKind, NotificationSink, TracingSink};
pub use services::{
    BlikAggregator, DetailService, DetailView, ProvenanceTracker, SuperpowerResolver,
    resolve_context,
};
pub use store::{BlikCollections, EntityStore, OtherEntity};

/// Error type for blikcore operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `ResolutionNotFound` | A superpower name has no owner under the derived context |
/// | `OwnerAmbiguous` | More than one resolution strategy matches (logic defect) |
/// | `UnknownBlik` | A like/comment/accept targets a blik id no collection holds |
/// | `Config` | Config file cannot be read or parsed |
/// | `Backend` | The external CRUD service returns a failure |
#[derive(Debug, ThisError)]
pub enum Error {
    /// The named superpower does not exist under the derived context.
    ///
    /// Recovered locally: the caller aborts the pending navigation, surfaces
    /// a user-visible message, and stays on the current screen. This is the
    /// only variant that produces a visible notification.
    #[error("no superpower named '{name}' found in {context} context")]
    ResolutionNotFound {
        /// The superpower display name that failed to resolve.
        name: String,
        /// The resolution context that was searched.
        context: models::ResolutionContext,
    },

    /// More than one resolution strategy matched the same name.
    ///
    /// The priority rules guarantee this cannot happen on the normal path;
    /// it is surfaced only by the diagnostic ambiguity check and is treated
    /// as a programming-logic defect, never silently resolved by picking a
    /// winner.
    #[error("superpower '{name}' matched {candidates} strategies in {context} context")]
    OwnerAmbiguous {
        /// The ambiguous superpower name.
        name: String,
        /// The resolution context under which ambiguity was detected.
        context: models::ResolutionContext,
        /// How many strategies produced a match.
        candidates: usize,
    },

    /// A mutation targeted a blik id that no collection holds.
    #[error("no blik with id '{0}' in any collection")]
    UnknownBlik(String),

    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(String),

    /// The external CRUD service request failed.
    #[error("backend request '{operation}' failed: {cause}")]
    Backend {
        /// The endpoint or operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for blikcore operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResolutionContext;

    #[test]
    fn test_error_display() {
        let err = Error::ResolutionNotFound {
            name: "Telekinesis".to_string(),
            context: ResolutionContext::Library,
        };
        assert_eq!(
            err.to_string(),
            "no superpower named 'Telekinesis' found in library context"
        );

        let err = Error::UnknownBlik("x9".to_string());
        assert_eq!(err.to_string(), "no blik with id 'x9' in any collection");

        let err = Error::Backend {
            operation: "GET /entities/bob".to_string(),
            cause: "timeout".to_string(),
        };
        assert!(err.to_string().contains("GET /entities/bob"));
        assert!(err.to_string().contains("timeout"));
    }
}
