//! Resolution pipeline services.
//!
//! Services implement the synchronous lookup pipeline: context resolution,
//! superpower type resolution, blik aggregation, and the navigation
//! provenance bookkeeping consulted on the back path.

mod aggregation;
mod context;
mod detail;
mod provenance;
mod resolution;

pub use aggregation::BlikAggregator;
pub use context::resolve_context;
pub use detail::{DetailService, DetailView};
pub use provenance::ProvenanceTracker;
pub use resolution::SuperpowerResolver;
