//! In-memory stores read by the resolution pipeline.
//!
//! The entity store and the blik collections are the only shared state in
//! the core. They are read by the pipeline and written only by the explicit
//! user actions that own them (single writer per collection).

mod bliks;
mod entity;

pub use bliks::BlikCollections;
pub use entity::{CurrentUser, EntityStore, OtherEntity};
