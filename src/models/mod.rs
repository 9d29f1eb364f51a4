//! Data models for blikcore.
//!
//! This module contains all the core data structures used throughout the
//! resolution pipeline.

mod blik;
mod identity;
mod navigation;
mod superpower;

pub use blik::{Blik, BlikContent, BlikId, Comment};
pub use identity::{ActorId, Owner, ProfileKind};
pub use navigation::{
    BackDestination, NavigationState, Provenance, ResolutionContext, Screen, ViewedEntity,
};
pub use superpower::{
    DEFAULT_CATEGORY, ResolvedSuperpower, SuperpowerKind, SuperpowerRecord, SuperpowerSummary,
    Trend,
};
