//! External CRUD service contract.
//!
//! The resolution pipeline never talks to the network; in a full deployment
//! the entity store and blik collections are loaded through this narrow
//! contract and kept in memory. The trait exists so embedders and tests can
//! substitute their own transport.

mod rest;

pub use rest::RestClient;

use crate::Result;
use crate::models::{ActorId, Blik, BlikId, Comment};
use crate::store::OtherEntity;

/// Narrow client contract for the persistence service.
///
/// Endpoint shapes: `GET /entities/:id`, `GET /bliks?superpower=&owner=`,
/// `POST /bliks/:id/like`, `POST /bliks/:id/comments`.
pub trait BackendApi {
    /// Fetches a directory entity by id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Backend`] on transport or decode failure.
    fn fetch_entity(&self, id: &ActorId) -> Result<OtherEntity>;

    /// Fetches the bliks referencing a superpower and owner.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Backend`] on transport or decode failure.
    fn fetch_bliks(&self, superpower: &str, owner: &ActorId) -> Result<Vec<Blik>>;

    /// Records a like on a blik.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Backend`] on transport failure.
    fn like_blik(&self, id: &BlikId) -> Result<()>;

    /// Posts a comment on a blik.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Backend`] on transport failure.
    fn post_comment(&self, id: &BlikId, comment: &Comment) -> Result<()>;
}
