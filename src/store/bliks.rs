//! Blik collections and their single-writer mutations.

use crate::models::{ActorId, Blik, BlikId, Comment};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The independently maintained recognition-event lists.
///
/// Each list is keyed by stable blik id. Mutations read the current value,
/// compute the replacement, and swap it in as one unit, so callers never
/// observe a partial update. Nothing outside this type writes a collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlikCollections {
    /// Bliks received by the current user (global collection).
    pub received: Vec<Blik>,
    /// Bliks sent by the current user (global collection).
    pub sent: Vec<Blik>,
    /// Incoming bliks awaiting accept/decline.
    pub incoming: Vec<Blik>,
    /// Declined bliks. Kept rather than deleted; decline only moves the
    /// event between logical buckets.
    pub declined: Vec<Blik>,
    /// Per-entity collections for other users and businesses.
    pub per_entity: HashMap<ActorId, Vec<Blik>>,
}

impl BlikCollections {
    /// Creates empty collections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entity-specific collection for an owner, empty if none.
    #[must_use]
    pub fn per_entity(&self, owner: &ActorId) -> &[Blik] {
        self.per_entity.get(owner).map_or(&[], Vec::as_slice)
    }

    /// Iterates the two global collections in reference order: received
    /// first, then sent.
    pub fn global_iter(&self) -> impl Iterator<Item = &Blik> {
        self.received.iter().chain(self.sent.iter())
    }

    /// Toggles the given actor's like on a blik.
    ///
    /// Returns the new like state (`true` if the blik is now liked).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownBlik`] if no collection holds the id.
    pub fn toggle_like(&mut self, id: &BlikId, actor: &ActorId) -> Result<bool> {
        let blik = self.find_mut(id)?;
        let liked = if let Some(pos) = blik.liked_by.iter().position(|a| a == actor) {
            blik.liked_by.remove(pos);
            blik.likes = blik.likes.saturating_sub(1);
            false
        } else {
            blik.liked_by.push(actor.clone());
            blik.likes = blik.likes.saturating_add(1);
            true
        };
        tracing::debug!(blik = %id, actor = %actor, liked, "Toggled like");
        Ok(liked)
    }

    /// Appends a comment to a blik and bumps its counter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownBlik`] if no collection holds the id.
    pub fn add_comment(&mut self, id: &BlikId, comment: Comment) -> Result<()> {
        let blik = self.find_mut(id)?;
        blik.comments.push(comment);
        blik.comment_count = blik.comment_count.saturating_add(1);
        Ok(())
    }

    /// Moves an incoming blik to the received collection and returns a
    /// clone, so the caller can apply the score delta to the entity store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownBlik`] if the id is not in the incoming list.
    pub fn accept_incoming(&mut self, id: &BlikId) -> Result<Blik> {
        let pos = self
            .incoming
            .iter()
            .position(|b| b.id == *id)
            .ok_or_else(|| Error::UnknownBlik(id.to_string()))?;
        let blik = self.incoming.remove(pos);
        self.received.push(blik.clone());
        tracing::info!(blik = %id, superpower = %blik.superpower_name, "Accepted incoming blik");
        Ok(blik)
    }

    /// Moves an incoming blik to the declined bucket.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownBlik`] if the id is not in the incoming list.
    pub fn decline_incoming(&mut self, id: &BlikId) -> Result<()> {
        let pos = self
            .incoming
            .iter()
            .position(|b| b.id == *id)
            .ok_or_else(|| Error::UnknownBlik(id.to_string()))?;
        let blik = self.incoming.remove(pos);
        tracing::info!(blik = %id, "Declined incoming blik");
        self.declined.push(blik);
        Ok(())
    }

    /// Finds a blik by id across every bucket.
    fn find_mut(&mut self, id: &BlikId) -> Result<&mut Blik> {
        self.received
            .iter_mut()
            .chain(self.sent.iter_mut())
            .chain(self.incoming.iter_mut())
            .chain(self.declined.iter_mut())
            .chain(self.per_entity.values_mut().flatten())
            .find(|b| b.id == *id)
            .ok_or_else(|| Error::UnknownBlik(id.to_string()))
    }
}
