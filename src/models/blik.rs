//! Blik (recognition event) types.

use super::{ActorId, Owner};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a blik, stable across all collections.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlikId(String);

impl BlikId {
    /// Creates a new blik ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlikId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BlikId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for BlikId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Body of a blik: free text or a media attachment with caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BlikContent {
    /// Plain text content.
    Text {
        /// The message body.
        body: String,
    },
    /// Media attachment.
    Media {
        /// Media URL or asset key.
        url: String,
        /// Caption shown under the media.
        caption: String,
    },
}

/// A comment left on a blik by some actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Locally generated identifier.
    pub id: String,
    /// Who wrote the comment.
    pub author: ActorId,
    /// Comment body.
    pub body: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Creates a new comment with a generated id and the current time.
    #[must_use]
    pub fn new(author: ActorId, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author,
            body: body.into(),
            created_at: Utc::now(),
        }
    }
}

/// A single recognition event.
///
/// Content is immutable once created; only the like state and the comment
/// list may be mutated, and only through [`crate::store::BlikCollections`].
/// A blik is never physically deleted — accept/decline moves it between
/// logical buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blik {
    /// Stable identifier, unique across all collections.
    pub id: BlikId,
    /// Who sent the recognition.
    pub author: Owner,
    /// Who received it.
    pub recipient: Owner,
    /// Name of the superpower this blik accrues to.
    pub superpower_name: String,
    /// Emoji of the referenced superpower.
    pub superpower_emoji: String,
    /// The blik body.
    pub content: BlikContent,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Human-readable timestamp label shown in the feed ("2 hours ago").
    ///
    /// Display-only; ordering always uses `created_at`.
    pub timestamp_label: String,
    /// Number of likes.
    pub likes: u32,
    /// Number of comments.
    pub comment_count: u32,
    /// Actors who liked this blik.
    #[serde(default)]
    pub liked_by: Vec<ActorId>,
    /// Comments left on this blik.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Blik {
    /// Returns true if this blik references the given superpower name and
    /// its author or recipient matches the given owner.
    #[must_use]
    pub fn concerns(&self, superpower_name: &str, owner: &ActorId) -> bool {
        self.superpower_name == superpower_name
            && (self.author.id == *owner || self.recipient.id == *owner)
    }

    /// Returns true if the given actor has liked this blik.
    #[must_use]
    pub fn is_liked_by(&self, actor: &ActorId) -> bool {
        self.liked_by.contains(actor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProfileKind;

    fn create_test_blik(id: &str, superpower: &str, author: &str, recipient: &str) -> Blik {
        Blik {
            id: BlikId::new(id),
            author: Owner {
                id: ActorId::new(author),
                name: author.to_string(),
                avatar: String::new(),
                kind: ProfileKind::Personal,
            },
            recipient: Owner {
                id: ActorId::new(recipient),
                name: recipient.to_string(),
                avatar: String::new(),
                kind: ProfileKind::Personal,
            },
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

    #[test]
    fn test_concerns_matches_author_or_recipient() {
        let blik = create_test_blik("b1", "Creativity", "bob", "alice");
        let alice = ActorId::new("alice");
        let bob = ActorId::new("bob");
        let carol = ActorId::new("carol");

        assert!(blik.concerns("Creativity", &alice));
        assert!(blik.concerns("Creativity", &bob));
        assert!(!blik.concerns("Creativity", &carol));
        assert!(!blik.concerns("Automation", &alice));
    }

    #[test]
    fn test_comment_ids_are_unique() {
        let a = Comment::new(ActorId::new("alice"), "nice");
        let b = Comment::new(ActorId::new("alice"), "nice");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_content_serialization_tag() {
        let content = BlikContent::Media {
            url: "clip.mp4".to_string(),
            caption: "demo".to_string(),
        };
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json["kind"], "media");
    }
}
