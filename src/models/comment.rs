use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Sentinel target id meaning "post as a new top-level comment".
pub const ROOT_TARGET: u64 = 0;

/// A comment and its nested replies, forming a subtree of the forest.
///
/// `id` is unique across the whole forest, at every depth. Replies are
/// append-only and keep insertion order; sorting never touches them.
/// Field names follow the seed fixture format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    /// Display name of the user being replied to, empty for top-level
    /// comments. Not a structural pointer; nesting is via `replies`.
    #[serde(default)]
    pub parent_comment: String,
    pub user_name: String,
    #[serde(default)]
    pub user_image: String,
    pub comment_text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub smile_count: u64,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub dislike_count: u64,
    #[serde(default)]
    pub replies: Vec<Comment>,
}

impl Comment {
    pub fn reaction_count(&self, reaction: Reaction) -> u64 {
        match reaction {
            Reaction::Smile => self.smile_count,
            Reaction::Like => self.like_count,
            Reaction::Dislike => self.dislike_count,
        }
    }

    pub fn reaction_count_mut(&mut self, reaction: Reaction) -> &mut u64 {
        match reaction {
            Reaction::Smile => &mut self.smile_count,
            Reaction::Like => &mut self.like_count,
            Reaction::Dislike => &mut self.dislike_count,
        }
    }

    pub fn is_reply(&self) -> bool {
        !self.parent_comment.is_empty()
    }
}

/// The three reaction counters a comment carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    Smile,
    Like,
    Dislike,
}

/// Top-level sort selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Descending by smile count.
    Popular,
    /// Descending by creation time.
    Latest,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCommentRequest {
    /// Opaque rich content. The configured maximum length is enforced by
    /// [`crate::utils::validation::validate_comment_text`]; only emptiness
    /// is checked here.
    #[validate(length(min = 1))]
    pub text: String,
    /// Id of the comment being replied to, or [`ROOT_TARGET`] for a new
    /// top-level comment.
    pub target_id: u64,
    /// Display name of the user being replied to, shown as "@name".
    pub reply_to: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionRequest {
    pub reaction: Reaction,
    pub target_id: u64,
}
