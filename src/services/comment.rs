use crate::{
    error::{AppError, Result},
    models::comment::{Comment, CreateCommentRequest, Reaction, SortOrder, ROOT_TARGET},
    models::user::UserProfile,
};
use chrono::Utc;
use std::collections::HashSet;
use std::io::Read;
use tracing::{debug, warn};
use validator::Validate;

/// Owns the comment forest and every mutation applied to it.
///
/// All state lives here, explicitly — there is no ambient global. Ids come
/// from a monotonic counter seeded above the largest id in the seed data,
/// so they stay unique across the whole forest at every depth. Operations
/// that miss their target return a tagged [`AppError::NotFound`] and leave
/// the forest unchanged in value.
#[derive(Debug, Clone)]
pub struct CommentService {
    forest: Vec<Comment>,
    next_id: u64,
}

impl CommentService {
    pub fn new() -> Self {
        Self {
            forest: Vec::new(),
            next_id: 1,
        }
    }

    /// Builds a service around an existing forest, rejecting seeds that
    /// reuse an id anywhere in the tree.
    pub fn from_seed(seed: Vec<Comment>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut max_id = 0;
        for root in &seed {
            Self::check_ids(root, &mut seen, &mut max_id)?;
        }
        debug!("Seeded comment forest with {} top-level comments", seed.len());
        Ok(Self {
            forest: seed,
            next_id: max_id + 1,
        })
    }

    /// Reads a JSON array of comments, the seed fixture format.
    pub fn from_json(reader: impl Read) -> Result<Self> {
        let seed: Vec<Comment> = serde_json::from_reader(reader)?;
        Self::from_seed(seed)
    }

    fn check_ids(node: &Comment, seen: &mut HashSet<u64>, max_id: &mut u64) -> Result<()> {
        if !seen.insert(node.id) {
            return Err(AppError::validation(&format!(
                "Duplicate comment id {} in seed data",
                node.id
            )));
        }
        *max_id = (*max_id).max(node.id);
        for reply in &node.replies {
            Self::check_ids(reply, seen, max_id)?;
        }
        Ok(())
    }

    /// The top-level comments, in their current order.
    pub fn comments(&self) -> &[Comment] {
        &self.forest
    }

    pub fn top_level_count(&self) -> usize {
        self.forest.len()
    }

    pub fn get(&self, id: u64) -> Option<&Comment> {
        Self::find(&self.forest, id)
    }

    /// Creates a comment from a post intent and inserts it: target 0 means
    /// a new top-level comment appended after the existing ones, any other
    /// target appends a reply under that comment. Returns the new id.
    pub fn create_comment(
        &mut self,
        author: &UserProfile,
        request: CreateCommentRequest,
    ) -> Result<u64> {
        debug!("Creating comment under target {}", request.target_id);

        request.validate().map_err(|e| AppError::ValidatorError(e))?;

        let id = self.next_id;
        let comment = Comment {
            id,
            parent_comment: request.reply_to.unwrap_or_default(),
            user_name: author.display_name.clone(),
            user_image: author.avatar_url.clone().unwrap_or_default(),
            comment_text: request.text,
            timestamp: Utc::now(),
            smile_count: 0,
            like_count: 0,
            dislike_count: 0,
            replies: Vec::new(),
        };

        self.insert_reply(comment, request.target_id)?;
        Ok(id)
    }

    /// Appends `comment` under `target_id`, or at the end of the top level
    /// when `target_id` is [`ROOT_TARGET`]. A missing target is reported as
    /// `NotFound` with the forest left as it was.
    pub fn insert_reply(&mut self, comment: Comment, target_id: u64) -> Result<()> {
        if Self::find(&self.forest, comment.id).is_some() {
            return Err(AppError::conflict(&format!(
                "Comment id {} already exists",
                comment.id
            )));
        }
        // Keeps the counter ahead of externally built nodes too; only
        // advanced once the insertion actually happens
        let advance = comment.id.saturating_add(1);

        if target_id == ROOT_TARGET {
            self.forest.push(comment);
            self.next_id = self.next_id.max(advance);
            return Ok(());
        }

        match Self::find_mut(&mut self.forest, target_id) {
            Some(parent) => {
                parent.replies.push(comment);
                self.next_id = self.next_id.max(advance);
                Ok(())
            }
            None => {
                warn!("Reply target {} does not exist", target_id);
                Err(AppError::not_found("Comment"))
            }
        }
    }

    /// Increments one reaction counter on one comment by exactly 1 and
    /// returns the new count. Counters never decrement.
    pub fn react(&mut self, reaction: Reaction, target_id: u64) -> Result<u64> {
        debug!("Reaction {:?} on comment {}", reaction, target_id);

        match Self::find_mut(&mut self.forest, target_id) {
            Some(comment) => {
                let count = comment.reaction_count_mut(reaction);
                *count += 1;
                Ok(*count)
            }
            None => {
                warn!("Reaction target {} does not exist", target_id);
                Err(AppError::not_found("Comment"))
            }
        }
    }

    /// Stable sort of the top-level comments only; replies keep their
    /// insertion order at every depth.
    pub fn sort_top_level(&mut self, order: SortOrder) {
        match order {
            SortOrder::Popular => self
                .forest
                .sort_by(|a, b| b.smile_count.cmp(&a.smile_count)),
            SortOrder::Latest => self.forest.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
        }
    }

    // Depth-first, siblings in stored order. Ids are unique so the first
    // match is the only match.
    fn find(siblings: &[Comment], id: u64) -> Option<&Comment> {
        for comment in siblings {
            if comment.id == id {
                return Some(comment);
            }
            if let Some(found) = Self::find(&comment.replies, id) {
                return Some(found);
            }
        }
        None
    }

    fn find_mut(siblings: &mut [Comment], id: u64) -> Option<&mut Comment> {
        for comment in siblings {
            if comment.id == id {
                return Some(comment);
            }
            if let Some(found) = Self::find_mut(&mut comment.replies, id) {
                return Some(found);
            }
        }
        None
    }
}

impl Default for CommentService {
    fn default() -> Self {
        Self::new()
    }
}
