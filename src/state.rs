use std::fs::File;

use tracing::{debug, info, warn};

use crate::{
    config::Config,
    error::Result,
    models::{
        comment::{Comment, CreateCommentRequest, ReactionRequest, SortOrder},
        user::IdentityProvider,
    },
    services::{CommentService, Paginator},
    utils::validation,
};

/// Everything the discussion widget needs in one explicitly owned place:
/// configuration, the comment forest and the paging/sort display state.
///
/// Intents arrive one at a time (the host is single-threaded); each one is
/// applied to completion before the next. The visible page is derived from
/// the current forest on every read, never cached.
pub struct AppState {
    pub config: Config,
    comments: CommentService,
    paginator: Paginator,
    sort_order: Option<SortOrder>,
}

impl AppState {
    /// Builds the state from configuration, loading the seed fixture when
    /// one is configured.
    pub fn new(config: Config) -> Result<Self> {
        let comments = match &config.seed_path {
            Some(path) => {
                info!("Loading comment seed from {}", path);
                CommentService::from_json(File::open(path)?)?
            }
            None => CommentService::new(),
        };
        Ok(Self::with_comments(config, comments))
    }

    /// Builds the state around an already constructed forest.
    pub fn with_comments(config: Config, comments: CommentService) -> Self {
        let paginator = Paginator::new(config.comments_per_page);
        Self {
            config,
            comments,
            paginator,
            sort_order: None,
        }
    }

    pub fn comments(&self) -> &[Comment] {
        self.comments.comments()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.top_level_count()
    }

    pub fn sort_order(&self) -> Option<SortOrder> {
        self.sort_order
    }

    /// Applies a post intent. The author is resolved through the identity
    /// collaborator first; if that fails the whole intent is abandoned and
    /// the forest is not touched.
    pub fn post_comment(
        &mut self,
        identity: &dyn IdentityProvider,
        request: CreateCommentRequest,
    ) -> Result<u64> {
        validation::validate_comment_text(&request.text, self.config.max_comment_length)?;

        let author = match identity.current_user() {
            Ok(user) => user,
            Err(err) => {
                warn!("Abandoning comment, identity lookup failed: {}", err);
                return Err(err);
            }
        };
        validation::validate_display_name(&author.display_name)?;

        self.comments.create_comment(&author, request)
    }

    /// Applies a reaction intent, returning the new count.
    pub fn react(&mut self, request: ReactionRequest) -> Result<u64> {
        self.comments.react(request.reaction, request.target_id)
    }

    /// Re-sorts the top level and remembers which order is active.
    pub fn sort_comments(&mut self, order: SortOrder) {
        debug!("Sorting top-level comments by {:?}", order);
        self.sort_order = Some(order);
        self.comments.sort_top_level(order);
    }

    /// The top-level comments on the current page.
    pub fn visible_comments(&self) -> &[Comment] {
        self.paginator.visible_slice(self.comments.comments())
    }

    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages(self.comments.top_level_count())
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.paginator.go_to(page);
    }

    pub fn next_page(&mut self) {
        let total = self.comments.top_level_count();
        self.paginator.next_page(total);
    }

    pub fn previous_page(&mut self) {
        self.paginator.previous_page();
    }
}
