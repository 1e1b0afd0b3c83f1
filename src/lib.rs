//! Threaded-discussion comment engine.
//!
//! Holds a forest of nested comments in memory and exposes the operations
//! the discussion widget is built on: reply insertion at arbitrary depth,
//! reaction counting, top-level sorting, pagination and elapsed-time
//! display. The crate owns no HTTP routes, no CLI and no storage; identity
//! resolution and rich-text input are external collaborators (see
//! [`models::user::IdentityProvider`]).

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, Result};
pub use models::comment::{
    Comment, CreateCommentRequest, Reaction, ReactionRequest, SortOrder, ROOT_TARGET,
};
pub use models::user::{IdentityProvider, UserProfile};
pub use services::{CommentService, Paginator, DEFAULT_PAGE_SIZE};
pub use state::AppState;
