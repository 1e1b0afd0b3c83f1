use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Identity snapshot taken when a comment is created. Comments keep the
/// name and avatar as they were at posting time; there is no live binding
/// back to a user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub display_name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

/// External authentication collaborator.
///
/// The engine never performs sign-in itself; it asks the provider for the
/// current user right before applying a post intent. Implementations
/// should return [`crate::AppError::IdentityUnavailable`] when no user can
/// be resolved — the intent is then abandoned and the forest stays
/// untouched.
pub trait IdentityProvider {
    fn current_user(&self) -> Result<UserProfile>;
}
