//! User lookup operations.

use std::sync::Arc;

use arquivo_core::error::AppError;
use arquivo_database::repositories::user::UserRepository;
use arquivo_entity::user::User;

/// Resolves users for the UI (folder ownership is keyed by user id, but the
/// browser only knows the email).
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Find a user by email.
    pub async fn get_by_email(&self, email: &str) -> Result<User, AppError> {
        self.user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No user with email '{email}'")))
    }
}
