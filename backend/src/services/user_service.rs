//! User business logic service.
//!
//! Handles account creation and credential checking against the user store.

use crate::errors::{ServiceError, ServiceResult};
use crate::storage::AppState;
use crate::storage::models::User;
use bcrypt::{DEFAULT_COST, hash, verify};

pub struct UserService<'a> {
    state: &'a AppState,
}

impl<'a> UserService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Creates a new user.
    ///
    /// # Errors
    /// Returns `ServiceError::AlreadyExists` if the username is taken.
    pub async fn create_user(&self, username: String, password: String) -> ServiceResult<User> {
        if self
            .state
            .users
            .get_user_by_username(&username)
            .await?
            .is_some()
        {
            return Err(ServiceError::already_exists("User", &username));
        }

        let password_hash = Self::hash_password(&password)?;
        let user = self.state.users.create_user(username, password_hash).await?;
        Ok(user)
    }

    /// Checks a username/password pair against the store.
    ///
    /// # Errors
    /// Returns `ServiceError::InvalidCredentials` for an unknown username or a
    /// password mismatch; the two cases are indistinguishable to the caller.
    pub async fn authenticate_user(&self, username: &str, password: &str) -> ServiceResult<User> {
        let user = self
            .state
            .users
            .get_user_by_username(username)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        if !Self::verify_password(password, &user.password_hash)? {
            return Err(ServiceError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Function to hash a password before storing
    fn hash_password(password: &str) -> ServiceResult<String> {
        hash(password, DEFAULT_COST)
            .map_err(|e| ServiceError::internal_error(format!("Password hashing failed: {}", e)))
    }

    /// Function to verify a password against the stored hash
    fn verify_password(password: &str, hash: &str) -> ServiceResult<bool> {
        verify(password, hash).map_err(|e| {
            ServiceError::internal_error(format!("Password verification failed: {}", e))
        })
    }
}
