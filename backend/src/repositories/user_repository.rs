//! Repository for registered users.
//!
//! Accounts are held in process memory for the lifetime of the server; there
//! is no durable user store.

use crate::storage::models::User;
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Store contract for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a new user with the next available id.
    async fn create_user(&self, username: String, password_hash: String) -> Result<User>;

    /// Retrieves a user by their username.
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
}

/// In-memory user store.
pub struct InMemoryUserRepository {
    inner: Mutex<UserTable>,
}

struct UserTable {
    users: Vec<User>,
    // Ids come from this counter, never from the vector length; they are
    // never reused.
    next_id: i64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(UserTable {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, username: String, password_hash: String) -> Result<User> {
        let mut table = self.inner.lock().await;
        let user = User {
            id: table.next_id,
            username,
            password_hash,
        };
        table.next_id += 1;
        table.users.push(user.clone());
        Ok(user)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let table = self.inner.lock().await;
        Ok(table.users.iter().find(|u| u.username == username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo
            .create_user("alice".to_string(), "hash-a".to_string())
            .await
            .unwrap();
        let second = repo
            .create_user("bob".to_string(), "hash-b".to_string())
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn finds_users_by_username() {
        let repo = InMemoryUserRepository::new();
        repo.create_user("alice".to_string(), "hash".to_string())
            .await
            .unwrap();

        let found = repo.get_user_by_username("alice").await.unwrap();
        assert_eq!(found.unwrap().username, "alice");

        let missing = repo.get_user_by_username("mallory").await.unwrap();
        assert!(missing.is_none());
    }
}
