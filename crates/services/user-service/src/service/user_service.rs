//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user-related use cases only.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{NewUser, User, UserPayload};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Create a user; any id in the payload is ignored
    async fn create_user(&self, payload: UserPayload) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Apply the payload's username and email to an existing user
    async fn update_user(&self, id: i32, payload: UserPayload) -> AppResult<User>;

    /// Delete user by ID
    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.find_all().await
    }

    async fn create_user(&self, payload: UserPayload) -> AppResult<User> {
        let user = self.repo.create(NewUser::from(payload)).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_user(&self, id: i32, payload: UserPayload) -> AppResult<User> {
        // Read and write are separate statements; a concurrent update of the
        // same id wins or loses at the store's discretion.
        let mut user = self.repo.find_by_id(id).await?.ok_or_not_found()?;
        user.apply(payload);

        let user = self.repo.save(user).await?;
        tracing::info!(user_id = user.id, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        if !self.repo.exists_by_id(id).await? {
            tracing::debug!(user_id = id, "Delete requested for unknown user");
            return Err(AppError::NotFound);
        }

        self.repo.delete_by_id(id).await?;
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    use crate::repository::MockUserRepository;

    fn alice(id: i32) -> User {
        User::new(id, "alice".to_string(), "a@x.com".to_string())
    }

    fn service(repo: MockUserRepository) -> UserManager {
        UserManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_list_users_empty() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_all().returning(|| Ok(vec![]));

        let users = service(repo).list_users().await.unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_create_user_ignores_payload_id() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .withf(|user| user.username == "alice" && user.email == "a@x.com")
            .returning(|user| Ok(User::new(1, user.username, user.email)));

        let mut payload = UserPayload::new("alice", "a@x.com");
        payload.id = Some(42);

        let user = service(repo).create_user(payload).await.unwrap();
        assert_eq!(user, alice(1));
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(3))
            .returning(|id| Ok(Some(alice(id))));

        let user = service(repo).get_user(3).await.unwrap();
        assert_eq!(user.id, 3);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(repo).get_user(3).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_user_applies_payload() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(5))
            .returning(|id| Ok(Some(alice(id))));
        repo.expect_save()
            .withf(|user| user.id == 5 && user.username == "bob" && user.email == "b@x.com")
            .times(1)
            .returning(Ok);

        let mut payload = UserPayload::new("bob", "b@x.com");
        payload.id = Some(99);

        let user = service(repo).update_user(5, payload).await.unwrap();
        assert_eq!(user, User::new(5, "bob".to_string(), "b@x.com".to_string()));
    }

    #[tokio::test]
    async fn test_update_user_not_found_skips_save() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_save().never();

        let result = service(repo)
            .update_user(5, UserPayload::new("bob", "b@x.com"))
            .await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_id().with(eq(2)).returning(|_| Ok(true));
        repo.expect_delete_by_id()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(()));

        assert!(service(repo).delete_user(2).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_user_not_found_leaves_store_alone() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_id().returning(|_| Ok(false));
        repo.expect_delete_by_id().never();

        let result = service(repo).delete_user(2).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
