use crate::domain::model::{NewUser, User};
use crate::domain::ports::UserRepository;
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory repository. Clones share the same map.
///
/// New ids are `max(existing id) + 1`, so an id is never handed out twice
/// even when the seed data has gaps.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<i64, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users<I>(users: I) -> Self
    where
        I: IntoIterator<Item = User>,
    {
        let users = users.into_iter().map(|user| (user.id, user)).collect();
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    /// Repository holding Alice (1) and Bob (2).
    pub fn seeded() -> Self {
        Self::with_users([User::new(1, "Alice"), User::new(2, "Bob")])
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    pub async fn find_by_name(&self, name: &str) -> Option<User> {
        self.users
            .read()
            .await
            .values()
            .find(|user| user.name.as_deref() == Some(name))
            .cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn save(&self, user: NewUser) -> Result<bool> {
        let mut users = self.users.write().await;
        let id = match users.keys().next_back() {
            Some(last) => last
                .checked_add(1)
                .ok_or_else(|| AppError::storage("user id space exhausted"))?,
            None => 1,
        };
        tracing::debug!(id, "assigning id to new user");
        users.insert(id, user.into_user(id));
        Ok(true)
    }
}

/// Canned responses: one known user, a fixed answer for saves.
#[derive(Debug, Clone)]
pub struct StubUserRepository {
    user: User,
    save_result: bool,
}

impl StubUserRepository {
    pub fn new(user: User) -> Self {
        Self {
            user,
            save_result: true,
        }
    }

    pub fn with_save_result(mut self, save_result: bool) -> Self {
        self.save_result = save_result;
        self
    }
}

impl Default for StubUserRepository {
    fn default() -> Self {
        Self::new(User::new(1, "Alice"))
    }
}

#[async_trait]
impl UserRepository for StubUserRepository {
    async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        if id == self.user.id {
            return Ok(Some(self.user.clone()));
        }
        Ok(None)
    }

    async fn save(&self, _user: NewUser) -> Result<bool> {
        Ok(self.save_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_repository_contains_alice_and_bob() {
        let repository = InMemoryUserRepository::seeded();

        assert_eq!(
            repository.get_by_id(1).await.unwrap(),
            Some(User::new(1, "Alice"))
        );
        assert_eq!(
            repository.get_by_id(2).await.unwrap(),
            Some(User::new(2, "Bob"))
        );
        assert_eq!(repository.get_by_id(99).await.unwrap(), None);
        assert_eq!(repository.len().await, 2);
    }

    #[tokio::test]
    async fn test_save_assigns_next_id() {
        let repository = InMemoryUserRepository::seeded();

        assert!(repository.save(NewUser::named("Charlie")).await.unwrap());

        let charlie = repository.get_by_id(3).await.unwrap().unwrap();
        assert_eq!(charlie.name.as_deref(), Some("Charlie"));
    }

    #[tokio::test]
    async fn test_save_never_reuses_ids_after_gaps() {
        let repository = InMemoryUserRepository::with_users([User::new(5, "Eve")]);

        repository.save(NewUser::named("Frank")).await.unwrap();

        assert_eq!(repository.len().await, 2);
        assert_eq!(repository.find_by_name("Frank").await.unwrap().id, 6);
        assert_eq!(repository.get_by_id(5).await.unwrap().unwrap().display_name(), "Eve");
    }

    #[tokio::test]
    async fn test_empty_repository_starts_at_one() {
        let repository = InMemoryUserRepository::new();
        assert!(repository.is_empty().await);

        repository.save(NewUser::default()).await.unwrap();

        let user = repository.get_by_id(1).await.unwrap().unwrap();
        assert_eq!(user.name, None);
    }

    #[tokio::test]
    async fn test_save_after_max_id_reports_exhausted_id_space() {
        let repository = InMemoryUserRepository::with_users([User::new(i64::MAX, "Max")]);

        let result = repository.save(NewUser::named("Charlie")).await;

        assert!(matches!(result, Err(AppError::StorageError { .. })));
        assert_eq!(repository.len().await, 1);
    }

    #[tokio::test]
    async fn test_stub_repository_canned_responses() {
        let repository = StubUserRepository::default().with_save_result(false);

        assert_eq!(
            repository.get_by_id(1).await.unwrap(),
            Some(User::new(1, "Alice"))
        );
        assert_eq!(repository.get_by_id(2).await.unwrap(), None);
        assert!(!repository.save(NewUser::named("Bob")).await.unwrap());
    }
}
