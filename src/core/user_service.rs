use crate::core::UserRepository;
use crate::domain::model::NewUser;
use crate::utils::error::Result;

pub const USER_NOT_FOUND: &str = "User not found";

/// Greets and registers users through an injected [`UserRepository`].
pub struct UserService<R: UserRepository> {
    repository: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// `"Hello, {name}!"` for a known id, [`USER_NOT_FOUND`] otherwise.
    pub async fn get_greeting(&self, id: i64) -> Result<String> {
        match self.repository.get_by_id(id).await? {
            Some(user) => Ok(format!("Hello, {}!", user.display_name())),
            None => {
                tracing::debug!(id, "user not found");
                Ok(USER_NOT_FOUND.to_string())
            }
        }
    }

    /// Returns whatever the repository reports for the save.
    pub async fn create_user(&self, name: &str) -> Result<bool> {
        let saved = self.repository.save(NewUser::named(name)).await?;
        tracing::debug!(name, saved, "create user");
        Ok(saved)
    }
}
