use crate::domain::model::{NewUser, User};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Sink for diagnostic messages emitted by the services.
#[cfg_attr(test, mockall::automock)]
pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
}

/// Persists computation results.
#[cfg_attr(test, mockall::automock)]
pub trait ResultStore: Send + Sync {
    fn save(&self, value: i64) -> Result<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_by_id(&self, id: i64) -> Result<Option<User>>;
    /// Returns `true` when the user was stored. The repository assigns the id.
    async fn save(&self, user: NewUser) -> Result<bool>;
}

impl<T: Logger + ?Sized> Logger for std::sync::Arc<T> {
    fn log(&self, message: &str) {
        (**self).log(message)
    }
}

impl<T: ResultStore + ?Sized> ResultStore for std::sync::Arc<T> {
    fn save(&self, value: i64) -> Result<()> {
        (**self).save(value)
    }
}

impl<T: ResultStore + ?Sized> ResultStore for Box<T> {
    fn save(&self, value: i64) -> Result<()> {
        (**self).save(value)
    }
}

#[async_trait]
impl<T: UserRepository + ?Sized> UserRepository for std::sync::Arc<T> {
    async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        (**self).get_by_id(id).await
    }

    async fn save(&self, user: NewUser) -> Result<bool> {
        (**self).save(user).await
    }
}
