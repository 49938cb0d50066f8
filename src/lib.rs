pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{
    InMemoryResultStore, InMemoryUserRepository, NoopLogger, RecordingLogger, SqliteResultStore,
    StubUserRepository, TracingLogger,
};
pub use config::{AppConfig, StoreBackend};
pub use crate::core::{
    calculator::Calculator,
    engine::{Operation, Outcome, ServiceEngine},
    user_service::UserService,
};
pub use domain::model::{NewUser, User};
pub use domain::ports::{Logger, ResultStore, UserRepository};
pub use utils::error::{AppError, Result};
