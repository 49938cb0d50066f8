// Adapters layer: concrete implementations of the domain ports.

pub mod logger;
pub mod result_store;
pub mod user_repository;

pub use logger::{NoopLogger, RecordingLogger, TracingLogger};
pub use result_store::{InMemoryResultStore, NoResultStore, SqliteResultStore, StoredResult};
pub use user_repository::{InMemoryUserRepository, StubUserRepository};
