pub mod calculator;
pub mod engine;
pub mod user_service;

pub use crate::domain::model::{NewUser, User};
pub use crate::domain::ports::{Logger, ResultStore, UserRepository};
pub use crate::utils::error::Result;
