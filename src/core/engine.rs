use crate::core::calculator::Calculator;
use crate::core::user_service::UserService;
use crate::core::{Logger, ResultStore, UserRepository};
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Add { a: i64, b: i64 },
    Divide { a: i64, b: i64 },
    Greet { id: i64 },
    CreateUser { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Value { value: i64 },
    Greeting { message: String },
    Created { name: String, created: bool },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value { value } => write!(f, "{}", value),
            Self::Greeting { message } => write!(f, "{}", message),
            Self::Created { name, created: true } => write!(f, "Created user {}", name),
            Self::Created { name, created: false } => {
                write!(f, "Repository did not store user {}", name)
            }
        }
    }
}

/// Dispatches operations to the calculator and the user service.
pub struct ServiceEngine<L: Logger, S: ResultStore, R: UserRepository> {
    calculator: Calculator<L, S>,
    users: UserService<R>,
}

impl<L: Logger, S: ResultStore, R: UserRepository> ServiceEngine<L, S, R> {
    pub fn new(calculator: Calculator<L, S>, users: UserService<R>) -> Self {
        Self { calculator, users }
    }

    pub async fn run(&self, operation: Operation) -> Result<Outcome> {
        tracing::debug!(?operation, "running operation");

        let outcome = match operation {
            Operation::Add { a, b } => Outcome::Value {
                value: self.calculator.add(a, b)?,
            },
            Operation::Divide { a, b } => Outcome::Value {
                value: self.calculator.divide(a, b)?,
            },
            Operation::Greet { id } => Outcome::Greeting {
                message: self.users.get_greeting(id).await?,
            },
            Operation::CreateUser { name } => {
                let created = self.users.create_user(&name).await?;
                Outcome::Created { name, created }
            }
        };

        Ok(outcome)
    }
}
