use crate::adapters::NoResultStore;
use crate::core::{Logger, ResultStore};
use crate::utils::error::{AppError, Result};

/// Integer calculator that reports each step to an injected [`Logger`] and,
/// when a [`ResultStore`] is attached, saves every successful result.
///
/// Ordering per call is always log, compute, save. Failed calls never reach
/// the store.
pub struct Calculator<L: Logger, S: ResultStore = NoResultStore> {
    logger: L,
    store: Option<S>,
}

impl<L: Logger> Calculator<L> {
    /// Calculator without persistence.
    pub fn new(logger: L) -> Self {
        Self {
            logger,
            store: None,
        }
    }
}

impl<L: Logger, S: ResultStore> Calculator<L, S> {
    pub fn with_store(logger: L, store: S) -> Self {
        Self {
            logger,
            store: Some(store),
        }
    }

    /// Calculator whose store may be absent, e.g. when chosen from configuration.
    pub fn with_optional_store(logger: L, store: Option<S>) -> Self {
        Self { logger, store }
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    pub fn add(&self, a: i64, b: i64) -> Result<i64> {
        self.logger.log(&format!("Adding {} and {}", a, b));
        let result = a.checked_add(b).ok_or_else(|| AppError::overflow("add"))?;
        self.persist(result)?;
        Ok(result)
    }

    /// Truncating integer division.
    pub fn divide(&self, a: i64, b: i64) -> Result<i64> {
        if b == 0 {
            self.logger.log("Attempted division by zero");
            return Err(AppError::DivisionByZero);
        }
        self.logger.log(&format!("Dividing {} by {}", a, b));
        // i64::MIN / -1
        let result = a.checked_div(b).ok_or_else(|| AppError::overflow("divide"))?;
        self.persist(result)?;
        Ok(result)
    }

    fn persist(&self, value: i64) -> Result<()> {
        if let Some(store) = &self.store {
            tracing::debug!(value, "saving result");
            store.save(value)?;
        }
        Ok(())
    }
}
