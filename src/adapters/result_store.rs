use crate::domain::ports::ResultStore;
use crate::utils::error::{AppError, Result};
use chrono::{DateTime, Utc};
use sqlite::{ConnectionThreadSafe, State};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Placeholder store type for a calculator built without persistence.
/// It has no values, so it can never be constructed.
#[derive(Debug)]
pub enum NoResultStore {}

impl ResultStore for NoResultStore {
    fn save(&self, _value: i64) -> Result<()> {
        match *self {}
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredResult {
    pub value: i64,
    pub recorded_at: DateTime<Utc>,
}

/// Keeps results in memory. Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResultStore {
    results: Arc<Mutex<Vec<StoredResult>>>,
}

impl InMemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> Vec<StoredResult> {
        self.results
            .lock()
            .map(|results| results.clone())
            .unwrap_or_default()
    }

    pub fn values(&self) -> Vec<i64> {
        self.results().into_iter().map(|r| r.value).collect()
    }
}

impl ResultStore for InMemoryResultStore {
    fn save(&self, value: i64) -> Result<()> {
        let mut results = self
            .results
            .lock()
            .map_err(|_| AppError::storage("result store lock poisoned"))?;
        results.push(StoredResult {
            value,
            recorded_at: Utc::now(),
        });
        Ok(())
    }
}

const CREATE_RESULTS_TABLE: &str = "create table if not exists results (\
    value integer not null, \
    recorded_at text not null)";

/// Stores results in a SQLite `results` table.
pub struct SqliteResultStore {
    connection: ConnectionThreadSafe,
}

impl SqliteResultStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = sqlite::Connection::open_thread_safe(path)?;
        Self::from_connection(connection)
    }

    pub fn in_memory() -> Result<Self> {
        Self::open(":memory:")
    }

    pub fn from_connection(connection: ConnectionThreadSafe) -> Result<Self> {
        connection.execute(CREATE_RESULTS_TABLE)?;
        tracing::debug!("SQLite results table ready");
        Ok(Self { connection })
    }

    /// Saved values in insertion order.
    pub fn values(&self) -> Result<Vec<i64>> {
        let mut statement = self
            .connection
            .prepare("select value from results order by rowid")?;
        let mut values = Vec::new();
        while statement.next()? == State::Row {
            values.push(statement.read::<i64, _>(0)?);
        }
        Ok(values)
    }

    pub fn count(&self) -> Result<i64> {
        let mut statement = self.connection.prepare("select count(*) from results")?;
        statement.next()?;
        Ok(statement.read::<i64, _>(0)?)
    }
}

impl ResultStore for SqliteResultStore {
    fn save(&self, value: i64) -> Result<()> {
        let recorded_at = Utc::now().to_rfc3339();
        let mut statement = self
            .connection
            .prepare("insert into results (value, recorded_at) values (?, ?)")?;
        statement.bind((1, value))?;
        statement.bind((2, recorded_at.as_str()))?;
        statement.next()?;
        Ok(())
    }
}
