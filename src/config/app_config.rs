use crate::domain::model::User;
use crate::utils::error::{AppError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const STORE_BACKENDS: [&str; 3] = ["none", "memory", "sqlite"];
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub store: StoreConfig,
    pub users: Vec<UserSeed>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            store: StoreConfig::default(),
            users: default_users(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: String,
    pub path: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
            path: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSeed {
    pub id: i64,
    pub name: String,
}

fn default_users() -> Vec<UserSeed> {
    vec![
        UserSeed {
            id: 1,
            name: "Alice".to_string(),
        },
        UserSeed {
            id: 2,
            name: "Bob".to_string(),
        },
    ]
}

/// Which result store the binary wires into the calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    None,
    Memory,
    Sqlite { path: String },
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AppError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RESULTS_DB})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AppError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn store_backend(&self) -> Result<StoreBackend> {
        match self.store.backend.as_str() {
            "none" => Ok(StoreBackend::None),
            "memory" => Ok(StoreBackend::Memory),
            "sqlite" => {
                let path = validation::validate_required_field("store.path", &self.store.path)?;
                Ok(StoreBackend::Sqlite { path: path.clone() })
            }
            other => Err(AppError::InvalidConfigValueError {
                field: "store.backend".to_string(),
                value: other.to_string(),
                reason: format!("Valid backends: {}", STORE_BACKENDS.join(", ")),
            }),
        }
    }

    pub fn log_format(&self) -> LogFormat {
        LogFormat::parse(&self.logging.format).unwrap_or_default()
    }

    pub fn seed_users(&self) -> Vec<User> {
        self.users
            .iter()
            .map(|seed| User::new(seed.id, seed.name.clone()))
            .collect()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_one_of("store.backend", &self.store.backend, &STORE_BACKENDS)?;
        if let StoreBackend::Sqlite { path } = self.store_backend()? {
            validation::validate_path("store.path", &path)?;
        }

        validation::validate_one_of("logging.format", &self.logging.format, &LOG_FORMATS)?;
        validation::validate_non_empty_string("logging.level", &self.logging.level)?;

        let ids: Vec<i64> = self.users.iter().map(|u| u.id).collect();
        for seed in &self.users {
            validation::validate_positive_id("users.id", seed.id)?;
            validation::validate_non_empty_string("users.name", &seed.name)?;
        }
        validation::validate_unique_ids("users.id", &ids)?;

        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
