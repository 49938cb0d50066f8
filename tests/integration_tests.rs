use calc_services::utils::validation::Validate;
use calc_services::{
    AppConfig, AppError, Calculator, InMemoryUserRepository, Operation, Outcome, RecordingLogger,
    ServiceEngine, SqliteResultStore, StoreBackend, UserService,
};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[tokio::test]
async fn test_end_to_end_with_toml_config_and_sqlite() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("results.db");

    let mut config_file = NamedTempFile::new().unwrap();
    write!(
        config_file,
        r#"
[logging]
level = "warn"

[store]
backend = "sqlite"
path = "{}"

[[users]]
id = 1
name = "Alice"

[[users]]
id = 2
name = "Bob"
"#,
        db_path.to_str().unwrap().replace('\\', "/")
    )
    .unwrap();

    let config = AppConfig::from_file(config_file.path()).unwrap();
    config.validate().unwrap();

    let path = match config.store_backend().unwrap() {
        StoreBackend::Sqlite { path } => path,
        other => panic!("unexpected backend: {:?}", other),
    };

    let logger = RecordingLogger::new();
    let engine = ServiceEngine::new(
        Calculator::with_store(logger.clone(), SqliteResultStore::open(&path).unwrap()),
        UserService::new(InMemoryUserRepository::with_users(config.seed_users())),
    );

    assert_eq!(
        engine.run(Operation::Add { a: 2, b: 3 }).await.unwrap(),
        Outcome::Value { value: 5 }
    );
    assert!(matches!(
        engine.run(Operation::Divide { a: 10, b: 0 }).await,
        Err(AppError::DivisionByZero)
    ));
    assert_eq!(
        engine.run(Operation::Greet { id: 1 }).await.unwrap(),
        Outcome::Greeting {
            message: "Hello, Alice!".to_string()
        }
    );
    assert_eq!(
        engine.run(Operation::Greet { id: 99 }).await.unwrap(),
        Outcome::Greeting {
            message: "User not found".to_string()
        }
    );

    assert_eq!(
        logger.messages(),
        vec!["Adding 2 and 3", "Attempted division by zero"]
    );

    drop(engine);
    let store = SqliteResultStore::open(&path).unwrap();
    assert_eq!(store.values().unwrap(), vec![5]);
}

#[tokio::test]
async fn test_engine_without_store() {
    let config = AppConfig::from_toml_str("[store]\nbackend = \"none\"\n").unwrap();
    assert_eq!(config.store_backend().unwrap(), StoreBackend::None);

    let logger = RecordingLogger::new();
    let engine = ServiceEngine::new(
        Calculator::new(logger.clone()),
        UserService::new(InMemoryUserRepository::with_users(config.seed_users())),
    );

    let outcome = engine.run(Operation::Divide { a: -7, b: 2 }).await.unwrap();
    assert_eq!(outcome.to_string(), "-3");
    assert_eq!(logger.messages(), vec!["Dividing -7 by 2"]);

    let created = engine
        .run(Operation::CreateUser {
            name: "Charlie".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(
        created,
        Outcome::Created {
            name: "Charlie".to_string(),
            created: true
        }
    );
    assert_eq!(
        engine.run(Operation::Greet { id: 3 }).await.unwrap().to_string(),
        "Hello, Charlie!"
    );
}

#[tokio::test]
async fn test_create_user_after_max_id_seed_is_storage_error() {
    let config =
        AppConfig::from_toml_str("[[users]]\nid = 9223372036854775807\nname = \"Max\"\n").unwrap();
    config.validate().unwrap();

    let service = UserService::new(InMemoryUserRepository::with_users(config.seed_users()));

    let result = service.create_user("Charlie").await;

    assert!(matches!(result, Err(AppError::StorageError { .. })));
    assert_eq!(service.get_greeting(i64::MAX).await.unwrap(), "Hello, Max!");
}
