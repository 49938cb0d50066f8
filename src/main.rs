use anyhow::Context;
use calc_services::utils::error::ErrorSeverity;
use calc_services::utils::{logger, validation::Validate};
use calc_services::{
    AppConfig, Calculator, CliConfig, Command, InMemoryResultStore, InMemoryUserRepository,
    Operation, ResultStore, ServiceEngine, SqliteResultStore, StoreBackend, TracingLogger,
    UserService,
};
use clap::Parser;

fn load_config(path: Option<&str>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path)),
        None => Ok(AppConfig::default()),
    }
}

fn build_store(backend: &StoreBackend) -> anyhow::Result<Option<Box<dyn ResultStore>>> {
    let store: Option<Box<dyn ResultStore>> = match backend {
        StoreBackend::None => None,
        StoreBackend::Memory => Some(Box::new(InMemoryResultStore::new())),
        StoreBackend::Sqlite { path } => Some(Box::new(
            SqliteResultStore::open(path)
                .with_context(|| format!("Failed to open results database '{}'", path))?,
        )),
    };
    Ok(store)
}

fn to_operation(command: Command) -> Operation {
    match command {
        Command::Add { a, b } => Operation::Add { a, b },
        Command::Divide { a, b } => Operation::Divide { a, b },
        Command::Greet { id } => Operation::Greet { id },
        Command::CreateUser { name } => Operation::CreateUser { name },
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, &config.logging.level, config.log_format());

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let backend = config.store_backend()?;
    tracing::debug!(?backend, "selected result store");

    let calculator = Calculator::with_optional_store(TracingLogger::new(), build_store(&backend)?);
    let users = UserService::new(InMemoryUserRepository::with_users(config.seed_users()));
    let engine = ServiceEngine::new(calculator, users);

    match engine.run(to_operation(cli.command)).await {
        Ok(outcome) => {
            if cli.json {
                println!("{}", serde_json::to_string(&outcome)?);
            } else {
                println!("{}", outcome);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Operation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
