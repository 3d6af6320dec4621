//! HireHub Server — job board platform.
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::EnvFilter;

use hirehub_core::config::AppConfig;
use hirehub_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration for the selected environment.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("HIREHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize the tracing subscriber from logging configuration.
fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    if config.logging.format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    let db = hirehub_database::DatabasePool::connect(&config.database).await?;
    hirehub_database::migration::run_migrations(db.pool()).await?;

    hirehub_api::run_server(config, db.into_pool()).await
}
