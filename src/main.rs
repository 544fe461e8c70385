//! payroll-engine HTTP service.
//!
//! Environment:
//! - `PAYROLL_CONFIG_DIR`: configuration directory (default `./config/default`)
//! - `PAYROLL_HTTP_ADDR`: listen address (default `0.0.0.0:8080`)
//! - `RUST_LOG`: log filter (default `payroll_engine=info`)

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "payroll_engine=info".into()),
        )
        .init();

    let config_dir =
        std::env::var("PAYROLL_CONFIG_DIR").unwrap_or_else(|_| "./config/default".to_string());
    let http_addr =
        std::env::var("PAYROLL_HTTP_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let config = ConfigLoader::load(&config_dir)?;
    tracing::info!(
        "Starting payroll-engine {} with configuration '{}'",
        env!("CARGO_PKG_VERSION"),
        config.metadata().name
    );

    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    tracing::info!("payroll-engine HTTP listening on {http_addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
