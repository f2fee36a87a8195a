//! Curio API - AWS Lambda Runtime

use lambda_http::{run, Error};
use tracing::info;
use tracing_subscriber::EnvFilter;

use curio_app::{apply_layers, create_app, AppStores};
use curio_common::Config;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env().map_err(|e| Error::from(format!("Config error: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.rust_log))
        .json()
        .without_time()
        .init();

    info!(store_provider = %config.store_provider, "Initializing Curio API Lambda");

    let stores = AppStores::connect(&config)
        .await
        .map_err(|e| Error::from(format!("Store initialization error: {:#}", e)))?;

    let app = apply_layers(create_app(stores), config.cors_allowed_origins.as_deref());

    info!("Curio API Lambda ready to serve requests");

    run(app).await
}
