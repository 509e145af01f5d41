use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_cms::auth::adapter::outgoing::security::Argon2Hasher;
use portfolio_cms::config::{load_env_files, ServerConfig};
use portfolio_cms::content::application::domain::policies::UploadPolicy;
use portfolio_cms::shared::api::custom_json_config;
use portfolio_cms::shared::api::json_config::file_payload_config;
use portfolio_cms::{build_state, init_routes};

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let env_name = load_env_files();
    let config = ServerConfig::from_env().context("Invalid server configuration")?;

    let state = build_state(&config, Arc::new(Argon2Hasher::from_env()))
        .await
        .context("Could not prepare the admin account")?;

    let server_url = config.bind_address();
    info!(env = %env_name, address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .app_data(file_payload_config(UploadPolicy::largest_limit()))
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Could not bind {}", server_url))?
    .run()
    .await
    .context("Server stopped with an error")
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
