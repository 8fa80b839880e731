#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use std::process::ExitCode;

use leptos::config::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServeError;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine; real deployments set variables directly.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "folio stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServeError> {
    let config = ServerConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| ServeError::Leptos(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    let addr = config.bind_addr(leptos_options.site_addr);
    leptos_options.site_addr = addr;

    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;

    tracing::info!(%addr, "folio listening");
    axum::serve(listener, app).await?;
    Ok(())
}
