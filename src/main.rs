//src/main.rs

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::{AppConfig, AppState};
use crate::docs::ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG controla o nível; padrão: info para a aplicação
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("stock_dashboard=info")),
        )
        .with_target(false)
        .compact()
        .init();

    // Se a configuração ou a conexão falharem, a aplicação não deve iniciar.
    let config = AppConfig::from_env()?;
    let app_state = AppState::connect(&config).await?;

    // Uma rota por aba; cada chamada faz uma leitura nova no warehouse
    let dashboard_routes = Router::new()
        .route("/heatmap", get(handlers::dashboard::get_heatmap))
        .route("/alerts", get(handlers::dashboard::get_alerts))
        .route("/forecasts/options", get(handlers::dashboard::get_forecast_options))
        .route("/forecasts", post(handlers::dashboard::generate_forecast))
        .route("/reorders", get(handlers::dashboard::get_reorders))
        .route("/reorders/export", get(handlers::dashboard::export_reorders));

    let app = Router::new()
        .route("/", get(handlers::page::index))
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api", dashboard_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("🚀 Dashboard escutando em {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
