// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Dashboard ---
        handlers::dashboard::get_heatmap,
        handlers::dashboard::get_alerts,
        handlers::dashboard::get_forecast_options,
        handlers::dashboard::generate_forecast,
        handlers::dashboard::get_reorders,
        handlers::dashboard::export_reorders,
    ),
    components(
        schemas(
            // --- Warehouse ---
            models::stock::HealthMetric,
            models::stock::Alert,
            models::stock::ForecastPoint,
            models::stock::ReorderRecommendation,

            // --- Views ---
            models::dashboard::HeatmapGrid,
            models::dashboard::AlertsView,
            models::dashboard::ForecastSelectors,
            models::dashboard::SeriesPoint,
            models::dashboard::ForecastView,
            models::dashboard::ReorderSummary,

            // --- Payloads ---
            handlers::dashboard::GenerateForecastPayload,
        )
    ),
    tags(
        (name = "Dashboard", description = "Heatmap, Alertas, Previsões e Lista de Compras")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_dashboard_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/heatmap",
            "/api/alerts",
            "/api/forecasts/options",
            "/api/forecasts",
            "/api/reorders",
            "/api/reorders/export",
        ] {
            assert!(doc.paths.paths.contains_key(path), "rota sem documentação: {}", path);
        }
    }
}
