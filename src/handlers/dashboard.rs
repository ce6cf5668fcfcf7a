// src/handlers/dashboard.rs

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
    models::dashboard::{AlertsView, ForecastSelectors, ForecastView, HeatmapGrid, ReorderSummary},
    services::export_service::{CSV_CONTENT_TYPE, REORDER_CSV_FILENAME},
};

// GET /api/heatmap
#[utoipa::path(
    get,
    path = "/api/heatmap",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Dias até a ruptura por item x local", body = HeatmapGrid),
        (status = 500, description = "Falha ao ler o warehouse")
    )
)]
pub async fn get_heatmap(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {

    let grid = app_state.dashboard_service
        .get_heatmap()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(grid)))
}

// GET /api/alerts
#[utoipa::path(
    get,
    path = "/api/alerts",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Os 50 alertas mais recentes, ou a mensagem de lista vazia", body = AlertsView),
        (status = 500, description = "Falha ao ler o warehouse")
    )
)]
pub async fn get_alerts(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {

    let overview = app_state.dashboard_service
        .get_alerts()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let view = AlertsView::new(overview, app_state.i18n_store.get(&locale, "alerts.empty"));

    Ok((StatusCode::OK, Json(view)))
}

// ---
// Query: seletores da aba de previsão
// ---
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ForecastOptionsQuery {
    /// Local escolhido; sem ele, o primeiro local fica selecionado
    pub location: Option<String>,
}

// GET /api/forecasts/options
#[utoipa::path(
    get,
    path = "/api/forecasts/options",
    tag = "Dashboard",
    params(ForecastOptionsQuery),
    responses(
        (status = 200, description = "Locais e itens disponíveis para previsão", body = ForecastSelectors),
        (status = 404, description = "Local não encontrado"),
        (status = 500, description = "Falha ao ler o warehouse")
    )
)]
pub async fn get_forecast_options(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<ForecastOptionsQuery>,
) -> Result<impl IntoResponse, ApiError> {

    let selectors = app_state.dashboard_service
        .get_forecast_selectors(query.location.as_deref())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(selectors)))
}

// ---
// Payload: GenerateForecast (o botão "Generate Forecast")
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenerateForecastPayload {
    #[validate(length(min = 1, message = "Location is required."))]
    pub location: String,

    #[validate(length(min = 1, message = "Item is required."))]
    pub item: String,
}

// POST /api/forecasts
#[utoipa::path(
    post,
    path = "/api/forecasts",
    tag = "Dashboard",
    request_body = GenerateForecastPayload,
    responses(
        (status = 200, description = "Série prevista, ou aviso de histórico insuficiente", body = ForecastView),
        (status = 400, description = "Dados inválidos"),
        (status = 500, description = "Falha ao ler o warehouse")
    )
)]
pub async fn generate_forecast(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<GenerateForecastPayload>,
) -> Result<impl IntoResponse, ApiError> {

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let outcome = app_state.dashboard_service
        .generate_forecast(&payload.location, &payload.item)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let view = ForecastView::new(
        outcome,
        payload.location,
        payload.item,
        app_state.i18n_store.get(&locale, "forecast.insufficient_data"),
    );

    Ok((StatusCode::OK, Json(view)))
}

// GET /api/reorders
#[utoipa::path(
    get,
    path = "/api/reorders",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Recomendações de compra com totais", body = ReorderSummary),
        (status = 500, description = "Falha ao ler o warehouse")
    )
)]
pub async fn get_reorders(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {

    let summary = app_state.dashboard_service
        .get_reorder_summary()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(summary)))
}

// GET /api/reorders/export
#[utoipa::path(
    get,
    path = "/api/reorders/export",
    tag = "Dashboard",
    responses(
        (status = 200, description = "reorder_list.csv", content_type = "text/csv", body = String),
        (status = 500, description = "Falha ao ler o warehouse")
    )
)]
pub async fn export_reorders(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<Response, ApiError> {

    let csv_bytes = app_state.export_service
        .export_reorders_csv()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    // O navegador baixa como arquivo
    let headers = [
        (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
        (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", REORDER_CSV_FILENAME)),
    ];

    Ok((headers, csv_bytes).into_response())
}
