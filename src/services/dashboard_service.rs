// src/services/dashboard_service.rs

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use rust_decimal::Decimal;
use crate::{
    common::{error::AppError, format::format_grouped_integer},
    db::StockRepository,
    models::{
        dashboard::{
            AlertsOverview, ForecastOutcome, ForecastSelectors, HeatmapGrid, ReorderSummary,
            SeriesPoint, HEATMAP_COLOR_SCALE, HEATMAP_COLOR_STOPS,
        },
        stock::{Alert, ForecastPoint, HealthMetric, ReorderRecommendation},
    },
};

// Quantos alertas a aba mostra
pub const ALERTS_LIMIT: i64 = 50;

// Cada método faz uma leitura nova no warehouse e devolve os dados já
// no formato da aba. Falhas do warehouse sobem sem retry.
#[derive(Clone)]
pub struct DashboardService {
    repo: Arc<dyn StockRepository>,
}

impl DashboardService {
    pub fn new(repo: Arc<dyn StockRepository>) -> Self {
        Self { repo }
    }

    // --- ABA 1: Heatmap ---
    pub async fn get_heatmap(&self) -> Result<HeatmapGrid, AppError> {
        let metrics = self.repo.get_health_metrics().await?;
        tracing::debug!("Heatmap: {} linhas de stock_health_metrics", metrics.len());
        Ok(pivot_health_metrics(&metrics))
    }

    // --- ABA 2: Alertas ---
    pub async fn get_alerts(&self) -> Result<AlertsOverview, AppError> {
        let alerts = self.repo.get_recent_alerts(ALERTS_LIMIT).await?;
        Ok(summarize_alerts(alerts))
    }

    // --- ABA 3: Previsão ---
    pub async fn get_forecast_selectors(
        &self,
        location: Option<&str>,
    ) -> Result<ForecastSelectors, AppError> {
        let metrics = self.repo.get_health_metrics().await?;
        build_forecast_selectors(&metrics, location)
    }

    pub async fn generate_forecast(
        &self,
        location: &str,
        item: &str,
    ) -> Result<ForecastOutcome, AppError> {
        let points = self.repo.forecast_demand(location, item).await?;
        tracing::info!(
            "Previsão gerada para '{}' em '{}': {} pontos",
            item,
            location,
            points.len()
        );
        Ok(forecast_series(points))
    }

    // --- ABA 4: Lista de Compras ---
    pub async fn get_reorder_summary(&self) -> Result<ReorderSummary, AppError> {
        let rows = self.repo.get_reorder_recommendations().await?;
        Ok(summarize_reorders(rows))
    }
}

// Pivot (item x local). Em chave duplicada o PRIMEIRO valor não nulo vence e
// os demais são descartados em silêncio. Linhas com NULL entram nos eixos,
// mas a célula fica vazia.
pub fn pivot_health_metrics(metrics: &[HealthMetric]) -> HeatmapGrid {
    let mut values: BTreeMap<(&str, &str), Decimal> = BTreeMap::new();
    let mut items = BTreeSet::new();
    let mut locations = BTreeSet::new();

    for m in metrics {
        items.insert(m.item_name.as_str());
        locations.insert(m.location.as_str());
        if let Some(days) = m.days_until_stockout {
            values
                .entry((m.item_name.as_str(), m.location.as_str()))
                .or_insert(days);
        }
    }

    let cells: Vec<Vec<Option<Decimal>>> = items
        .iter()
        .map(|item| {
            locations
                .iter()
                .map(|location| values.get(&(*item, *location)).copied())
                .collect()
        })
        .collect();

    // Limites da escala de cores vêm dos próprios dados
    let min = values.values().min().copied();
    let max = values.values().max().copied();

    HeatmapGrid {
        items: items.into_iter().map(String::from).collect(),
        locations: locations.into_iter().map(String::from).collect(),
        cells,
        min,
        max,
        color_scale: HEATMAP_COLOR_SCALE.to_string(),
        color_stops: HEATMAP_COLOR_STOPS
            .iter()
            .map(|(at, color)| (*at, color.to_string()))
            .collect(),
    }
}

pub fn summarize_alerts(alerts: Vec<Alert>) -> AlertsOverview {
    if alerts.is_empty() {
        return AlertsOverview::NoAlerts;
    }

    let critical_count = alerts
        .iter()
        .filter(|a| a.stock_status.is_critical())
        .count();

    AlertsOverview::Alerts { critical_count, alerts }
}

// Seletores dependentes: locais (ordem de aparição) e os itens do local escolhido.
// Sem local pedido, o primeiro da lista fica selecionado.
pub fn build_forecast_selectors(
    metrics: &[HealthMetric],
    location: Option<&str>,
) -> Result<ForecastSelectors, AppError> {
    let locations = distinct(metrics.iter().map(|m| m.location.as_str()));

    let selected = match location {
        Some(requested) => {
            if !locations.iter().any(|l| l == requested) {
                return Err(AppError::UnknownLocation(requested.to_string()));
            }
            Some(requested.to_string())
        }
        None => locations.first().cloned(),
    };

    let items = match &selected {
        Some(selected) => distinct(
            metrics
                .iter()
                .filter(|m| &m.location == selected)
                .map(|m| m.item_name.as_str()),
        ),
        None => Vec::new(),
    };

    Ok(ForecastSelectors {
        locations,
        selected_location: selected,
        items,
    })
}

// Zero linhas não é erro: é histórico insuficiente.
pub fn forecast_series(mut points: Vec<ForecastPoint>) -> ForecastOutcome {
    if points.is_empty() {
        return ForecastOutcome::InsufficientData;
    }

    points.sort_by_key(|p| p.forecast_date);
    ForecastOutcome::Series(
        points
            .into_iter()
            .map(|p| SeriesPoint {
                date: p.forecast_date,
                value: p.predicted_usage,
            })
            .collect(),
    )
}

pub fn summarize_reorders(recommendations: Vec<ReorderRecommendation>) -> ReorderSummary {
    let total_units: Decimal = recommendations
        .iter()
        .map(|r| r.recommended_reorder_qty)
        .sum();

    ReorderSummary {
        items_to_reorder: recommendations.len(),
        total_units,
        total_units_formatted: format_grouped_integer(total_units),
        recommendations,
    }
}

// Valores distintos, preservando a ordem da primeira aparição
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(String::from)
        .collect()
}
