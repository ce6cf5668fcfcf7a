// src/models/dashboard.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::stock::{Alert, ReorderRecommendation};

// Escala divergente: vermelho (poucos dias) -> amarelo -> verde (muitos dias)
pub const HEATMAP_COLOR_SCALE: &str = "RdYlGn";
pub const HEATMAP_COLOR_STOPS: [(f64, &str); 5] = [
    (0.0, "#a50026"),
    (0.25, "#f46d43"),
    (0.5, "#ffffbf"),
    (0.75, "#66bd63"),
    (1.0, "#006837"),
];

// Horizonte de previsão devolvido pela procedure
pub const FORECAST_HORIZON_DAYS: u32 = 14;

// 1. Heatmap (item x local)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapGrid {
    pub items: Vec<String>,     // Linhas
    pub locations: Vec<String>, // Colunas
    // cells[linha][coluna]; `null` = combinação ausente no snapshot
    #[schema(value_type = Vec<Vec<Option<f64>>>)]
    pub cells: Vec<Vec<Option<Decimal>>>,
    pub min: Option<Decimal>,
    pub max: Option<Decimal>,
    pub color_scale: String,
    // Pontos da escala (posição 0..1, cor) prontos para o gráfico
    #[schema(value_type = Vec<Object>)]
    pub color_stops: Vec<(f64, String)>,
}

#[cfg(test)]
impl HeatmapGrid {
    pub fn cell(&self, item: &str, location: &str) -> Option<Decimal> {
        let row = self.items.iter().position(|i| i == item)?;
        let col = self.locations.iter().position(|l| l == location)?;
        self.cells[row][col]
    }

    pub fn filled_cells(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }
}

// 2. Alertas
// Resultado do service (sem textos de interface)
#[derive(Debug, Clone)]
pub enum AlertsOverview {
    NoAlerts,
    Alerts {
        critical_count: usize,
        alerts: Vec<Alert>,
    },
}

// O que vai para o navegador
#[derive(Debug, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum AlertsView {
    Empty {
        message: String,
    },
    Populated {
        #[serde(rename = "criticalCount")]
        critical_count: usize,
        alerts: Vec<Alert>,
    },
}

impl AlertsView {
    pub fn new(overview: AlertsOverview, empty_message: &str) -> Self {
        match overview {
            AlertsOverview::NoAlerts => AlertsView::Empty {
                message: empty_message.to_string(),
            },
            AlertsOverview::Alerts { critical_count, alerts } => AlertsView::Populated {
                critical_count,
                alerts,
            },
        }
    }
}

// 3. Previsão
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSelectors {
    pub locations: Vec<String>,
    pub selected_location: Option<String>,
    pub items: Vec<String>, // Itens do local selecionado
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

#[derive(Debug, Clone)]
pub enum ForecastOutcome {
    InsufficientData,
    Series(Vec<SeriesPoint>), // Ordenada por data, crescente
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ForecastView {
    Ready {
        location: String,
        item: String,
        #[serde(rename = "horizonDays")]
        horizon_days: u32,
        series: Vec<SeriesPoint>,
    },
    InsufficientData {
        message: String,
    },
}

impl ForecastView {
    pub fn new(outcome: ForecastOutcome, location: String, item: String, warning: &str) -> Self {
        match outcome {
            ForecastOutcome::InsufficientData => ForecastView::InsufficientData {
                message: warning.to_string(),
            },
            ForecastOutcome::Series(series) => ForecastView::Ready {
                location,
                item,
                horizon_days: FORECAST_HORIZON_DAYS,
                series,
            },
        }
    }
}

// 4. Lista de Compras
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReorderSummary {
    pub items_to_reorder: usize,
    pub total_units: Decimal,            // Soma exata
    pub total_units_formatted: String,   // Ex: "12,346"
    pub recommendations: Vec<ReorderRecommendation>,
}
