// src/models/stock.rs

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// --- 1. Saúde do Estoque (tabela 'stock_health_metrics') ---
// Uma linha por par (item, local). `days_until_stockout` pode vir NULL
// (ex: item sem consumo médio).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetric {
    pub item_name: String,
    pub location: String,
    pub days_until_stockout: Option<Decimal>,
}

// --- 2. Status do Estoque ---
// O warehouse guarda como texto livre ("CRITICAL", "LOW", ...).
// Só o texto exato é reconhecido; qualquer outro valor fica em `Other`
// exatamente como veio, para a tabela mostrar o que está no warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StockStatus {
    Critical, // "CRITICAL"
    Low,      // "LOW"
    Healthy,  // "HEALTHY"
    Other(String),
}

impl StockStatus {
    pub fn is_critical(&self) -> bool {
        matches!(self, StockStatus::Critical)
    }

    pub fn as_str(&self) -> &str {
        match self {
            StockStatus::Critical => "CRITICAL",
            StockStatus::Low => "LOW",
            StockStatus::Healthy => "HEALTHY",
            StockStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for StockStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "CRITICAL" => StockStatus::Critical,
            "LOW" => StockStatus::Low,
            "HEALTHY" => StockStatus::Healthy,
            _ => StockStatus::Other(raw),
        }
    }
}

impl From<StockStatus> for String {
    fn from(status: StockStatus) -> Self {
        status.as_str().to_string()
    }
}

// --- 3. Alertas (tabela 'stock_alerts') ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub item_name: String,
    pub location: String,
    pub current_stock: Decimal,
    #[sqlx(try_from = "String")]
    #[schema(value_type = String, example = "CRITICAL")]
    pub stock_status: StockStatus,
    pub alert_timestamp: NaiveDateTime,
}

// --- 4. Previsão (procedure 'forecast_demand') ---
// Zero linhas = histórico insuficiente, não é erro.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub forecast_date: NaiveDate,
    pub predicted_usage: Decimal,
}

// --- 5. Recomendações de Compra (tabela 'reorder_recommendations') ---
// A ordem dos campos segue a ordem das colunas da relação (usada no CSV).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRecommendation {
    pub item_name: String,
    pub location: String,
    pub current_stock: Decimal,
    pub avg_daily_usage: Decimal,
    pub days_until_stockout: Option<Decimal>,
    pub recommended_reorder_qty: Decimal,
}

impl ReorderRecommendation {
    pub const COLUMNS: [&'static str; 6] = [
        "item_name",
        "location",
        "current_stock",
        "avg_daily_usage",
        "days_until_stockout",
        "recommended_reorder_qty",
    ];

    // Uma linha do CSV, na mesma ordem de `COLUMNS`.
    // `Decimal::to_string` preserva a escala, então o valor volta idêntico.
    // NULL vira campo vazio.
    pub fn to_record(&self) -> [String; 6] {
        [
            self.item_name.clone(),
            self.location.clone(),
            self.current_stock.to_string(),
            self.avg_daily_usage.to_string(),
            self.days_until_stockout.map(|d| d.to_string()).unwrap_or_default(),
            self.recommended_reorder_qty.to_string(),
        ]
    }
}
