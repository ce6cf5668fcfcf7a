// src/db/stock_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use crate::{
    common::error::AppError,
    models::stock::{Alert, ForecastPoint, HealthMetric, ReorderRecommendation},
};

// O "handle" de acesso aos dados do warehouse.
// É injetado no service (nada de sessão global), o que também permite
// trocar por uma implementação em memória nos testes.
#[async_trait]
pub trait StockRepository: Send + Sync {
    async fn get_health_metrics(&self) -> Result<Vec<HealthMetric>, AppError>;

    // Alertas mais recentes primeiro
    async fn get_recent_alerts(&self, limit: i64) -> Result<Vec<Alert>, AppError>;

    async fn forecast_demand(
        &self,
        location: &str,
        item: &str,
    ) -> Result<Vec<ForecastPoint>, AppError>;

    async fn get_reorder_recommendations(&self) -> Result<Vec<ReorderRecommendation>, AppError>;
}

// As colunas numéricas são convertidas para `numeric` na própria consulta:
// o tipo no warehouse pode ser float e `Decimal` só decodifica NUMERIC.
const HEALTH_METRICS_SQL: &str = r#"
    SELECT item_name, location,
           days_until_stockout::numeric AS days_until_stockout
    FROM stock_health_metrics
"#;

const RECENT_ALERTS_SQL: &str = r#"
    SELECT item_name, location,
           current_stock::numeric AS current_stock,
           stock_status::text AS stock_status,
           alert_timestamp::timestamp AS alert_timestamp
    FROM stock_alerts
    ORDER BY alert_timestamp DESC
    LIMIT $1
"#;

// A procedure devolve um conjunto de linhas (pode ser vazio)
const FORECAST_DEMAND_SQL: &str = r#"
    SELECT forecast_date::date AS forecast_date,
           predicted_usage::numeric AS predicted_usage
    FROM forecast_demand($1, $2)
"#;

const REORDER_RECOMMENDATIONS_SQL: &str = r#"
    SELECT item_name, location,
           current_stock::numeric AS current_stock,
           avg_daily_usage::numeric AS avg_daily_usage,
           days_until_stockout::numeric AS days_until_stockout,
           recommended_reorder_qty::numeric AS recommended_reorder_qty
    FROM reorder_recommendations
"#;

// Implementação real, somente leitura, sobre a pool do Postgres.
#[derive(Clone)]
pub struct WarehouseRepository {
    pool: PgPool,
}

impl WarehouseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StockRepository for WarehouseRepository {
    async fn get_health_metrics(&self) -> Result<Vec<HealthMetric>, AppError> {
        let rows = sqlx::query_as::<_, HealthMetric>(HEALTH_METRICS_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn get_recent_alerts(&self, limit: i64) -> Result<Vec<Alert>, AppError> {
        let rows = sqlx::query_as::<_, Alert>(RECENT_ALERTS_SQL)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn forecast_demand(
        &self,
        location: &str,
        item: &str,
    ) -> Result<Vec<ForecastPoint>, AppError> {
        let rows = sqlx::query_as::<_, ForecastPoint>(FORECAST_DEMAND_SQL)
            .bind(location)
            .bind(item)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn get_reorder_recommendations(&self) -> Result<Vec<ReorderRecommendation>, AppError> {
        let rows = sqlx::query_as::<_, ReorderRecommendation>(REORDER_RECOMMENDATIONS_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    // Sem banco nos testes: confere só que cada coluna numérica é convertida
    // e mantém o nome que o `FromRow` espera.
    #[test]
    fn numeric_columns_are_cast_to_numeric() {
        let cases = [
            (HEALTH_METRICS_SQL, &["days_until_stockout"][..]),
            (RECENT_ALERTS_SQL, &["current_stock"][..]),
            (FORECAST_DEMAND_SQL, &["predicted_usage"][..]),
            (
                REORDER_RECOMMENDATIONS_SQL,
                &[
                    "current_stock",
                    "avg_daily_usage",
                    "days_until_stockout",
                    "recommended_reorder_qty",
                ][..],
            ),
        ];

        for (sql, columns) in cases {
            for column in columns {
                let cast = format!("{column}::numeric AS {column}");
                assert!(sql.contains(&cast), "faltou `{cast}` em:{sql}");
            }
        }
    }

    #[test]
    fn forecast_date_is_cast_to_date() {
        assert!(FORECAST_DEMAND_SQL.contains("forecast_date::date AS forecast_date"));
        assert!(FORECAST_DEMAND_SQL.contains("forecast_demand($1, $2)"));
    }

    #[test]
    fn alerts_are_most_recent_first_and_limited() {
        assert!(RECENT_ALERTS_SQL.contains("ORDER BY alert_timestamp DESC"));
        assert!(RECENT_ALERTS_SQL.contains("LIMIT $1"));
    }
}
