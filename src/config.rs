// src/config.rs

use sqlx::postgres::PgPoolOptions;
use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use crate::{
    common::i18n::I18nStore,
    db::{StockRepository, WarehouseRepository},
    services::{dashboard_service::DashboardService, export_service::ExportService},
};

// Configuração lida do ambiente (.env é opcional)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL deve ser definida"))?;

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".to_string())
            .parse::<SocketAddr>()
            .map_err(|e| anyhow::anyhow!("BIND_ADDR inválido: {}", e))?;

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .parse::<u32>()
                .map_err(|e| anyhow::anyhow!("DB_MAX_CONNECTIONS inválido: {}", e))?,
            None => 5,
        };

        let acquire_secs = match lookup("DB_ACQUIRE_TIMEOUT_SECS") {
            Some(v) => v
                .parse::<u64>()
                .map_err(|e| anyhow::anyhow!("DB_ACQUIRE_TIMEOUT_SECS inválido: {}", e))?,
            None => 3,
        };

        Ok(Self {
            database_url,
            bind_addr,
            db_max_connections,
            db_acquire_timeout: Duration::from_secs(acquire_secs),
        })
    }
}

// O estado compartilhado entre os handlers.
// O acesso ao warehouse entra por injeção (StockRepository), não por sessão global.
#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub export_service: ExportService,
    pub i18n_store: I18nStore,
}

impl AppState {
    pub fn new(repo: Arc<dyn StockRepository>, i18n_store: I18nStore) -> Self {
        Self {
            dashboard_service: DashboardService::new(repo.clone()),
            export_service: ExportService::new(repo),
            i18n_store,
        }
    }

    // Conecta ao warehouse e monta o gráfico de dependências
    pub async fn connect(config: &AppConfig) -> anyhow::Result<Self> {
        let db_pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(config.db_acquire_timeout)
            .connect(&config.database_url)
            .await?;

        tracing::info!("✅ Conexão com o warehouse estabelecida com sucesso!");

        let repo: Arc<dyn StockRepository> = Arc::new(WarehouseRepository::new(db_pool));
        let i18n_store = I18nStore::load()?;

        Ok(Self::new(repo, i18n_store))
    }
}
