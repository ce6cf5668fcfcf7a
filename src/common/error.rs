use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::{common::i18n::I18nStore, middleware::i18n::Locale};

// Erros internos da aplicação. Nenhum deles é "recuperado" localmente:
// uma falha no warehouse encerra a requisição da aba que a disparou.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Local não encontrado: {0}")]
    UnknownLocation(String),

    // Falha de leitura no warehouse (sem retry, sem fallback)
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro ao gerar CSV: {0}")]
    ExportError(#[from] csv::Error),

    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

// O erro que o cliente vê: status + mensagem já traduzida.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn to_api_error(&self, locale: &Locale, i18n: &I18nStore) -> ApiError {
        match self {
            AppError::ValidationError(errors) => {
                // Junta as mensagens de cada campo: "item: ..., location: ..."
                let mut details: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, field_errors)| {
                        field_errors.iter().map(move |e| match &e.message {
                            Some(m) => format!("{}: {}", field, m),
                            None => format!("{}: {}", field, e.code),
                        })
                    })
                    .collect();
                details.sort();

                let base = i18n.get(locale, "error.validation");
                let message = if details.is_empty() {
                    base.to_string()
                } else {
                    format!("{} ({})", base, details.join(", "))
                };
                ApiError { status: StatusCode::BAD_REQUEST, message }
            }
            AppError::UnknownLocation(location) => ApiError {
                status: StatusCode::NOT_FOUND,
                message: format!("{}: {}", i18n.get(locale, "error.unknown_location"), location),
            },
            AppError::DatabaseError(_) => {
                tracing::error!("Falha ao consultar o warehouse: {}", self);
                ApiError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: i18n.get(locale, "error.database").to_string(),
                }
            }
            // Todos os outros erros viram 500; o detalhe fica só no log.
            e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                ApiError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: i18n.get(locale, "error.internal").to_string(),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}
