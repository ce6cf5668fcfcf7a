// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

use crate::common::i18n::DEFAULT_LANG;

// Extrator de idioma (Accept-Language).
// Só o idioma principal importa: "pt-BR" -> "pt".
#[derive(Debug, Clone, PartialEq)]
pub struct Locale(pub String);

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let lang = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|header_value| header_value.to_str().ok())
            .and_then(|header_str| {
                accept_language::parse(header_str)
                    .first() // Idioma de maior peso
                    .map(|tag_string| {
                        tag_string
                            .split('-')
                            .next()
                            .unwrap_or(tag_string)
                            .to_lowercase()
                    })
            })
            .unwrap_or_else(|| DEFAULT_LANG.to_string());

        Ok(Locale(lang))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(accept_language: Option<&str>) -> Locale {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = accept_language {
            builder = builder.header(header::ACCEPT_LANGUAGE, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        Locale::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn picks_primary_language_of_highest_weight() {
        assert_eq!(extract(Some("pt-BR,pt;q=0.9,en;q=0.8")).await, Locale("pt".into()));
        assert_eq!(extract(Some("en;q=0.5, pt;q=0.9")).await, Locale("pt".into()));
    }

    #[tokio::test]
    async fn defaults_to_english() {
        assert_eq!(extract(None).await, Locale("en".into()));
        assert_eq!(extract(Some("")).await, Locale("en".into()));
    }
}
