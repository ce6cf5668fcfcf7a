// src/handlers/page.rs

use axum::response::Html;

// A página com as quatro abas. Os gráficos são desenhados no navegador
// a partir dos endpoints JSON de cada aba.
const DASHBOARD_PAGE: &str = include_str!("../../static/dashboard.html");

// GET /
pub async fn index() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn page_has_the_four_tabs_and_the_download() {
        let Html(page) = index().await;

        for tab in ["Heatmap", "Alerts", "Forecasts", "Reorders"] {
            assert!(page.contains(tab), "aba ausente: {}", tab);
        }
        assert!(page.contains("/api/reorders/export"));
        assert!(page.contains("Generate Forecast"));
    }
}
