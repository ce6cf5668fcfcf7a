// src/services/export_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::StockRepository,
    models::stock::ReorderRecommendation,
};

pub const REORDER_CSV_FILENAME: &str = "reorder_list.csv";
pub const CSV_CONTENT_TYPE: &str = "text/csv";

// Gera o "pedido de compra" (CSV) a partir de uma leitura nova da relação.
#[derive(Clone)]
pub struct ExportService {
    repo: Arc<dyn StockRepository>,
}

impl ExportService {
    pub fn new(repo: Arc<dyn StockRepository>) -> Self {
        Self { repo }
    }

    pub async fn export_reorders_csv(&self) -> Result<Vec<u8>, AppError> {
        let rows = self.repo.get_reorder_recommendations().await?;
        let csv_bytes = write_reorders_csv(&rows)?;

        tracing::info!("CSV de compras gerado: {} linhas, {} bytes", rows.len(), csv_bytes.len());
        Ok(csv_bytes)
    }
}

// Cabeçalho + uma linha por recomendação, UTF-8.
pub fn write_reorders_csv(rows: &[ReorderRecommendation]) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(ReorderRecommendation::COLUMNS)?;
    for row in rows {
        writer.write_record(row.to_record())?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::InternalServerError(anyhow::anyhow!("Falha ao finalizar o CSV: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::stock_repo::testing::InMemoryStockRepository;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn reorder(item: &str, location: &str, qty: &str) -> ReorderRecommendation {
        ReorderRecommendation {
            item_name: item.to_string(),
            location: location.to_string(),
            current_stock: Decimal::from_str("12.50").unwrap(),
            avg_daily_usage: Decimal::from_str("0.333").unwrap(),
            days_until_stockout: Some(Decimal::from_str("37.5").unwrap()),
            recommended_reorder_qty: Decimal::from_str(qty).unwrap(),
        }
    }

    #[test]
    fn csv_has_header_plus_one_line_per_row() {
        let rows = vec![
            reorder("Gloves", "ER", "100"),
            reorder("Saline", "ICU", "42.75"),
            reorder("Masks", "ER", "0"),
        ];

        let bytes = write_reorders_csv(&rows).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "item_name,location,current_stock,avg_daily_usage,days_until_stockout,recommended_reorder_qty"
        );
        assert_eq!(lines[2], "Saline,ICU,12.50,0.333,37.5,42.75");
    }

    #[test]
    fn csv_writes_null_days_as_empty_field() {
        let mut row = reorder("Saline", "ICU", "42.75");
        row.days_until_stockout = None;

        let text = String::from_utf8(write_reorders_csv(&[row]).unwrap()).unwrap();

        assert_eq!(text.lines().nth(1).unwrap(), "Saline,ICU,12.50,0.333,,42.75");
    }

    #[test]
    fn csv_numbers_read_back_exactly() {
        let rows = vec![reorder("Gloves", "ER", "12345.6789")];
        let bytes = write_reorders_csv(&rows).unwrap();

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let record = reader.records().next().unwrap().unwrap();

        assert_eq!(Decimal::from_str(&record[5]).unwrap(), rows[0].recommended_reorder_qty);
        assert_eq!(Decimal::from_str(&record[2]).unwrap(), rows[0].current_stock);
    }

    #[test]
    fn csv_quotes_fields_with_commas() {
        let rows = vec![reorder("Gauze, sterile", "OR 1", "5")];
        let text = String::from_utf8(write_reorders_csv(&rows).unwrap()).unwrap();

        assert!(text.lines().nth(1).unwrap().starts_with("\"Gauze, sterile\",OR 1,"));
    }

    #[test]
    fn empty_export_is_only_the_header() {
        let text = String::from_utf8(write_reorders_csv(&[]).unwrap()).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[tokio::test]
    async fn export_reads_fresh_rows_from_the_repository() {
        let repo = Arc::new(InMemoryStockRepository {
            reorders: vec![reorder("Gloves", "ER", "1"), reorder("Masks", "ICU", "2")],
            ..Default::default()
        });
        let service = ExportService::new(repo);

        let bytes = service.export_reorders_csv().await.unwrap();

        assert_eq!(String::from_utf8(bytes).unwrap().lines().count(), 3);
    }
}
