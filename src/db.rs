pub mod stock_repo;
pub use stock_repo::{StockRepository, WarehouseRepository};
