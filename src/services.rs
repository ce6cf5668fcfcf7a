pub mod dashboard_service;
pub mod export_service;
