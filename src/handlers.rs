pub mod dashboard;
pub mod page;
