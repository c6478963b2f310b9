pub mod data_handlers;
pub mod health_handlers;
