//! Data API: serves the database time and the MinIO bucket list as one JSON
//! envelope, plus the display client that renders it.

pub mod config;
pub mod display;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
