pub mod data_service;
pub mod database;
pub mod storage;
