pub mod app;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod db;
pub mod employees;
pub mod error;
pub mod ids;
pub mod logger;
pub mod models;
pub mod money;
pub mod persistence;
pub mod reducer;
pub mod seed;
pub mod storage;


pub use app::AppState;
pub use catalog::{CatalogAction, CatalogOrderStore, CatalogState};
pub use config::AppConfig;
pub use db::Database;
pub use employees::{EmployeeAction, EmployeeState, EmployeeStore};
pub use error::{Result, StoreError};
pub use storage::{KeyValueStore, MemoryStorage};
