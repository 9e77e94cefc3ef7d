// Environment-driven configuration

pub mod app;
pub mod database;

pub use app::{AppConfig, StaticConfig, StoreBackend};
pub use database::DatabaseConfig;
