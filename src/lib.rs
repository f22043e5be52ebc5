pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod id;
pub mod models;
pub mod normalize;
pub mod repositories;
pub mod routes;
pub mod services;

pub use config::Config;
pub use db::{create_pool, ensure_schema};
pub use error::{AppError, Result};
