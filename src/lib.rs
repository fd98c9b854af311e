//! Medical-office REST backend: CRUD routes over a PostgreSQL schema.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::AppError;
pub use routes::app;
pub use state::AppState;
pub use store::{MemoryStore, PgStore, Store};
