pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod validation;

pub use app::{AppState, build_router, build_state};
pub use config::ServerConfig;
