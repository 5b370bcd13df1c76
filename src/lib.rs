pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod migrate;
pub mod observability;
pub mod query;
pub mod routes;

pub use config::Config;
pub use routes::{AppState, router};
