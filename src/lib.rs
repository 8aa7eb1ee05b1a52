pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod money;
pub mod observability;
pub mod state;
