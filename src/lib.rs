// src/lib.rs
pub mod config;
pub mod database;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

pub use routes::app;
pub use state::AppState;
