// src/lib.rs

pub mod config;
pub mod engine;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;

pub use routes::create_router;
