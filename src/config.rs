// src/config.rs

use std::env;
use std::net::SocketAddr;

use dotenvy::dotenv;

/// Upper bound on multiple-choice questions per generation request.
pub const MAX_MCQ_COUNT: u32 = 50;
/// Upper bound on short-answer questions per generation request.
pub const MAX_SHORT_COUNT: u32 = 20;
/// Upper bound on long-answer questions per generation request.
pub const MAX_LONG_COUNT: u32 = 10;

/// Largest seed drawn when a blueprint arrives without one (31 bits).
pub const MAX_DRAWN_SEED: u32 = 0x7FFF_FFFF;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub rust_log: String,
    pub log_dir: String,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .expect("BIND_ADDR must be a socket address, e.g. 0.0.0.0:3000");

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let log_dir = env::var("LOG_DIR")
            .unwrap_or_else(|_| "logs".to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            bind_addr,
            rust_log,
            log_dir,
            cors_origins,
        }
    }
}
