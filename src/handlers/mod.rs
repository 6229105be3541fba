// src/handlers/mod.rs

pub mod blueprint;
pub mod exam;
pub mod status;
