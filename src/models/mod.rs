// src/models/mod.rs

pub mod blueprint;
pub mod exam;
pub mod question;
pub mod view;
