// src/extractors/mod.rs

pub mod json;
