// src/engine/mod.rs

//! Pure exam lifecycle and assembly functions. Nothing here reads the
//! clock, touches I/O or keeps state between calls.

pub mod assembler;
pub mod blueprint;
pub mod disclosure;
pub mod status;

pub use assembler::assemble;
pub use blueprint::{validate, validate_with_rng};
pub use disclosure::is_answer_visible;
pub use status::{resolve, resolve_state};
