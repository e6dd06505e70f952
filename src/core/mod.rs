// src/core/mod.rs

pub mod engine;
pub mod scorer;
pub mod statistics;
pub mod tokenizer;
pub mod types;
