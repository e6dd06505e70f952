// src/lib.rs

pub mod config;
pub mod core;
pub mod corpus;
pub mod error;
pub mod evaluation;
pub mod learning;
pub mod persistence;
pub mod report;

pub use crate::config::ClassifierConfig;
pub use crate::core::engine::Classifier;
pub use crate::core::scorer::Scorer;
pub use crate::core::statistics::StatisticsStore;
pub use crate::core::types::{Document, Prediction};
pub use crate::error::{ClassifierError, Result};
