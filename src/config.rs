//! Runtime configuration for training and reporting.

use crate::error::{ClassifierError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Classifier settings. Missing fields in a config file take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Print training rows, per-label priors and per-word likelihoods.
    pub debug: bool,
    /// Significant digits used when printing scores.
    pub score_precision: usize,
    /// Train on partitions and score test posts concurrently.
    pub parallel: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            debug: false,
            score_precision: 3,
            parallel: false,
        }
    }
}

impl ClassifierConfig {
    /// Loads a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| ClassifierError::InputAccess {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=17).contains(&self.score_precision) {
            return Err(ClassifierError::InvalidConfig(format!(
                "score_precision must be between 1 and 17, got {}",
                self.score_precision
            )));
        }
        Ok(())
    }
}
