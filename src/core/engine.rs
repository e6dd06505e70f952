use crate::config::ClassifierConfig;
use crate::core::scorer::Scorer;
use crate::core::statistics::StatisticsStore;
use crate::core::types::{Document, Prediction};
use crate::error::Result;
use crate::evaluation::Evaluation;
use crate::learning::LearningEngine;
use crate::persistence::{load_from_disk, save_to_disk};
use std::path::{Path, PathBuf};

// The classifier owns the learned counts; scoring borrows them read-only.
pub struct Classifier {
    statistics: StatisticsStore,
    config: ClassifierConfig,
    learning_engine: LearningEngine,
    model_path: Option<PathBuf>,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            statistics: StatisticsStore::new(),
            learning_engine: LearningEngine::new(config.parallel),
            config,
            model_path: None,
        }
    }

    /// Resumes from a saved model when `path` exists, otherwise starts empty.
    /// Either way the model is written back to `path` by [`Classifier::save_model`].
    pub fn from_file_or_new(path: impl AsRef<Path>, config: ClassifierConfig) -> Result<Self> {
        let path = path.as_ref();
        let mut classifier = Self::new(config);
        if path.exists() {
            classifier.statistics = load_from_disk(path)?;
            tracing::info!(
                path = %path.display(),
                posts = classifier.statistics.total_posts(),
                "resuming from saved model"
            );
        }
        classifier.model_path = Some(path.to_path_buf());
        Ok(classifier)
    }

    /// Read-only view of the learned counts; they only grow through [`Classifier::train`].
    pub fn statistics(&self) -> &StatisticsStore {
        &self.statistics
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Appends `documents` to the model. Training may continue after
    /// predictions have been made.
    pub fn train(&mut self, documents: &[Document]) {
        self.learning_engine.learn(&mut self.statistics, documents);
        tracing::info!(
            ingested = documents.len(),
            posts = self.statistics.total_posts(),
            vocabulary = self.statistics.vocabulary_size(),
            "trained classifier"
        );
    }

    pub fn scorer(&self) -> Result<Scorer<'_>> {
        Scorer::new(&self.statistics)
    }

    pub fn predict(&self, content: &str) -> Result<Prediction> {
        Ok(self.scorer()?.predict(content))
    }

    pub fn evaluate(&self, documents: Vec<Document>) -> Result<Evaluation> {
        let evaluation = Evaluation::run(&self.scorer()?, documents, self.config.parallel);
        tracing::info!(
            correct = evaluation.correct(),
            total = evaluation.total(),
            "evaluated test corpus"
        );
        Ok(evaluation)
    }

    pub fn save_model(&self) -> Result<()> {
        match &self.model_path {
            Some(path) => save_to_disk(&self.statistics, path),
            None => Ok(()), // Don't error if no path is set
        }
    }
}
