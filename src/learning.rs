// File: src/learning.rs
use crate::core::statistics::StatisticsStore;
use crate::core::types::Document;
use rayon::prelude::*;

/// Folds labeled posts into a [`StatisticsStore`].
pub struct LearningEngine {
    parallel: bool,
}

impl LearningEngine {
    pub fn new(parallel: bool) -> Self {
        Self { parallel }
    }

    /// Ingests every document. In parallel mode each rayon worker builds its
    /// own partial store and the partials are summed into `statistics`, which
    /// gives the same counts as sequential ingestion.
    pub fn learn(&self, statistics: &mut StatisticsStore, documents: &[Document]) {
        if self.parallel {
            let partial = documents
                .par_iter()
                .fold(StatisticsStore::new, |mut partial, document| {
                    partial.ingest(&document.label, &document.content);
                    partial
                })
                .reduce(StatisticsStore::new, |mut left, right| {
                    left.merge(right);
                    left
                });
            statistics.merge(partial);
        } else {
            for document in documents {
                statistics.ingest(&document.label, &document.content);
            }
        }
    }
}
