// File: src/evaluation.rs
use crate::core::scorer::Scorer;
use crate::core::types::{Document, Label, Prediction};
use rayon::prelude::*;

/// A test post with its expected tag and what the scorer chose.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub expected: Label,
    pub prediction: Prediction,
    pub content: String,
}

impl Outcome {
    pub fn is_correct(&self) -> bool {
        self.expected == self.prediction.label
    }
}

/// Predictions for a labeled test corpus, in corpus order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    outcomes: Vec<Outcome>,
}

impl Evaluation {
    /// Scores every document. Scoring only reads the model, so the parallel
    /// path shares one scorer across rayon workers.
    pub fn run(scorer: &Scorer<'_>, documents: Vec<Document>, parallel: bool) -> Self {
        let judge = |document: Document| Outcome {
            prediction: scorer.predict(&document.content),
            expected: document.label,
            content: document.content,
        };

        let outcomes: Vec<Outcome> = if parallel {
            documents.into_par_iter().map(judge).collect()
        } else {
            documents.into_iter().map(judge).collect()
        };
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn correct(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_correct()).count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Fraction predicted correctly; `None` for an empty test set.
    pub fn accuracy(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(self.correct() as f64 / total as f64),
        }
    }
}
