// File: src/core/scorer.rs
use crate::core::statistics::StatisticsStore;
use crate::core::tokenizer::unique_words;
use crate::core::types::Prediction;
use crate::error::{ClassifierError, Result};

/// Log-likelihood of a word given a label, from post counts.
///
/// `wlp` posts with both the word and the label, `lp` posts with the label,
/// `wp` posts with the word, `total` posts overall.
/// A word never seen with the label falls back to its corpus-wide rate, and a
/// word never seen at all to one post in `total`, so the result is always finite.
pub fn smoothed_log_likelihood(wlp: u64, lp: u64, wp: u64, total: u64) -> f64 {
    if wlp > 0 {
        (wlp as f64 / lp as f64).ln()
    } else if wp > 0 {
        (wp as f64 / total as f64).ln()
    } else {
        (1.0 / total as f64).ln()
    }
}

/// Read-only Naive Bayes scorer over a trained [`StatisticsStore`].
///
/// Can only be built over a store holding at least one post, so every
/// prediction has a candidate label and a non-zero denominator.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    statistics: &'a StatisticsStore,
}

impl<'a> Scorer<'a> {
    pub fn new(statistics: &'a StatisticsStore) -> Result<Self> {
        if statistics.is_empty() {
            return Err(ClassifierError::UntrainedModel);
        }
        Ok(Self { statistics })
    }

    pub fn statistics(&self) -> &'a StatisticsStore {
        self.statistics
    }

    /// Picks the highest-scoring label for `content`.
    /// Labels are scanned in lexicographic order and only a strictly greater
    /// score replaces the leader, so ties go to the smallest label.
    pub fn predict(&self, content: &str) -> Prediction {
        let words: Vec<&str> = unique_words(content).into_iter().collect();

        let mut best_label = "";
        let mut best_score = f64::NEG_INFINITY;
        for (label, label_posts) in self.statistics.labels() {
            let score = self.score_words(&words, label, label_posts);
            if score > best_score {
                best_label = label;
                best_score = score;
            }
        }

        Prediction {
            label: best_label.to_owned(),
            log_score: best_score,
        }
    }

    /// Log-posterior of every known label for `content`, in label order.
    pub fn scores(&self, content: &str) -> Vec<(&'a str, f64)> {
        let words: Vec<&str> = unique_words(content).into_iter().collect();
        self.statistics
            .labels()
            .map(|(label, label_posts)| (label, self.score_words(&words, label, label_posts)))
            .collect()
    }

    /// `ln(P(label))`, or `None` for a label never seen in training.
    pub fn log_prior(&self, label: &str) -> Option<f64> {
        match self.statistics.label_post_count(label) {
            0 => None,
            label_posts => Some(self.prior(label_posts)),
        }
    }

    /// `ln(P(word | label))` under the fallback smoothing,
    /// or `None` for a label never seen in training.
    pub fn log_likelihood(&self, word: &str, label: &str) -> Option<f64> {
        match self.statistics.label_post_count(label) {
            0 => None,
            label_posts => Some(self.likelihood(word, label, label_posts)),
        }
    }

    fn score_words(&self, words: &[&str], label: &str, label_posts: u64) -> f64 {
        words
            .iter()
            .fold(self.prior(label_posts), |score, word| {
                score + self.likelihood(word, label, label_posts)
            })
    }

    fn prior(&self, label_posts: u64) -> f64 {
        (label_posts as f64 / self.statistics.total_posts() as f64).ln()
    }

    fn likelihood(&self, word: &str, label: &str, label_posts: u64) -> f64 {
        smoothed_log_likelihood(
            self.statistics.joint_post_count(word, label),
            label_posts,
            self.statistics.word_post_count(word),
            self.statistics.total_posts(),
        )
    }
}
