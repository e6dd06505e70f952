// File: src/core/statistics.rs
use crate::core::tokenizer::unique_words;
use crate::core::types::{Label, Word};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Append-only document counts learned from a labeled corpus.
///
/// Every count is the number of *posts* with some property, never the number
/// of word occurrences: a word repeated inside one post counts once.
/// Labels are kept in a `BTreeMap` so iteration is lexicographic, which the
/// scorer relies on for its tie-break.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsStore {
    total_posts: u64,
    vocabulary: BTreeSet<Word>,
    /// Maps word -> number of posts containing it
    word_post_count: HashMap<Word, u64>,
    /// Maps label -> number of posts carrying it
    label_post_count: BTreeMap<Label, u64>,
    /// Maps label -> word -> number of posts with that label containing that word
    joint_post_count: BTreeMap<Label, HashMap<Word, u64>>,
}

impl StatisticsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one post into the counts. Empty content still counts as a post.
    /// O(k log V) where k is the number of distinct words in the post.
    pub fn ingest(&mut self, label: &str, content: &str) {
        let words = unique_words(content);

        self.total_posts += 1;
        *self.label_post_count.entry(label.to_owned()).or_insert(0) += 1;

        let joint = self.joint_post_count.entry(label.to_owned()).or_default();
        for word in words {
            if !self.vocabulary.contains(word) {
                self.vocabulary.insert(word.to_owned());
            }
            bump(&mut self.word_post_count, word);
            bump(joint, word);
        }
    }

    /// Sums another store into this one.
    /// Merging partial stores gives the same result as ingesting every
    /// document into a single store, in any order.
    pub fn merge(&mut self, other: StatisticsStore) {
        self.total_posts += other.total_posts;
        self.vocabulary.extend(other.vocabulary);

        for (word, count) in other.word_post_count {
            *self.word_post_count.entry(word).or_insert(0) += count;
        }
        for (label, count) in other.label_post_count {
            *self.label_post_count.entry(label).or_insert(0) += count;
        }
        for (label, words) in other.joint_post_count {
            let joint = self.joint_post_count.entry(label).or_default();
            for (word, count) in words {
                *joint.entry(word).or_insert(0) += count;
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_posts == 0
    }

    pub fn total_posts(&self) -> u64 {
        self.total_posts
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Distinct words seen in training, sorted.
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.vocabulary.iter().map(String::as_str)
    }

    /// Labels seen in training with their post counts, in lexicographic order.
    pub fn labels(&self) -> impl Iterator<Item = (&str, u64)> {
        self.label_post_count
            .iter()
            .map(|(label, &count)| (label.as_str(), count))
    }

    pub fn word_post_count(&self, word: &str) -> u64 {
        self.word_post_count.get(word).copied().unwrap_or(0)
    }

    pub fn label_post_count(&self, label: &str) -> u64 {
        self.label_post_count.get(label).copied().unwrap_or(0)
    }

    pub fn joint_post_count(&self, word: &str, label: &str) -> u64 {
        self.joint_post_count
            .get(label)
            .and_then(|words| words.get(word))
            .copied()
            .unwrap_or(0)
    }

    /// Words seen with `label` and their joint counts, sorted by word.
    pub fn joint_counts_for(&self, label: &str) -> Vec<(&str, u64)> {
        let mut counts: Vec<(&str, u64)> = self
            .joint_post_count
            .get(label)
            .map(|words| {
                words
                    .iter()
                    .map(|(word, &count)| (word.as_str(), count))
                    .collect()
            })
            .unwrap_or_default();
        counts.sort_unstable_by(|a, b| a.0.cmp(b.0));
        counts
    }
}

fn bump(counts: &mut HashMap<Word, u64>, word: &str) {
    match counts.get_mut(word) {
        Some(count) => *count += 1,
        None => {
            counts.insert(word.to_owned(), 1);
        }
    }
}
