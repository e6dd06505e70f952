// src/core/types.rs
use serde::{Deserialize, Serialize};

/// A whitespace-delimited token of post content.
pub type Word = String;

/// A category a post can be tagged with.
pub type Label = String;

/// One labeled training or test post.
/// Consumed into statistics during training; never retained by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "tag")]
    pub label: Label,
    pub content: String,
}

impl Document {
    pub fn new(label: impl Into<Label>, content: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
        }
    }
}

/// The winning label for a post and its log-posterior score.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: Label,
    pub log_score: f64,
}
