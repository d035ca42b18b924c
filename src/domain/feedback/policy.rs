//! Tunable thresholds for feedback deduplication and ranking.

use serde::{Deserialize, Serialize};

use super::entry::{Importance, Sentiment};

/// Frequency at which a cluster becomes High importance.
pub const HIGH_FREQUENCY_THRESHOLD: u32 = 5;

/// Thresholds used by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedbackPolicy {
    /// Similarity that must be strictly exceeded to merge.
    pub similarity_threshold: f64,
    /// Frequency at which a cluster becomes Medium importance.
    pub medium_frequency_threshold: u32,
    /// Keywords kept per entry.
    pub keyword_limit: usize,
    /// Default number of word-cloud terms.
    pub word_cloud_limit: usize,
}

impl FeedbackPolicy {
    /// Alternative policy promoting to Medium only from three submissions.
    pub fn strict_medium() -> Self {
        Self {
            medium_frequency_threshold: 3,
            ..Self::default()
        }
    }

    pub fn classify(&self, frequency: u32, sentiment: Sentiment) -> Importance {
        if frequency >= HIGH_FREQUENCY_THRESHOLD {
            Importance::High
        } else if frequency >= self.medium_frequency_threshold || sentiment == Sentiment::Negative
        {
            Importance::Medium
        } else {
            Importance::Low
        }
    }

    pub fn is_duplicate(&self, similarity: f64) -> bool {
        similarity > self.similarity_threshold
    }
}

impl Default for FeedbackPolicy {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.7,
            medium_frequency_threshold: 2,
            keyword_limit: 5,
            word_cloud_limit: 20,
        }
    }
}
