//! Feedback aggregation configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::feedback::FeedbackPolicy;

/// Feedback aggregation configuration
///
/// Defaults mirror [`FeedbackPolicy::default`].
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackConfig {
    /// Jaccard similarity that must be exceeded to merge submissions
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,

    /// Frequency at which a cluster becomes Medium importance
    #[serde(default = "default_medium_frequency_threshold")]
    pub medium_frequency_threshold: u32,

    #[serde(default = "default_keyword_limit")]
    pub keyword_limit: usize,

    #[serde(default = "default_word_cloud_limit")]
    pub word_cloud_limit: usize,
}

impl FeedbackConfig {
    pub fn to_policy(&self) -> FeedbackPolicy {
        FeedbackPolicy {
            similarity_threshold: self.similarity_threshold,
            medium_frequency_threshold: self.medium_frequency_threshold,
            keyword_limit: self.keyword_limit,
            word_cloud_limit: self.word_cloud_limit,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.similarity_threshold > 0.0 && self.similarity_threshold <= 1.0) {
            return Err(ValidationError::InvalidSimilarityThreshold);
        }
        if !(2..=4).contains(&self.medium_frequency_threshold) {
            return Err(ValidationError::InvalidMediumThreshold);
        }
        if self.keyword_limit == 0 {
            return Err(ValidationError::ZeroLimit("keyword_limit"));
        }
        if self.word_cloud_limit == 0 {
            return Err(ValidationError::ZeroLimit("word_cloud_limit"));
        }
        Ok(())
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            medium_frequency_threshold: default_medium_frequency_threshold(),
            keyword_limit: default_keyword_limit(),
            word_cloud_limit: default_word_cloud_limit(),
        }
    }
}

fn default_similarity_threshold() -> f64 {
    FeedbackPolicy::default().similarity_threshold
}

fn default_medium_frequency_threshold() -> u32 {
    FeedbackPolicy::default().medium_frequency_threshold
}

fn default_keyword_limit() -> usize {
    FeedbackPolicy::default().keyword_limit
}

fn default_word_cloud_limit() -> usize {
    FeedbackPolicy::default().word_cloud_limit
}
