//! Feedback module - deduplicated, ranked citizen feedback.
//!
//! Submissions are normalized and merged into an existing cluster when their
//! word-set Jaccard similarity exceeds the policy threshold. Each cluster
//! tracks frequency, satisfaction and an importance tier; the collection is
//! kept sorted by importance then frequency.
//!
//! Merging is first-match: a submission joins the first cluster over the
//! threshold in ranked order, which need not be the most similar one.

mod aggregator;
mod entry;
mod errors;
mod metrics;
mod policy;
mod text;

pub use aggregator::{
    FeedbackAggregator, SubmissionOutcome, COMMON_THEMES_LIMIT, TOP_CONCERNS_LIMIT,
};
pub use entry::{FeedbackEntry, Importance, Keyword, Sentiment};
pub use errors::FeedbackError;
pub use metrics::{
    bucket_weight, Concern, FeedbackAnalysis, FeedbackMetrics, SentimentDistribution, Theme,
    WordCategory, WordCloudTerm, NO_CONCERN, WORD_CLOUD_BUCKETS,
};
pub use policy::{FeedbackPolicy, HIGH_FREQUENCY_THRESHOLD};
pub use text::{format_topic, is_stop_word, jaccard_similarity, normalize, top_terms};
