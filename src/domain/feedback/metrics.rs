//! Read-only views derived from the feedback collection.

use serde::{Deserialize, Serialize};

use super::entry::FeedbackEntry;

/// Topic reported when there are no negative entries.
pub const NO_CONCERN: &str = "None";

/// Number of word-cloud size buckets.
pub const WORD_CLOUD_BUCKETS: u8 = 5;

/// Headline numbers over the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackMetrics {
    /// Sum of all entry frequencies.
    pub total_count: u32,
    /// Mean satisfaction on the 0-100 scale; `None` with no feedback.
    pub overall_satisfaction_pct: Option<u32>,
    /// Topic of the most frequent negative entry, or [`NO_CONCERN`].
    pub top_concern: String,
}

impl FeedbackMetrics {
    pub fn empty() -> Self {
        Self {
            total_count: 0,
            overall_satisfaction_pct: None,
            top_concern: NO_CONCERN.to_string(),
        }
    }
}

/// Display colour group of a word-cloud term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordCategory {
    Budget,
    Policy,
    Service,
    Infrastructure,
    Concern,
    Other,
}

impl WordCategory {
    const STEMS: &'static [(WordCategory, &'static [&'static str])] = &[
        (
            WordCategory::Budget,
            &["budget", "money", "fund", "cost", "expense", "finance"],
        ),
        (
            WordCategory::Policy,
            &["policy", "rule", "regulation", "law", "governance"],
        ),
        (
            WordCategory::Service,
            &["service", "program", "facility", "assist", "help"],
        ),
        (
            WordCategory::Infrastructure,
            &["road", "bridge", "build", "construct", "repair"],
        ),
        (
            WordCategory::Concern,
            &["concern", "worry", "issue", "problem", "trouble"],
        ),
    ];

    /// First category with a stem contained in `word`.
    pub fn of(word: &str) -> Self {
        let word = word.to_lowercase();
        Self::STEMS
            .iter()
            .find(|(_, stems)| stems.iter().any(|stem| word.contains(stem)))
            .map(|(category, _)| *category)
            .unwrap_or(WordCategory::Other)
    }
}

/// One term of the keyword cloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCloudTerm {
    pub word: String,
    /// Keyword count summed over all entries.
    pub count: u32,
    /// Size bucket in `1..=5`.
    pub weight: u8,
    pub category: WordCategory,
}

/// Scales `count` into `1..=WORD_CLOUD_BUCKETS` between `min` and `max`.
///
/// When every count is equal the middle bucket is used.
pub fn bucket_weight(count: u32, min: u32, max: u32) -> u8 {
    if max <= min {
        return WORD_CLOUD_BUCKETS.div_ceil(2);
    }
    let span = max - min;
    let steps = u32::from(WORD_CLOUD_BUCKETS - 1);
    let scaled = ((count.saturating_sub(min)) * steps).div_ceil(span);
    scaled.min(steps) as u8 + 1
}

/// Entry counts per sentiment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

/// A negative entry surfaced as a concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concern {
    pub topic: String,
    pub frequency: u32,
    pub text: String,
}

impl From<&FeedbackEntry> for Concern {
    fn from(entry: &FeedbackEntry) -> Self {
        Self {
            topic: entry.topic.clone(),
            frequency: entry.frequency,
            text: entry.text.clone(),
        }
    }
}

/// A keyword shared across entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub word: String,
    /// Number of entries listing this keyword.
    pub entry_count: u32,
}

/// Everything the analysis view renders, in one structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackAnalysis {
    pub metrics: FeedbackMetrics,
    pub entries: Vec<FeedbackEntry>,
    pub word_cloud: Vec<WordCloudTerm>,
    pub sentiment_distribution: SentimentDistribution,
    pub top_concerns: Vec<Concern>,
    pub common_themes: Vec<Theme>,
}
