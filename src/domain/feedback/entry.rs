//! Feedback entry - one cluster of similar submissions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{div_round_half_up, FeedbackId, Satisfaction, Timestamp};

/// Sentiment fixed by the first submission of a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
}

impl Sentiment {
    /// 1-4 is Negative, 5-6 Neutral, 7-10 Positive.
    pub fn from_satisfaction(satisfaction: Satisfaction) -> Self {
        match satisfaction.value() {
            0..=4 => Sentiment::Negative,
            5..=6 => Sentiment::Neutral,
            _ => Sentiment::Positive,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
            Sentiment::Positive => "Positive",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ranking tier. Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Importance {
    Low,
    Medium,
    High,
}

impl Importance {
    pub fn label(&self) -> &'static str {
        match self {
            Importance::Low => "Low",
            Importance::Medium => "Medium",
            Importance::High => "High",
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A frequent term from an entry's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub word: String,
    pub count: u32,
    /// Topic slug of the submission the keyword came from.
    pub category: String,
}

/// A deduplicated feedback cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEntry {
    pub id: FeedbackId,
    /// Display label, e.g. `Social Welfare`.
    pub topic: String,
    /// Raw text of the first submission.
    pub text: String,
    pub normalized_text: String,
    pub sentiment: Sentiment,
    pub initial_satisfaction: Satisfaction,
    pub satisfaction_total: u32,
    pub satisfaction_avg: u32,
    pub frequency: u32,
    pub importance: Importance,
    pub keywords: Vec<Keyword>,
    pub submitted_at: Timestamp,
    pub updated_at: Timestamp,
}

impl FeedbackEntry {
    /// Folds another submission into this cluster.
    ///
    /// Sentiment is left untouched; importance is recomputed by the caller.
    pub(crate) fn absorb(&mut self, satisfaction: Satisfaction) {
        self.frequency += 1;
        self.satisfaction_total += u32::from(satisfaction.value());
        self.satisfaction_avg = average(self.satisfaction_total, self.frequency);
        self.updated_at = Timestamp::now();
    }

    pub fn is_negative(&self) -> bool {
        self.sentiment == Sentiment::Negative
    }
}

/// `round(total / count)`, halves up.
pub(crate) fn average(total: u32, count: u32) -> u32 {
    if count == 0 {
        return 0;
    }
    div_round_half_up(i64::from(total), i64::from(count)) as u32
}
