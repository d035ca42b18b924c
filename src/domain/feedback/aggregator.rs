//! Feedback aggregator - deduplicates submissions and ranks clusters.
//!
//! The aggregator owns its collection. It is synchronous and not internally
//! synchronized; concurrent callers must serialize access to it.

use std::collections::{HashMap, HashSet};

use super::entry::{average, FeedbackEntry, Keyword, Sentiment};
use super::errors::FeedbackError;
use super::metrics::{
    bucket_weight, Concern, FeedbackAnalysis, FeedbackMetrics, SentimentDistribution, Theme,
    WordCategory, WordCloudTerm, NO_CONCERN,
};
use super::policy::FeedbackPolicy;
use super::text::{format_topic, jaccard_similarity, normalize, top_terms};
use crate::domain::foundation::{
    div_round_half_up, FeedbackId, Satisfaction, Timestamp, ValidationError,
};

/// Default number of concerns in an analysis.
pub const TOP_CONCERNS_LIMIT: usize = 5;

/// Default number of common themes in an analysis.
pub const COMMON_THEMES_LIMIT: usize = 10;

/// Result of [`FeedbackAggregator::submit`].
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionOutcome {
    /// The created or updated entry, after re-ranking.
    pub entry: FeedbackEntry,
    /// True when the submission merged into an existing entry.
    pub merged: bool,
}

/// Owned, ranked collection of feedback clusters.
#[derive(Debug, Clone, Default)]
pub struct FeedbackAggregator {
    policy: FeedbackPolicy,
    entries: Vec<FeedbackEntry>,
}

impl FeedbackAggregator {
    pub fn new(policy: FeedbackPolicy) -> Self {
        Self {
            policy,
            entries: Vec::new(),
        }
    }

    /// Rebuilds an aggregator from previously archived entries.
    pub fn restore(policy: FeedbackPolicy, entries: Vec<FeedbackEntry>) -> Self {
        let mut aggregator = Self { policy, entries };
        aggregator.rank();
        aggregator
    }

    pub fn policy(&self) -> &FeedbackPolicy {
        &self.policy
    }

    /// Entries in ranked order.
    pub fn entries(&self) -> &[FeedbackEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ingests one submission.
    ///
    /// The normalized text is merged into the first entry whose similarity
    /// exceeds the policy threshold, in current ranked order. Otherwise a new
    /// entry is appended. The collection is re-ranked afterwards.
    pub fn submit(
        &mut self,
        topic: &str,
        text: &str,
        satisfaction: i64,
    ) -> Result<SubmissionOutcome, FeedbackError> {
        let satisfaction = Satisfaction::try_new(satisfaction)?;
        let normalized = normalize(text);
        if normalized.is_empty() {
            return Err(ValidationError::empty_field("text").into());
        }

        let matched = self.entries.iter().position(|entry| {
            self.policy
                .is_duplicate(jaccard_similarity(&normalized, &entry.normalized_text))
        });

        let (id, merged) = match matched {
            Some(index) => {
                let entry = &mut self.entries[index];
                entry.absorb(satisfaction);
                entry.importance = self.policy.classify(entry.frequency, entry.sentiment);
                (entry.id, true)
            }
            None => {
                let entry = self.new_entry(topic, text, normalized, satisfaction);
                let id = entry.id;
                self.entries.push(entry);
                (id, false)
            }
        };

        self.rank();

        let entry = self
            .entries
            .iter()
            .find(|entry| entry.id == id)
            .cloned()
            .ok_or_else(|| FeedbackError::EntryNotFound(id))?;
        Ok(SubmissionOutcome { entry, merged })
    }

    /// Headline numbers; empty-state values when there is no feedback.
    pub fn metrics(&self) -> FeedbackMetrics {
        let total_count: u32 = self.entries.iter().map(|e| e.frequency).sum();
        if total_count == 0 {
            return FeedbackMetrics::empty();
        }

        let satisfaction_sum: u32 = self.entries.iter().map(|e| e.satisfaction_total).sum();
        let pct = div_round_half_up(i64::from(satisfaction_sum) * 10, i64::from(total_count));

        // max_by_key keeps the last maximum, so fold for the first one.
        let top_concern = self
            .entries
            .iter()
            .filter(|e| e.is_negative())
            .fold(None::<&FeedbackEntry>, |best, e| match best {
                Some(b) if b.frequency >= e.frequency => Some(b),
                _ => Some(e),
            })
            .map(|e| e.topic.clone())
            .unwrap_or_else(|| NO_CONCERN.to_string());

        FeedbackMetrics {
            total_count,
            overall_satisfaction_pct: Some(pct as u32),
            top_concern,
        }
    }

    /// Most frequent keywords across all entries, at most `limit`.
    pub fn word_cloud(&self, limit: usize) -> Vec<WordCloudTerm> {
        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, u32> = HashMap::new();
        for keyword in self.entries.iter().flat_map(|e| e.keywords.iter()) {
            let count = counts.entry(keyword.word.as_str()).or_insert_with(|| {
                order.push(keyword.word.as_str());
                0
            });
            *count += keyword.count;
        }

        let mut ranked: Vec<(&str, u32)> = order
            .into_iter()
            .map(|word| (word, counts.get(word).copied().unwrap_or(0)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);

        let min = ranked.iter().map(|(_, c)| *c).min().unwrap_or(0);
        let max = ranked.iter().map(|(_, c)| *c).max().unwrap_or(0);

        ranked
            .into_iter()
            .map(|(word, count)| WordCloudTerm {
                word: word.to_string(),
                count,
                weight: bucket_weight(count, min, max),
                category: WordCategory::of(word),
            })
            .collect()
    }

    pub fn sentiment_distribution(&self) -> SentimentDistribution {
        self.entries
            .iter()
            .fold(SentimentDistribution::default(), |mut dist, e| {
                match e.sentiment {
                    Sentiment::Positive => dist.positive += 1,
                    Sentiment::Neutral => dist.neutral += 1,
                    Sentiment::Negative => dist.negative += 1,
                }
                dist
            })
    }

    /// Negative entries by frequency, most frequent first.
    pub fn top_concerns(&self, limit: usize) -> Vec<Concern> {
        let mut negative: Vec<&FeedbackEntry> =
            self.entries.iter().filter(|e| e.is_negative()).collect();
        negative.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        negative.into_iter().take(limit).map(Concern::from).collect()
    }

    /// Keywords ranked by how many entries list them.
    pub fn common_themes(&self, limit: usize) -> Vec<Theme> {
        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, u32> = HashMap::new();
        for entry in &self.entries {
            // An entry counts once per word even if a restored list repeats it.
            let mut seen: HashSet<&str> = HashSet::new();
            for keyword in &entry.keywords {
                let word = keyword.word.as_str();
                if !seen.insert(word) {
                    continue;
                }
                if let Some(count) = counts.get_mut(word) {
                    *count += 1;
                } else {
                    counts.insert(word, 1);
                    order.push(word);
                }
            }
        }

        let mut themes: Vec<Theme> = order
            .into_iter()
            .map(|word| Theme {
                word: word.to_string(),
                entry_count: counts.get(word).copied().unwrap_or(0),
            })
            .collect();
        themes.sort_by(|a, b| b.entry_count.cmp(&a.entry_count));
        themes.truncate(limit);
        themes
    }

    /// Metrics, ranked entries and every derived view in one structure.
    pub fn analysis(&self) -> FeedbackAnalysis {
        FeedbackAnalysis {
            metrics: self.metrics(),
            entries: self.entries.clone(),
            word_cloud: self.word_cloud(self.policy.word_cloud_limit),
            sentiment_distribution: self.sentiment_distribution(),
            top_concerns: self.top_concerns(TOP_CONCERNS_LIMIT),
            common_themes: self.common_themes(COMMON_THEMES_LIMIT),
        }
    }

    fn new_entry(
        &self,
        topic: &str,
        text: &str,
        normalized: String,
        satisfaction: Satisfaction,
    ) -> FeedbackEntry {
        let sentiment = Sentiment::from_satisfaction(satisfaction);
        let keywords = top_terms(&normalized, self.policy.keyword_limit)
            .into_iter()
            .map(|(word, count)| Keyword {
                word,
                count,
                category: topic.to_string(),
            })
            .collect();
        let score = u32::from(satisfaction.value());
        let now = Timestamp::now();

        FeedbackEntry {
            id: FeedbackId::new(),
            topic: format_topic(topic),
            text: text.to_string(),
            normalized_text: normalized,
            sentiment,
            initial_satisfaction: satisfaction,
            satisfaction_total: score,
            satisfaction_avg: average(score, 1),
            frequency: 1,
            importance: self.policy.classify(1, sentiment),
            keywords,
            submitted_at: now,
            updated_at: now,
        }
    }

    /// Stable sort by importance, then frequency, both descending.
    fn rank(&mut self) {
        self.entries.sort_by(|a, b| {
            b.importance
                .cmp(&a.importance)
                .then_with(|| b.frequency.cmp(&a.frequency))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::feedback::entry::Importance;

    const RURAL: &str =
        "The budget allocation for healthcare facilities in rural areas is insufficient.";
    const EQUIPMENT: &str =
        "Healthcare budget needs to be increased to improve equipment in public hospitals.";

    #[test]
    fn first_submission_creates_entry() {
        let mut aggregator = FeedbackAggregator::default();
        let outcome = aggregator.submit("healthcare", RURAL, 3).unwrap();

        assert!(!outcome.merged);
        let entry = outcome.entry;
        assert_eq!(entry.topic, "Healthcare");
        assert_eq!(entry.frequency, 1);
        assert_eq!(entry.sentiment, Sentiment::Negative);
        assert_eq!(entry.importance, Importance::Medium);
        assert_eq!(entry.satisfaction_avg, 3);
        assert_eq!(entry.keywords.len(), 5);
        assert_eq!(entry.keywords[0].word, "budget");
        assert_eq!(entry.keywords[0].category, "healthcare");
    }

    #[test]
    fn identical_text_merges() {
        let mut aggregator = FeedbackAggregator::default();
        aggregator.submit("education", "More teachers please", 8).unwrap();
        let outcome = aggregator
            .submit("education", "  MORE teachers   please ", 5)
            .unwrap();

        assert!(outcome.merged);
        assert_eq!(aggregator.len(), 1);
        let entry = &aggregator.entries()[0];
        assert_eq!(entry.frequency, 2);
        assert_eq!(entry.satisfaction_total, 13);
        assert_eq!(entry.satisfaction_avg, 7);
        // Sentiment stays with the first submission.
        assert_eq!(entry.sentiment, Sentiment::Positive);
        assert_eq!(entry.importance, Importance::Medium);
    }

    #[test]
    fn dissimilar_healthcare_feedback_stays_separate() {
        let mut aggregator = FeedbackAggregator::default();
        aggregator.submit("healthcare", RURAL, 3).unwrap();
        aggregator.submit("healthcare", EQUIPMENT, 3).unwrap();

        assert_eq!(aggregator.len(), 2);
        for entry in aggregator.entries() {
            assert_eq!(entry.sentiment, Sentiment::Negative);
            assert_eq!(entry.importance, Importance::Medium);
        }
    }

    #[test]
    fn merges_into_first_match_in_ranked_order() {
        let mut aggregator = FeedbackAggregator::default();
        aggregator.submit("roads", "fix the roads in the north now", 6).unwrap();
        aggregator.submit("roads", "fix the roads in the north today", 6).unwrap();
        assert_eq!(aggregator.len(), 1);
    }

    #[test]
    fn fifth_submission_reaches_high() {
        let mut aggregator = FeedbackAggregator::default();
        for _ in 0..4 {
            aggregator.submit("tax", "lower the income tax", 7).unwrap();
        }
        assert_eq!(aggregator.entries()[0].importance, Importance::Medium);
        let outcome = aggregator.submit("tax", "lower the income tax", 7).unwrap();
        assert_eq!(outcome.entry.importance, Importance::High);
    }

    #[test]
    fn merged_entry_moves_ahead() {
        let mut aggregator = FeedbackAggregator::default();
        aggregator.submit("parks", "more green parks", 8).unwrap();
        aggregator.submit("transit", "faster city buses", 8).unwrap();
        aggregator.submit("transit", "faster city buses", 8).unwrap();

        let topics: Vec<&str> = aggregator.entries().iter().map(|e| e.topic.as_str()).collect();
        assert_eq!(topics, vec!["Transit", "Parks"]);
    }

    #[test]
    fn strict_medium_policy_keeps_pairs_low() {
        let mut aggregator = FeedbackAggregator::new(FeedbackPolicy::strict_medium());
        aggregator.submit("parks", "more green parks", 8).unwrap();
        let outcome = aggregator.submit("parks", "more green parks", 8).unwrap();
        assert_eq!(outcome.entry.importance, Importance::Low);
    }

    #[test]
    fn rejects_blank_text_without_mutating() {
        let mut aggregator = FeedbackAggregator::default();
        assert!(aggregator.submit("parks", "   ", 5).is_err());
        assert!(aggregator.submit("parks", "fine", 0).is_err());
        assert!(aggregator.submit("parks", "fine", 11).is_err());
        assert!(aggregator.is_empty());
    }

    #[test]
    fn metrics_on_empty_collection() {
        assert_eq!(FeedbackAggregator::default().metrics(), FeedbackMetrics::empty());
        assert!(FeedbackAggregator::default().word_cloud(20).is_empty());
    }

    #[test]
    fn metrics_aggregate_frequency_and_satisfaction() {
        let mut aggregator = FeedbackAggregator::default();
        aggregator.submit("healthcare", RURAL, 3).unwrap();
        aggregator.submit("healthcare", RURAL, 4).unwrap();
        aggregator.submit("education", "great new schools", 9).unwrap();
        aggregator.submit("defence", "defence spending wasteful", 2).unwrap();

        let metrics = aggregator.metrics();
        assert_eq!(metrics.total_count, 4);
        // (3 + 4 + 9 + 2) / 4 * 10 = 45
        assert_eq!(metrics.overall_satisfaction_pct, Some(45));
        assert_eq!(metrics.top_concern, "Healthcare");
    }

    #[test]
    fn metrics_without_negative_entries() {
        let mut aggregator = FeedbackAggregator::default();
        aggregator.submit("education", "great new schools", 9).unwrap();
        let metrics = aggregator.metrics();
        assert_eq!(metrics.overall_satisfaction_pct, Some(90));
        assert_eq!(metrics.top_concern, "None");
    }

    #[test]
    fn word_cloud_sums_counts_across_entries() {
        let mut aggregator = FeedbackAggregator::default();
        aggregator.submit("healthcare", RURAL, 3).unwrap();
        aggregator.submit("healthcare", EQUIPMENT, 3).unwrap();

        let cloud = aggregator.word_cloud(20);
        assert_eq!(cloud[0].word, "budget");
        assert_eq!(cloud[0].count, 2);
        assert_eq!(cloud[0].weight, 5);
        assert_eq!(cloud[0].category, WordCategory::Budget);
        assert_eq!(cloud[1].word, "healthcare");
        assert_eq!(cloud[1].count, 2);
        assert!(cloud.iter().skip(2).all(|t| t.count == 1 && t.weight == 1));

        assert_eq!(aggregator.word_cloud(3).len(), 3);
    }

    #[test]
    fn derived_views() {
        let mut aggregator = FeedbackAggregator::default();
        aggregator.submit("healthcare", RURAL, 3).unwrap();
        aggregator.submit("healthcare", EQUIPMENT, 2).unwrap();
        aggregator.submit("education", "great new schools", 9).unwrap();

        let dist = aggregator.sentiment_distribution();
        assert_eq!((dist.negative, dist.neutral, dist.positive), (2, 0, 1));

        let concerns = aggregator.top_concerns(5);
        assert_eq!(concerns.len(), 2);
        assert_eq!(concerns[0].text, RURAL);

        let themes = aggregator.common_themes(10);
        assert_eq!(themes[0].word, "budget");
        assert_eq!(themes[0].entry_count, 2);

        let analysis = aggregator.analysis();
        assert_eq!(analysis.entries.len(), 3);
        assert_eq!(analysis.metrics.total_count, 3);
    }

    #[test]
    fn restore_reranks_entries() {
        let mut source = FeedbackAggregator::default();
        source.submit("parks", "more green parks", 8).unwrap();
        source.submit("transit", "faster city buses", 8).unwrap();
        source.submit("transit", "faster city buses", 8).unwrap();

        let mut shuffled = source.entries().to_vec();
        shuffled.reverse();
        let restored = FeedbackAggregator::restore(FeedbackPolicy::default(), shuffled);
        assert_eq!(restored.entries()[0].topic, "Transit");
    }
}
