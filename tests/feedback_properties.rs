//! Property tests for feedback ranking.

use budget_allocation::domain::feedback::{
    FeedbackAggregator, FeedbackPolicy, Importance, Sentiment,
};
use budget_allocation::domain::foundation::FeedbackId;
use proptest::prelude::*;

const VOCABULARY: &[&str] = &[
    "roads", "schools", "hospitals", "budget", "taxes", "water", "parks", "buses", "clinics",
    "teachers",
];
const TOPICS: &[&str] = &["healthcare", "education", "infrastructure", "social-welfare"];

fn submission_strategy() -> impl Strategy<Value = (String, String, i64)> {
    (
        0..TOPICS.len(),
        proptest::collection::vec(0..VOCABULARY.len(), 1..5),
        1i64..=10,
    )
        .prop_map(|(topic, words, satisfaction)| {
            let text = words
                .into_iter()
                .map(|i| VOCABULARY[i])
                .collect::<Vec<_>>()
                .join(" ");
            (TOPICS[topic].to_string(), text, satisfaction)
        })
}

fn policy_strategy() -> impl Strategy<Value = FeedbackPolicy> {
    prop_oneof![Just(FeedbackPolicy::default()), Just(FeedbackPolicy::strict_medium())]
}

fn sentiment_strategy() -> impl Strategy<Value = Sentiment> {
    prop_oneof![
        Just(Sentiment::Negative),
        Just(Sentiment::Neutral),
        Just(Sentiment::Positive)
    ]
}

fn key_of(aggregator: &FeedbackAggregator, id: FeedbackId) -> Option<(Importance, u32)> {
    aggregator
        .entries()
        .iter()
        .find(|e| e.id == id)
        .map(|e| (e.importance, e.frequency))
}

proptest! {
    #[test]
    fn importance_is_monotonic_in_frequency(
        policy in policy_strategy(),
        sentiment in sentiment_strategy(),
        frequency in 1u32..50,
    ) {
        prop_assert!(policy.classify(frequency, sentiment) <= policy.classify(frequency + 1, sentiment));
    }

    #[test]
    fn repeated_identical_text_never_splits(
        (topic, text, satisfaction) in submission_strategy(),
        repeats in 2usize..8,
    ) {
        let mut aggregator = FeedbackAggregator::default();
        for _ in 0..repeats {
            aggregator.submit(&topic, &text, satisfaction).unwrap();
        }
        prop_assert_eq!(aggregator.len(), 1);
        prop_assert_eq!(aggregator.entries()[0].frequency as usize, repeats);
    }

    #[test]
    fn entries_stay_ranked_and_stable(
        policy in policy_strategy(),
        submissions in proptest::collection::vec(submission_strategy(), 1..40),
    ) {
        let mut aggregator = FeedbackAggregator::new(policy);
        for (topic, text, satisfaction) in submissions {
            let before: Vec<FeedbackId> = aggregator.entries().iter().map(|e| e.id).collect();
            let outcome = aggregator.submit(&topic, &text, satisfaction).unwrap();

            let entries = aggregator.entries();
            let sorted = entries.windows(2).all(|w| {
                (w[0].importance, w[0].frequency) >= (w[1].importance, w[1].frequency)
            });
            prop_assert!(sorted);

            // Untouched entries with equal keys keep their previous order.
            let after: Vec<FeedbackId> = entries.iter().map(|e| e.id).collect();
            for (i, a) in before.iter().enumerate() {
                for b in before.iter().skip(i + 1) {
                    if *a == outcome.entry.id || *b == outcome.entry.id {
                        continue;
                    }
                    if key_of(&aggregator, *a) != key_of(&aggregator, *b) {
                        continue;
                    }
                    let pos_a = after.iter().position(|id| id == a);
                    let pos_b = after.iter().position(|id| id == b);
                    prop_assert!(pos_a < pos_b);
                }
            }
        }
    }
}
