//! Text processing for feedback: normalization, similarity and keywords.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Characters removed from tokens before keyword counting.
const STRIPPED_PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')',
];

/// Tokens at or below this many characters are never keywords.
const MIN_KEYWORD_CHARS: usize = 2;

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
        "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
        "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
        "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
        "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
        "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
        "for", "with", "about", "against", "between", "into", "through", "during", "before",
        "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
        "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
        "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
        "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
        "just", "don", "should", "now",
    ]
    .into_iter()
    .collect()
});

/// Returns true for words excluded from keyword extraction.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Lowercases, collapses whitespace runs to single spaces and trims.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Jaccard similarity of the single-space-separated word sets of two
/// normalized texts. An empty union scores 0.
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    let left: HashSet<&str> = a.split(' ').collect();
    let right: HashSet<&str> = b.split(' ').collect();

    let union = left.union(&right).count();
    if union == 0 {
        return 0.0;
    }
    left.intersection(&right).count() as f64 / union as f64
}

/// Counts keyword candidates in `normalized`, most frequent first.
///
/// Ties keep first-occurrence order. At most `limit` terms are returned.
pub fn top_terms(normalized: &str, limit: usize) -> Vec<(String, u32)> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u32> = HashMap::new();

    for raw in normalized.split_whitespace() {
        let token: String = raw
            .chars()
            .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
            .collect();
        if token.chars().count() <= MIN_KEYWORD_CHARS || is_stop_word(&token) {
            continue;
        }
        match counts.get_mut(&token) {
            Some(count) => *count += 1,
            None => {
                counts.insert(token.clone(), 1);
                order.push(token);
            }
        }
    }

    let mut ranked: Vec<(String, u32)> = order
        .into_iter()
        .map(|word| {
            let count = counts.get(&word).copied().unwrap_or(0);
            (word, count)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
}

/// Turns a topic slug into a display label.
///
/// `social-welfare` becomes `Social Welfare`; an empty slug is `General`.
pub fn format_topic(slug: &str) -> String {
    let words: Vec<String> = slug
        .split('-')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect();

    if words.is_empty() {
        "General".to_string()
    } else {
        words.join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_and_lowercases() {
        assert_eq!(normalize("  The  Budget\tIS\n low  "), "the budget is low");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn identical_texts_have_similarity_one() {
        assert!((jaccard_similarity("roads need repair", "roads need repair") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn similarity_counts_distinct_words() {
        // {a, b, c} vs {b, c, d}: 2 / 4
        assert!((jaccard_similarity("a b c", "b c d") - 0.5).abs() < 1e-9);
        assert!((jaccard_similarity("a a b", "a b") - 1.0).abs() < 1e-9);
        assert_eq!(jaccard_similarity("x", "y"), 0.0);
    }

    #[test]
    fn keywords_strip_punctuation_and_stop_words() {
        let terms = top_terms(
            "the budget allocation for healthcare facilities in rural areas is insufficient.",
            5,
        );
        let words: Vec<&str> = terms.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(
            words,
            vec!["budget", "allocation", "healthcare", "facilities", "rural"]
        );
    }

    #[test]
    fn keywords_rank_by_count_then_first_occurrence() {
        let terms = top_terms("roads schools roads hospitals schools roads", 5);
        assert_eq!(
            terms,
            vec![
                ("roads".to_string(), 3),
                ("schools".to_string(), 2),
                ("hospitals".to_string(), 1),
            ]
        );
    }

    #[test]
    fn keywords_drop_short_tokens() {
        let terms = top_terms("we go to a big tax fee", 5);
        let words: Vec<&str> = terms.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words, vec!["big", "tax", "fee"]);
    }

    #[test]
    fn keywords_respect_limit() {
        let terms = top_terms("alpha bravo charlie delta echo foxtrot golf", 3);
        assert_eq!(terms.len(), 3);
    }

    #[test]
    fn stop_word_list_is_loaded() {
        assert!(is_stop_word("because"));
        assert!(is_stop_word("should"));
        assert!(!is_stop_word("budget"));
    }

    #[test]
    fn topic_slugs_become_labels() {
        assert_eq!(format_topic("social-welfare"), "Social Welfare");
        assert_eq!(format_topic("healthcare"), "Healthcare");
        assert_eq!(format_topic(""), "General");
        assert_eq!(format_topic("--"), "General");
    }
}
