//! Frequency-based keyword extraction.

use regex::Regex;
use std::collections::HashMap;

/// Default number of keywords returned.
pub const DEFAULT_KEYWORD_COUNT: usize = 10;

/// Fallback stopword list: common English function words.
const CORE_STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will", "would",
    "could", "should", "may", "might", "must", "can",
];

/// Extended stopword list used when available: the core set plus pronouns,
/// determiners, and other high-frequency connectives.
const EXTENDED_STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will", "would",
    "could", "should", "may", "might", "must", "can", "i", "you", "he", "she", "it", "we", "they",
    "this", "that", "these", "those", "as", "if", "than", "then", "so", "not", "no", "nor", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such", "only", "own", "same",
    "very", "just", "about", "above", "below", "after", "before", "between", "during", "through",
    "over", "under", "again", "once", "here", "there", "when", "where", "why", "how", "what",
    "which", "who", "whom", "from", "into", "out", "off", "up", "down", "its", "their", "our",
    "your", "my", "me", "him", "her", "them", "us", "am", "being", "having", "doing", "because",
    "while", "until", "against", "also",
];

/// Which stopword list the extractor filters with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopwordList {
    /// The full embedded English list.
    #[default]
    Extended,
    /// The compact fallback list.
    Core,
}

impl StopwordList {
    fn words(&self) -> &'static [&'static str] {
        match self {
            StopwordList::Extended => EXTENDED_STOPWORDS,
            StopwordList::Core => CORE_STOPWORDS,
        }
    }

    /// Check whether a lowercase token is a stopword.
    pub fn contains(&self, word: &str) -> bool {
        self.words().contains(&word)
    }
}

/// Extracts the most frequent content words from text.
pub struct KeywordExtractor {
    stopwords: StopwordList,
    word: Regex,
}

impl KeywordExtractor {
    /// Create an extractor with the extended stopword list.
    pub fn new() -> Self {
        Self::with_stopwords(StopwordList::default())
    }

    /// Create an extractor with an explicit stopword list.
    pub fn with_stopwords(stopwords: StopwordList) -> Self {
        Self {
            stopwords,
            word: Regex::new(r"\b[a-zA-Z]{3,}\b").expect("static regex"),
        }
    }

    /// Extract up to `count` keywords, most frequent first.
    ///
    /// Tokens are lowercased runs of 3+ letters with stopwords removed.
    /// Frequency ties are broken by first-encountered order, so the result
    /// is stable for a given input.
    pub fn extract(&self, text: &str, count: usize) -> Vec<String> {
        let lowered = text.to_lowercase();

        // (count, first-seen index) per token
        let mut frequencies: HashMap<&str, (usize, usize)> = HashMap::new();
        let mut order = 0usize;

        for m in self.word.find_iter(&lowered) {
            let token = m.as_str();
            if self.stopwords.contains(token) {
                continue;
            }
            frequencies
                .entry(token)
                .and_modify(|(n, _)| *n += 1)
                .or_insert_with(|| {
                    order += 1;
                    (1, order)
                });
        }

        let mut ranked: Vec<(&str, (usize, usize))> = frequencies.into_iter().collect();
        ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));

        ranked
            .into_iter()
            .take(count)
            .map(|(word, _)| word.to_string())
            .collect()
    }

    /// Extract with the default keyword count.
    pub fn extract_default(&self, text: &str) -> Vec<String> {
        self.extract(text, DEFAULT_KEYWORD_COUNT)
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}
