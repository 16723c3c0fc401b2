//! Keyword Extraction for free-text answers.
//!
//! Counts word frequencies across all responses of a question, after
//! punctuation stripping and English stopword filtering. The output feeds the
//! word bubble chart, so it is a plain `{text, value}` list.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

use super::stats::{count_occurrences, most_common};

/// Default number of keywords returned
pub const MAX_KEYWORDS: usize = 50;

/// English function words and contractions
const STOPWORDS_EN: &[&str] = &[
    "a", "an", "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at",
    "by", "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why", "how",
    "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor",
    "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just",
    "don", "don't", "should", "should've", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain",
    "aren", "aren't", "couldn", "couldn't", "didn", "didn't", "doesn", "doesn't", "hadn",
    "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't",
    "mustn", "mustn't", "needn", "needn't", "shan", "shan't", "shouldn", "shouldn't", "wasn",
    "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't", "be", "been", "is", "am",
    "are", "was", "were", "being", "have", "has", "had", "having", "do", "does", "did", "doing",
    "that", "this", "these", "those", "i", "me", "my", "myself", "we", "our", "ours",
    "ourselves", "you", "you're", "you've", "you'll", "you'd", "your", "yours", "yourself",
    "yourselves", "he", "him", "his", "himself", "she", "she's", "her", "hers", "herself", "it",
    "it's", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "would", "could",
];

static STOPWORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();
static PUNCTUATION: OnceLock<Regex> = OnceLock::new();

fn stopwords() -> &'static HashSet<&'static str> {
    STOPWORDS.get_or_init(|| STOPWORDS_EN.iter().copied().collect())
}

fn punctuation() -> &'static Regex {
    // ASCII punctuation only, no locale tables involved
    PUNCTUATION.get_or_init(|| Regex::new(r"[[:punct:]]").expect("static punctuation pattern"))
}

/// A single keyword with its frequency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    /// The keyword
    pub text: String,
    /// Number of occurrences across all responses
    pub value: usize,
}

/// Frequency-based keyword extractor
pub struct KeywordExtractor {
    min_word_length: usize,
    max_keywords: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    /// Create a new keyword extractor with default settings
    pub fn new() -> Self {
        Self::with_config(2, MAX_KEYWORDS)
    }

    /// Create a keyword extractor with custom configuration
    pub fn with_config(min_word_length: usize, max_keywords: usize) -> Self {
        Self {
            min_word_length,
            max_keywords,
        }
    }

    fn is_stopword(&self, word: &str) -> bool {
        stopwords().contains(word)
    }

    /// Tokenize one text: lower-case, punctuation to spaces, whitespace split
    fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let cleaned = punctuation().replace_all(&lowered, " ");

        cleaned
            .split_whitespace()
            .filter(|word| word.chars().count() >= self.min_word_length && !self.is_stopword(word))
            .map(|word| word.to_string())
            .collect()
    }

    /// Extract the most frequent keywords over all `texts` combined.
    ///
    /// Ties keep the order in which the words were first seen.
    pub fn extract<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Keyword> {
        let counts = count_occurrences(texts.iter().flat_map(|text| self.tokenize(text.as_ref())));

        most_common(counts)
            .into_iter()
            .take(self.max_keywords)
            .map(|(text, value)| Keyword { text, value })
            .collect()
    }
}

/// Extract the top keywords from a list of texts with the default extractor
pub fn extract_keywords<S: AsRef<str>>(texts: &[S]) -> Vec<Keyword> {
    KeywordExtractor::new().extract(texts)
}
