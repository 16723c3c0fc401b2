//! Free-text question analysis.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::keywords::{extract_keywords, Keyword};
use super::stats::round2;
use crate::models::{AnswerValue, Answers};

/// Statistical summary of one free-text question in one poll phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSummary {
    /// Number of non-empty answers
    pub count: usize,
    /// Percentage of all records that answered
    pub response_rate: f64,
    /// Mean length in characters of the non-empty answers
    pub average_length: f64,
    pub keywords: Vec<Keyword>,
}

/// Summarize the non-empty answers to `question_id`.
pub fn analyze_text_question(responses: &[Answers], question_id: &str) -> TextSummary {
    let answered: Vec<_> = responses
        .iter()
        .filter_map(|answers| answers.get(question_id))
        .collect();
    let texts: Vec<&str> = answered.iter().copied().filter_map(AnswerValue::as_text).collect();

    let skipped = answered.len() - texts.len();
    if skipped > 0 {
        debug!("Skipped {} empty or non-text answers for {}", skipped, question_id);
    }

    let response_rate = if responses.is_empty() {
        0.0
    } else {
        round2(texts.len() as f64 / responses.len() as f64 * 100.0)
    };

    let average_length = if texts.is_empty() {
        0.0
    } else {
        let total: usize = texts.iter().map(|t| t.chars().count()).sum();
        round2(total as f64 / texts.len() as f64)
    };

    TextSummary {
        count: texts.len(),
        response_rate,
        average_length,
        keywords: extract_keywords(&texts),
    }
}
