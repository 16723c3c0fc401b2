//! Analytics Report - output structure of the analytics engine.
//!
//! Serialized directly as the analytics response body, so field names and
//! nesting are part of the public contract.

use indexmap::IndexMap;
use serde::Serialize;

use super::differential::{Differential, QuestionSummary};
use crate::catalogue::QuestionType;

/// Number of responses per poll phase
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseCounts {
    pub pre_poll_count: usize,
    pub post_poll_count: usize,
    pub total_responses: usize,
}

impl PhaseCounts {
    pub fn new(pre_poll_count: usize, post_poll_count: usize) -> Self {
        Self {
            pre_poll_count,
            post_poll_count,
            total_responses: pre_poll_count + post_poll_count,
        }
    }
}

/// Pre, post and differential for one question, plus catalogue metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionAnalytics {
    pub pre_poll: QuestionSummary,
    pub post_poll: QuestionSummary,
    pub differential: Differential,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_type: Option<QuestionType>,
}

/// Complete analytics for both poll phases
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub summary: PhaseCounts,
    /// Keyed by question id, in roster order
    pub questions: IndexMap<String, QuestionAnalytics>,
}

impl AnalyticsReport {
    /// Analytics for one question id
    pub fn question(&self, id: &str) -> Option<&QuestionAnalytics> {
        self.questions.get(id)
    }

    /// One-line description for logging
    pub fn summary_line(&self) -> String {
        format!(
            "pre: {}, post: {}, questions: {}",
            self.summary.pre_poll_count,
            self.summary.post_poll_count,
            self.questions.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_counts_total() {
        let counts = PhaseCounts::new(3, 4);
        assert_eq!(counts.total_responses, 7);
    }

    #[test]
    fn test_summary_line() {
        let report = AnalyticsReport {
            summary: PhaseCounts::new(1, 2),
            questions: IndexMap::new(),
        };
        assert_eq!(report.summary_line(), "pre: 1, post: 2, questions: 0");
        assert!(report.question("q1").is_none());
    }
}
