//! Analytics Orchestrator.
//!
//! Runs the matching analyzer for each question of the fixed roster on both
//! poll phases, pairs the results through the differential calculator and
//! merges in catalogue metadata. Question ids outside the roster are never
//! analyzed, even if present in stored answers.

use indexmap::IndexMap;
use std::time::Instant;
use tracing::debug;

use super::checkbox::analyze_checkbox_question;
use super::differential::{calculate_differential, text_differential, QuestionSummary};
use super::rating::analyze_rating_question;
use super::report::{AnalyticsReport, PhaseCounts, QuestionAnalytics};
use super::text::analyze_text_question;
use crate::catalogue::{self, QuestionType};
use crate::models::Answers;

/// Questions analyzed on every request
pub const ROSTER: &[(&str, QuestionType)] = &[
    ("q1", QuestionType::Rating),
    ("q2", QuestionType::Rating),
    ("q3", QuestionType::Rating),
    ("q4", QuestionType::Checkbox),
    ("q5", QuestionType::Text),
];

/// Run the analyzer for `question_type` over one phase
pub fn summarize(
    question_type: QuestionType,
    responses: &[Answers],
    question_id: &str,
) -> QuestionSummary {
    match question_type {
        QuestionType::Rating => {
            QuestionSummary::Rating(analyze_rating_question(responses, question_id))
        }
        QuestionType::Checkbox => {
            QuestionSummary::Checkbox(analyze_checkbox_question(responses, question_id))
        }
        QuestionType::Text => QuestionSummary::Text(analyze_text_question(responses, question_id)),
    }
}

fn analyze_question(
    question_id: &str,
    question_type: QuestionType,
    pre_records: &[Answers],
    post_records: &[Answers],
) -> QuestionAnalytics {
    let pre_poll = summarize(question_type, pre_records, question_id);
    let post_poll = summarize(question_type, post_records, question_id);

    let differential = match (&pre_poll, &post_poll) {
        (QuestionSummary::Text(pre), QuestionSummary::Text(post)) => text_differential(pre, post),
        _ => calculate_differential(&pre_poll, &post_poll),
    };

    let metadata = catalogue::question(question_id);

    QuestionAnalytics {
        pre_poll,
        post_poll,
        differential,
        question_text: metadata.map(|q| q.question.clone()),
        question_type: metadata.map(|q| q.question_type),
    }
}

/// Compute the full analytics report from the answers of both phases.
///
/// Pure and infallible: malformed answers only reduce the data analyzed.
pub fn compute_analytics(pre_records: &[Answers], post_records: &[Answers]) -> AnalyticsReport {
    let start = Instant::now();

    let questions: IndexMap<String, QuestionAnalytics> = ROSTER
        .iter()
        .map(|&(question_id, question_type)| {
            debug!(
                "Analyzing {} as {} question",
                question_id,
                question_type.as_str()
            );
            (
                question_id.to_string(),
                analyze_question(question_id, question_type, pre_records, post_records),
            )
        })
        .collect();

    let report = AnalyticsReport {
        summary: PhaseCounts::new(pre_records.len(), post_records.len()),
        questions,
    };

    debug!(
        "Analytics computed in {}µs ({})",
        start.elapsed().as_micros(),
        report.summary_line()
    );

    report
}
