//! Differential Calculator - change between the pre and post phase.

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;

use super::checkbox::CheckboxSummary;
use super::rating::RatingSummary;
use super::stats::round2;
use super::text::TextSummary;

/// Per-phase summary of any question shape
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QuestionSummary {
    Rating(RatingSummary),
    Checkbox(CheckboxSummary),
    Text(TextSummary),
}

/// Post-minus-pre change report for one question
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Differential {
    Rating {
        mean_change: f64,
        distribution_change: BTreeMap<u8, i64>,
    },
    Checkbox {
        /// Largest absolute shifts first
        selection_changes: IndexMap<String, i64>,
    },
    Text {
        response_rate_change: f64,
        avg_length_change: f64,
    },
    /// Serialized as `{}`
    Unsupported {},
}

/// Compare two summaries of the same question.
///
/// Free-text differentials are assembled by the orchestrator with
/// [`text_differential`]; text and mismatched shapes yield an empty object here.
pub fn calculate_differential(pre: &QuestionSummary, post: &QuestionSummary) -> Differential {
    match (pre, post) {
        (QuestionSummary::Rating(pre), QuestionSummary::Rating(post)) => {
            rating_differential(pre, post)
        }
        (QuestionSummary::Checkbox(pre), QuestionSummary::Checkbox(post)) => {
            checkbox_differential(pre, post)
        }
        _ => Differential::Unsupported {},
    }
}

pub fn rating_differential(pre: &RatingSummary, post: &RatingSummary) -> Differential {
    if pre.count == 0 || post.count == 0 {
        return Differential::Rating {
            mean_change: 0.0,
            distribution_change: BTreeMap::new(),
        };
    }

    let distribution_change = pre
        .distribution
        .keys()
        .chain(post.distribution.keys())
        .map(|&point| {
            let before = pre.distribution.get(&point).copied().unwrap_or(0) as i64;
            let after = post.distribution.get(&point).copied().unwrap_or(0) as i64;
            (point, after - before)
        })
        .collect();

    Differential::Rating {
        mean_change: round2(post.mean - pre.mean),
        distribution_change,
    }
}

pub fn checkbox_differential(pre: &CheckboxSummary, post: &CheckboxSummary) -> Differential {
    if pre.selections.is_empty() || post.selections.is_empty() {
        return Differential::Checkbox {
            selection_changes: IndexMap::new(),
        };
    }

    // Union in pre order, then labels only seen after
    let mut changes: IndexMap<String, i64> = IndexMap::new();
    for label in pre.selections.keys().chain(post.selections.keys()) {
        changes.entry(label.clone()).or_insert_with(|| {
            let before = pre.selections.get(label).copied().unwrap_or(0) as i64;
            let after = post.selections.get(label).copied().unwrap_or(0) as i64;
            after - before
        });
    }

    changes.sort_by(|_, a, _, b| b.abs().cmp(&a.abs()));

    Differential::Checkbox {
        selection_changes: changes,
    }
}

pub fn text_differential(pre: &TextSummary, post: &TextSummary) -> Differential {
    Differential::Text {
        response_rate_change: round2(post.response_rate - pre.response_rate),
        avg_length_change: round2(post.average_length - pre.average_length),
    }
}
