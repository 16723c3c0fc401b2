//! Checkbox (multi-select) question analysis.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::stats::{count_occurrences, most_common};
use crate::models::Answers;

/// Number of entries in `top_selections`
pub const TOP_SELECTIONS: usize = 3;

/// Statistical summary of one checkbox question in one poll phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckboxSummary {
    /// Number of records examined, answered or not
    pub count: usize,
    /// Selection label to frequency, most common first
    pub selections: IndexMap<String, usize>,
    pub top_selections: IndexMap<String, usize>,
}

/// Count every selection made for `question_id` across all records.
pub fn analyze_checkbox_question(responses: &[Answers], question_id: &str) -> CheckboxSummary {
    let mut skipped = 0;
    let mut labels = Vec::new();
    for value in responses.iter().filter_map(|answers| answers.get(question_id)) {
        let picked = value.selections();
        if picked.is_empty() {
            skipped += 1;
        }
        labels.extend(picked);
    }
    if skipped > 0 {
        debug!("Skipped {} answers without selections for {}", skipped, question_id);
    }

    let ranked = most_common(count_occurrences(labels));

    let top_selections = ranked
        .iter()
        .take(TOP_SELECTIONS)
        .map(|(label, count)| (label.clone(), *count))
        .collect();

    CheckboxSummary {
        count: responses.len(),
        selections: ranked.into_iter().collect(),
        top_selections,
    }
}
