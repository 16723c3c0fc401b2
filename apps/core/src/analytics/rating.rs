//! Rating (1-4 Likert) question analysis.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::stats::{mean, median, round2};
use crate::models::{AnswerValue, Answers};

/// Lowest and highest points of the rating scale
pub const SCALE: std::ops::RangeInclusive<u8> = 1..=4;

/// Statistical summary of one rating question in one poll phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Occurrences per scale point, always keyed 1 through 4
    pub distribution: BTreeMap<u8, usize>,
}

impl RatingSummary {
    /// Zero-valued summary for a phase without any rating
    pub fn empty() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            median: 0.0,
            distribution: SCALE.map(|point| (point, 0)).collect(),
        }
    }
}

/// Summarize every usable rating given for `question_id`.
///
/// Records without the question, or with a value that is not an integer on
/// the scale, are skipped.
pub fn analyze_rating_question(responses: &[Answers], question_id: &str) -> RatingSummary {
    let answered: Vec<_> = responses
        .iter()
        .filter_map(|answers| answers.get(question_id))
        .collect();
    let values: Vec<u8> = answered.iter().copied().filter_map(AnswerValue::as_rating).collect();

    let skipped = answered.len() - values.len();
    if skipped > 0 {
        debug!("Skipped {} unusable ratings for {}", skipped, question_id);
    }

    if values.is_empty() {
        return RatingSummary::empty();
    }

    let mut distribution: BTreeMap<u8, usize> = SCALE.map(|point| (point, 0)).collect();
    for &value in &values {
        *distribution.entry(value).or_insert(0) += 1;
    }

    RatingSummary {
        count: values.len(),
        mean: round2(mean(&values)),
        median: median(&values),
        distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(values: &[serde_json::Value]) -> Vec<Answers> {
        values
            .iter()
            .map(|v| serde_json::from_value(v.clone()).expect("answers"))
            .collect()
    }

    #[test]
    fn test_basic_rating_summary() {
        let responses = records(&[json!({"q1": "1"}), json!({"q1": "3"})]);
        let summary = analyze_rating_question(&responses, "q1");

        assert_eq!(summary.count, 2);
        assert_eq!(summary.mean, 2.0);
        assert_eq!(summary.median, 2.0);
        assert_eq!(
            summary.distribution,
            BTreeMap::from([(1, 1), (2, 0), (3, 1), (4, 0)])
        );
    }

    #[test]
    fn test_mean_is_rounded() {
        let responses = records(&[json!({"q2": "1"}), json!({"q2": "1"}), json!({"q2": "2"})]);
        let summary = analyze_rating_question(&responses, "q2");
        assert_eq!(summary.mean, 1.33);
        assert_eq!(summary.median, 1.0);
    }

    #[test]
    fn test_mean_tie_rounds_to_even() {
        let mut answers: Vec<serde_json::Value> = vec![json!({"q1": "2"}); 7];
        answers.push(json!({"q1": "3"}));
        let summary = analyze_rating_question(&records(&answers), "q1");

        assert_eq!(summary.count, 8);
        assert_eq!(summary.mean, 2.12);
    }

    #[test]
    fn test_invalid_values_are_skipped() {
        let responses = records(&[
            json!({"q1": "abc"}),
            json!({"q1": "9"}),
            json!({"q1": null}),
            json!({"q1": 4}),
            json!({"q2": "3"}),
        ]);
        let summary = analyze_rating_question(&responses, "q1");

        assert_eq!(summary.count, 1);
        assert_eq!(summary.mean, 4.0);
        assert_eq!(summary.distribution.values().sum::<usize>(), summary.count);
    }

    #[test]
    fn test_empty_input_is_zero_valued() {
        let summary = analyze_rating_question(&[], "q1");
        assert_eq!(summary, RatingSummary::empty());
        assert_eq!(summary.distribution.len(), 4);

        let mut unrelated = Answers::new();
        unrelated.insert("q5".to_string(), AnswerValue::from("text"));
        let summary = analyze_rating_question(&[unrelated], "q1");
        assert_eq!(summary.count, 0);
        assert_eq!(summary.mean, 0.0);
    }

    #[test]
    fn test_distribution_invariants_hold() {
        let responses = records(&[
            json!({"q3": "2"}),
            json!({"q3": "2"}),
            json!({"q3": "4"}),
            json!({"q3": "0"}),
            json!({"q3": "3"}),
        ]);
        let summary = analyze_rating_question(&responses, "q3");

        let keys: Vec<u8> = summary.distribution.keys().copied().collect();
        assert_eq!(keys, vec![1, 2, 3, 4]);
        assert_eq!(summary.distribution.values().sum::<usize>(), summary.count);
        assert!(summary.mean >= 1.0 && summary.mean <= 4.0);
    }

    #[test]
    fn test_serialized_shape() {
        let responses = records(&[json!({"q1": "4"})]);
        let json = serde_json::to_value(analyze_rating_question(&responses, "q1")).unwrap();

        assert_eq!(json["count"], 1);
        assert_eq!(json["mean"], 4.0);
        assert_eq!(json["median"], 4.0);
        assert_eq!(json["distribution"]["4"], 1);
        assert_eq!(json["distribution"]["1"], 0);
    }
}
