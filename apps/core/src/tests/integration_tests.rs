//! Integration Tests
//!
//! Full workflows: submissions go through the service layer into SQLite and
//! come back out as an analytics report.

use crate::config::AppConfig;
use crate::database::{self, SqliteResponseStore};
use crate::error::AppError;
use crate::models::{Answers, PollSubmission};
use crate::service;
use serde_json::json;
use tempfile::{tempdir, TempDir};

async fn create_store() -> (TempDir, SqliteResponseStore) {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = AppConfig {
        database_url: format!("sqlite://{}?mode=rwc", dir.path().join("polls.sqlite").display()),
        max_connections: 1,
        ..AppConfig::default()
    };
    let pool = database::init_db(&config).await.expect("Failed to init db");
    (dir, SqliteResponseStore::new(pool))
}

fn submission(poll_type: &str, answers: serde_json::Value) -> PollSubmission {
    PollSubmission {
        poll_type: poll_type.to_string(),
        answers: serde_json::from_value::<Answers>(answers).expect("answers"),
    }
}

#[cfg(test)]
mod workflow_tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_then_analyze() {
        let (_dir, store) = create_store().await;

        let submissions = vec![
            submission(
                "pre",
                json!({"q1": "1", "q2": "2", "q3": "3", "q4": "economic concerns, lack of physical activity", "q5": "More sleep"}),
            ),
            submission(
                "pre",
                json!({"q1": "3", "q2": "2", "q3": "3", "q4": "economic concerns", "q5": ""}),
            ),
            submission(
                "post",
                json!({"q1": "4", "q2": "4", "q3": "4", "q4": ["lack of physical activity"], "q5": "Sleep and outdoor time"}),
            ),
        ];

        for (i, s) in submissions.into_iter().enumerate() {
            let receipt = service::submit_poll(&store, s).await.expect("submit");
            assert_eq!(receipt.status, "success");
            assert_eq!(receipt.response_id, i as i64 + 1);
        }

        let report = service::analytics(&store).await.expect("analytics");
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["summary"]["pre_poll_count"], 2);
        assert_eq!(json["summary"]["post_poll_count"], 1);
        assert_eq!(json["summary"]["total_responses"], 3);

        assert_eq!(json["questions"]["q1"]["pre_poll"]["mean"], 2.0);
        assert_eq!(json["questions"]["q1"]["differential"]["mean_change"], 2.0);
        assert_eq!(json["questions"]["q2"]["differential"]["mean_change"], 2.0);
        assert_eq!(json["questions"]["q3"]["differential"]["distribution_change"]["3"], -2);

        assert_eq!(
            json["questions"]["q4"]["pre_poll"]["selections"],
            json!({"economic concerns": 2, "lack of physical activity": 1})
        );
        assert_eq!(
            json["questions"]["q4"]["differential"]["selection_changes"],
            json!({"economic concerns": -2, "lack of physical activity": 0})
        );

        assert_eq!(json["questions"]["q5"]["pre_poll"]["count"], 1);
        assert_eq!(json["questions"]["q5"]["pre_poll"]["response_rate"], 50.0);
        assert_eq!(json["questions"]["q5"]["differential"]["response_rate_change"], 50.0);
        assert_eq!(
            json["questions"]["q5"]["post_poll"]["keywords"][0],
            json!({"text": "sleep", "value": 1})
        );
    }

    #[tokio::test]
    async fn test_invalid_submission_is_not_stored() {
        let (_dir, store) = create_store().await;

        let err = service::submit_poll(&store, submission("pre", json!({})))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let report = service::analytics(&store).await.expect("analytics");
        assert_eq!(report.summary.total_responses, 0);
    }

    #[tokio::test]
    async fn test_malformed_answers_do_not_break_analytics() {
        let (_dir, store) = create_store().await;

        service::submit_poll(
            &store,
            submission(
                "post",
                json!({"q1": "strongly", "q4": {"unexpected": true}, "q5": 12, "q99": "ignored"}),
            ),
        )
        .await
        .expect("submit");

        let report = service::analytics(&store).await.expect("analytics");
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["questions"]["q1"]["post_poll"]["count"], 0);
        assert_eq!(json["questions"]["q4"]["post_poll"]["count"], 1);
        assert_eq!(json["questions"]["q4"]["post_poll"]["selections"], json!({}));
        assert_eq!(json["questions"]["q5"]["post_poll"]["response_rate"], 0.0);
        assert!(json["questions"].get("q99").is_none());
    }
}
