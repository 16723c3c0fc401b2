use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};

use crate::error::AppError;

/// The two survey administrations compared against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PollType {
    Pre,
    Post,
}

impl PollType {
    /// Returns the value stored in the `poll_type` column
    pub fn as_str(&self) -> &'static str {
        match self {
            PollType::Pre => "pre",
            PollType::Post => "post",
        }
    }
}

impl fmt::Display for PollType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PollType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pre" => Ok(PollType::Pre),
            "post" => Ok(PollType::Post),
            other => Err(AppError::Validation(format!(
                "poll_type must be 'pre' or 'post', got '{}'",
                other
            ))),
        }
    }
}

/// A single answer value as submitted by the poll form.
///
/// Checkbox groups arrive either as one `", "`-joined string or as a native
/// list, rating answers as integer strings or numbers. Every shape is accepted
/// here and interpreted by the analyzer that needs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    List(Vec<AnswerValue>),
    Other(serde_json::Value),
}

/// Separator used by the frontend when it joins checkbox selections
pub const SELECTION_SEPARATOR: &str = ", ";

impl AnswerValue {
    /// Interpret the value as a point on the 1-4 rating scale.
    ///
    /// Returns `None` for non-numeric values and for integers outside the scale.
    pub fn as_rating(&self) -> Option<u8> {
        let value = match self {
            AnswerValue::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))?,
            AnswerValue::Text(s) => s.trim().parse::<i64>().ok()?,
            _ => return None,
        };

        if (1..=4).contains(&value) {
            Some(value as u8)
        } else {
            None
        }
    }

    /// Non-empty free text, if this is a text answer
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// Normalize a checkbox answer into its individual selection labels.
    pub fn selections(&self) -> Vec<String> {
        match self {
            AnswerValue::Text(s) => s
                .split(SELECTION_SEPARATOR)
                .filter(|label| !label.is_empty())
                .map(|label| label.to_string())
                .collect(),
            AnswerValue::List(items) => items.iter().filter_map(|item| item.label()).collect(),
            AnswerValue::Number(n) => vec![n.to_string()],
            _ => Vec::new(),
        }
    }

    fn label(&self) -> Option<String> {
        match self {
            AnswerValue::Text(s) if !s.is_empty() => Some(s.clone()),
            AnswerValue::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

/// Mapping from question id to the submitted value, in submission order.
pub type Answers = IndexMap<String, AnswerValue>;

/// Represents one stored poll submission.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct PollResponse {
    /// Autoincrement row id.
    pub id: i64,
    /// Either "pre" or "post".
    pub poll_type: String,
    /// The submitted answers keyed by question id.
    pub answers: Json<Answers>,
    /// Unix timestamp assigned by the store when the row was created.
    pub timestamp: i64,
}

/// Inbound payload for a poll submission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PollSubmission {
    /// "pre" or "post".
    #[validate(custom(function = "validate_poll_type"))]
    pub poll_type: String,
    /// Dictionary of answers (question_id: answer), string or list.
    #[validate(custom(function = "validate_answers"))]
    pub answers: Answers,
}

fn validate_poll_type(poll_type: &str) -> Result<(), ValidationError> {
    match poll_type {
        "pre" | "post" => Ok(()),
        _ => Err(ValidationError::new("poll_type")
            .with_message(Cow::from("poll_type must be 'pre' or 'post'"))),
    }
}

fn validate_answers(answers: &Answers) -> Result<(), ValidationError> {
    if answers.is_empty() {
        return Err(ValidationError::new("answers")
            .with_message(Cow::from("at least one answer is required")));
    }
    Ok(())
}

/// Returned to the caller after a submission is stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmitReceipt {
    pub status: String,
    pub response_id: i64,
}
