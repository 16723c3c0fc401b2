//! Question Catalogue - static poll definition.
//!
//! The catalogue is built once per process and never mutated. The analytics
//! report only reads prompt text and question type from it.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Shape of a question, which selects the analyzer used for it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Rating,
    Checkbox,
    Text,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Rating => "rating",
            QuestionType::Checkbox => "checkbox",
            QuestionType::Text => "text",
        }
    }
}

/// A single poll question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub question: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub required: bool,
    /// Lower bound of the rating scale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u8>,
    /// Upper bound of the rating scale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u8>,
    /// End-point labels of the rating scale
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub labels: Vec<String>,
    /// Enumerated choices of a checkbox question
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub options: Vec<String>,
}

/// The complete poll as served to respondents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poll {
    pub title: String,
    pub description: String,
    pub scale_description: String,
    pub questions: Vec<Question>,
}

const RATING_LABELS: [&str; 2] = ["Strongly Disagree", "Strongly Agree"];

const CAUSE_OPTIONS: &[&str] = &[
    "less opportunity for risky play",
    "decline of interest in religion/religious communities",
    "devices: smartphones/video games",
    "less face to face interaction/less community spaces for kids to gather together",
    "impact of Covid-19 pandemic",
    "lack of physical activity",
    "gun violence/threat of mass shootings",
    "self-pathologizing/self-diagnosing",
    "social media: echo-chambers online that reinforce belief systems/toxic positivity/cyberbullying",
    "rise in deviant behaviors such as substance abuse/gambling",
    "economic concerns",
    "climate change concerns",
];

static POLL: OnceLock<Poll> = OnceLock::new();

fn rating(id: &str, text: &str) -> Question {
    Question {
        id: id.to_string(),
        question: text.to_string(),
        question_type: QuestionType::Rating,
        required: true,
        min: Some(1),
        max: Some(4),
        labels: RATING_LABELS.iter().map(|s| s.to_string()).collect(),
        options: Vec::new(),
    }
}

fn build_poll() -> Poll {
    Poll {
        title: "Gen Z Mental Health Poll".to_string(),
        description:
            "For the following questions rate how much you agree or disagree with each item."
                .to_string(),
        scale_description: "1 - Strongly Disagree, 2 - Disagree, 3 - Agree, 4 - Strongly Agree"
            .to_string(),
        questions: vec![
            rating(
                "q1",
                "There is a mental health crisis among Gen Z. (Gen Z is the generation of people born between 1997-2012).",
            ),
            rating("q2", "Frequent social media use negatively affects mental health."),
            rating(
                "q3",
                "Mental health is worse for Gen Z than previous generations.",
            ),
            Question {
                id: "q4".to_string(),
                question: "What do you think are the biggest causes of mental heath problems among Gen Z (please choose your top 3).".to_string(),
                question_type: QuestionType::Checkbox,
                required: true,
                min: None,
                max: None,
                labels: Vec::new(),
                options: CAUSE_OPTIONS.iter().map(|s| s.to_string()).collect(),
            },
            Question {
                id: "q5".to_string(),
                question: "If you believe there is a Gen Z mental health crisis, what suggestions/solutions would you recommend?".to_string(),
                question_type: QuestionType::Text,
                required: false,
                min: None,
                max: None,
                labels: Vec::new(),
                options: Vec::new(),
            },
        ],
    }
}

/// The process-wide poll definition
pub fn poll() -> &'static Poll {
    POLL.get_or_init(build_poll)
}

/// Look up a question by id
pub fn question(id: &str) -> Option<&'static Question> {
    poll().questions.iter().find(|q| q.id == id)
}
