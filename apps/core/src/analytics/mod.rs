//! # Analytics Module
//!
//! Pure, synchronous analytics over stored poll answers. Nothing here performs
//! I/O or holds mutable state; every function is a deterministic transformation
//! of its inputs.
//!
//! ## Components
//! - `keywords`: stopword-filtered word frequencies for free text
//! - `rating`, `checkbox`, `text`: one analyzer per question shape
//! - `differential`: post-minus-pre change between two summaries
//! - `report`: output data structure
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod checkbox;
pub mod differential;
pub mod keywords;
pub mod rating;
pub mod report;
pub mod stats;
pub mod text;

pub use analyzer::{compute_analytics, summarize, ROSTER};
pub use checkbox::{analyze_checkbox_question, CheckboxSummary};
pub use differential::{
    calculate_differential, checkbox_differential, rating_differential, text_differential,
    Differential, QuestionSummary,
};
pub use keywords::{extract_keywords, Keyword, KeywordExtractor};
pub use rating::{analyze_rating_question, RatingSummary};
pub use report::{AnalyticsReport, PhaseCounts, QuestionAnalytics};
pub use text::{analyze_text_question, TextSummary};
