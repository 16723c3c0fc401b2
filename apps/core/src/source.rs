use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{Answers, PollResponse, PollType};

/// Read side of the response store, as seen by the analytics service.
///
/// Only the `answers` of each record are handed over; the engine never looks
/// at ids or timestamps.
#[async_trait]
pub trait ResponseSource: Send + Sync {
    /// All answer maps submitted for one poll phase.
    async fn fetch_answers(&self, poll_type: PollType) -> Result<Vec<Answers>, AppError>;
}

/// Write side of the response store.
#[async_trait]
pub trait ResponseSink: Send + Sync {
    /// Persist one submission and return the stored row.
    async fn store(&self, poll_type: PollType, answers: Answers) -> Result<PollResponse, AppError>;
}

/// Fixed answer collections, for callers that already hold the records.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    pub pre: Vec<Answers>,
    pub post: Vec<Answers>,
}

impl InMemorySource {
    pub fn new(pre: Vec<Answers>, post: Vec<Answers>) -> Self {
        Self { pre, post }
    }
}

#[async_trait]
impl ResponseSource for InMemorySource {
    async fn fetch_answers(&self, poll_type: PollType) -> Result<Vec<Answers>, AppError> {
        Ok(match poll_type {
            PollType::Pre => self.pre.clone(),
            PollType::Post => self.post.clone(),
        })
    }
}
