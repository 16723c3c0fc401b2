//! Request-level operations used by the launcher.

use tracing::{info, warn};
use validator::Validate;

use crate::analytics::{compute_analytics, AnalyticsReport};
use crate::error::AppError;
use crate::models::{PollSubmission, PollType, SubmitReceipt};
use crate::source::{ResponseSink, ResponseSource};

/// Validate and store one poll submission.
pub async fn submit_poll<S: ResponseSink + ?Sized>(
    sink: &S,
    submission: PollSubmission,
) -> Result<SubmitReceipt, AppError> {
    if let Err(e) = submission.validate() {
        warn!("Rejected poll submission: {}", e);
        return Err(e.into());
    }

    let poll_type: PollType = submission.poll_type.parse()?;
    let stored = sink.store(poll_type, submission.answers).await?;

    info!("Stored {} poll response {}", poll_type, stored.id);

    Ok(SubmitReceipt {
        status: "success".to_string(),
        response_id: stored.id,
    })
}

/// Fetch both phases from `source` and compute the analytics report.
///
/// Only a failing source produces an error; the computation itself cannot fail.
pub async fn analytics<S: ResponseSource + ?Sized>(source: &S) -> Result<AnalyticsReport, AppError> {
    let pre = source.fetch_answers(PollType::Pre).await?;
    let post = source.fetch_answers(PollType::Post).await?;

    let report = compute_analytics(&pre, &post);
    info!("Analytics report ready ({})", report.summary_line());

    Ok(report)
}
