use tracing::{debug, info, warn};

use crate::api_client::Fetched;
use crate::errors::ClientError;
use crate::operations::Outcome;
use crate::ports::{ListRenderPort, NotifyPort};
use crate::state::AppState;

pub const EXAMS_UNAVAILABLE: &str = "Could not load exams for this stream.";

/// Rebuilds `list` with the entrance exams common to `stream_name`.
pub async fn load_exams(
    state: &AppState,
    stream_name: &str,
    list: &dyn ListRenderPort,
    notifier: &dyn NotifyPort,
) -> Result<Outcome, ClientError> {
    let Some(_ticket) = state.exams_guard.try_begin() else {
        debug!("Exam listing already in flight, ignoring");
        return Ok(Outcome::Skipped);
    };

    info!("Fetching exams for stream: {}", stream_name);
    let fetched = state.client.exams_for_stream(stream_name).await?;
    list.clear();

    match fetched {
        Fetched::Success(exams) => {
            let rendered = exams.len();
            for exam in exams {
                list.append(exam);
            }
            Ok(Outcome::Succeeded { rendered })
        }
        Fetched::Failed { status } => {
            warn!("Exams for {} failed with status {}", stream_name, status);
            notifier.notify(EXAMS_UNAVAILABLE);
            Ok(Outcome::Rejected { status })
        }
    }
}
