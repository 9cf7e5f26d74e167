use tracing::{debug, info, warn};

use crate::api_client::Fetched;
use crate::errors::ClientError;
use crate::models::stream::EducationStream;
use crate::operations::Outcome;
use crate::ports::{ListRenderPort, NotifyPort};
use crate::state::AppState;

pub const STREAMS_UNAVAILABLE: &str = "Could not load education streams.";

/// Rebuilds `list` with one `"{streamName} ({level})"` line per stream.
pub async fn load_streams(
    state: &AppState,
    list: &dyn ListRenderPort,
    notifier: &dyn NotifyPort,
) -> Result<Outcome, ClientError> {
    let Some(_ticket) = state.streams_guard.try_begin() else {
        debug!("Stream listing already in flight, ignoring");
        return Ok(Outcome::Skipped);
    };

    let fetched = state.client.list_streams().await?;
    Ok(render(list, notifier, fetched))
}

/// Same as [`load_streams`], limited to one education level (e.g. `12th`).
pub async fn load_streams_by_level(
    state: &AppState,
    level: &str,
    list: &dyn ListRenderPort,
    notifier: &dyn NotifyPort,
) -> Result<Outcome, ClientError> {
    let Some(_ticket) = state.level_streams_guard.try_begin() else {
        debug!("Stream listing for a level already in flight, ignoring");
        return Ok(Outcome::Skipped);
    };

    info!("Fetching education streams for level: {}", level);
    let fetched = state.client.streams_by_level(level).await?;
    Ok(render(list, notifier, fetched))
}

fn render(
    list: &dyn ListRenderPort,
    notifier: &dyn NotifyPort,
    fetched: Fetched<Vec<EducationStream>>,
) -> Outcome {
    list.clear();

    match fetched {
        Fetched::Success(streams) => {
            let rendered = streams.len();
            for stream in streams {
                list.append(stream.line());
            }
            Outcome::Succeeded { rendered }
        }
        Fetched::Failed { status } => {
            warn!("Stream listing failed with status {}", status);
            notifier.notify(STREAMS_UNAVAILABLE);
            Outcome::Rejected { status }
        }
    }
}
