use tracing::{debug, warn};

use crate::api_client::Fetched;
use crate::errors::ClientError;
use crate::operations::Outcome;
use crate::ports::NotifyPort;
use crate::state::AppState;

pub const SERVICE_UNAVAILABLE: &str = "Career guidance service is unavailable.";

/// Pings the backend and shows its status text.
pub async fn check_health(
    state: &AppState,
    notifier: &dyn NotifyPort,
) -> Result<Outcome, ClientError> {
    let Some(_ticket) = state.health_guard.try_begin() else {
        debug!("Health check already in flight, ignoring");
        return Ok(Outcome::Skipped);
    };

    match state.client.health().await? {
        Fetched::Success(text) => {
            notifier.notify(text.trim());
            Ok(Outcome::Succeeded { rendered: 0 })
        }
        Fetched::Failed { status } => {
            warn!("Health check failed with status {}", status);
            notifier.notify(SERVICE_UNAVAILABLE);
            Ok(Outcome::Rejected { status })
        }
    }
}
