use tracing::{debug, info, warn};

use crate::api_client::Fetched;
use crate::errors::ClientError;
use crate::operations::Outcome;
use crate::ports::ListRenderPort;
use crate::state::AppState;

/// Fetches every profile and rebuilds `list` with one summary line each.
///
/// A non-success status leaves the list empty without notifying the user.
pub async fn load_profiles(
    state: &AppState,
    list: &dyn ListRenderPort,
) -> Result<Outcome, ClientError> {
    let Some(_ticket) = state.list_guard.try_begin() else {
        debug!("Profile listing already in flight, ignoring");
        return Ok(Outcome::Skipped);
    };

    let fetched = state.client.list_profiles().await?;
    list.clear();

    match fetched {
        Fetched::Success(profiles) => {
            info!("Rendering {} profiles", profiles.len());
            let rendered = profiles.len();
            for profile in profiles {
                list.append(profile.summary_line());
            }
            Ok(Outcome::Succeeded { rendered })
        }
        Fetched::Failed { status } => {
            warn!("Profile listing failed with status {}; showing empty list", status);
            Ok(Outcome::Rejected { status })
        }
    }
}
