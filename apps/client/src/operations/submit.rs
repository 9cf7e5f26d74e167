use tracing::{debug, info, warn};

use crate::errors::ClientError;
use crate::models::profile::Profile;
use crate::operations::Outcome;
use crate::ports::{NotifyPort, ProfileFormPort};
use crate::state::AppState;

pub const PROFILE_CREATED: &str = "Profile created successfully!";
pub const PROFILE_NOT_CREATED: &str = "Error creating profile.";

/// Builds a profile from the form and posts it to the backend.
///
/// Exactly one notification follows a completed request: success on 2xx,
/// the generic failure message on anything else.
pub async fn submit_profile(
    state: &AppState,
    form: &dyn ProfileFormPort,
    notifier: &dyn NotifyPort,
) -> Result<Outcome, ClientError> {
    let Some(_ticket) = state.submit_guard.try_begin() else {
        debug!("Profile submission already in flight, ignoring");
        return Ok(Outcome::Skipped);
    };

    let profile = Profile::from_form(form);
    info!("Submitting profile for student: {}", profile.name);

    let status = state.client.create_profile(&profile).await?;

    if status.is_success() {
        notifier.notify(PROFILE_CREATED);
        Ok(Outcome::Succeeded { rendered: 0 })
    } else {
        warn!("Profile creation rejected with status {}", status);
        notifier.notify(PROFILE_NOT_CREATED);
        Ok(Outcome::Rejected {
            status: status.as_u16(),
        })
    }
}
