use tracing::{debug, info, warn};

use crate::errors::ClientError;
use crate::models::profile::Profile;
use crate::operations::Outcome;
use crate::ports::{IdInputPort, NotifyPort, ProfileFormPort};
use crate::state::AppState;

pub const PROFILE_UPDATED: &str = "Profile updated successfully!";
pub const PROFILE_NOT_UPDATED: &str = "Error updating profile.";

/// Replaces the stored profile `input.profile_id()` with the current form.
///
/// The form is read exactly as for creation; the backend keeps the id.
pub async fn update_profile(
    state: &AppState,
    input: &dyn IdInputPort,
    form: &dyn ProfileFormPort,
    notifier: &dyn NotifyPort,
) -> Result<Outcome, ClientError> {
    let Some(_ticket) = state.update_guard.try_begin() else {
        debug!("Profile update already in flight, ignoring");
        return Ok(Outcome::Skipped);
    };

    let id = input.profile_id();
    let profile = Profile::from_form(form);
    info!("Updating profile {} for student: {}", id, profile.name);

    let status = state.client.update_profile(&id, &profile).await?;

    if status.is_success() {
        notifier.notify(PROFILE_UPDATED);
        Ok(Outcome::Succeeded { rendered: 0 })
    } else {
        warn!("Profile {} update rejected with status {}", id, status);
        notifier.notify(PROFILE_NOT_UPDATED);
        Ok(Outcome::Rejected {
            status: status.as_u16(),
        })
    }
}
