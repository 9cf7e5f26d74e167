use tracing::{debug, info, warn};

use crate::api_client::Fetched;
use crate::errors::ClientError;
use crate::operations::Outcome;
use crate::ports::{IdInputPort, ListRenderPort, NotifyPort};
use crate::state::AppState;

pub const PROFILE_NOT_FOUND: &str = "Profile not found or error occurred.";

/// Fetches one stored profile and renders its fields, one per line.
pub async fn show_profile(
    state: &AppState,
    input: &dyn IdInputPort,
    list: &dyn ListRenderPort,
    notifier: &dyn NotifyPort,
) -> Result<Outcome, ClientError> {
    let Some(_ticket) = state.show_guard.try_begin() else {
        debug!("Profile lookup already in flight, ignoring");
        return Ok(Outcome::Skipped);
    };

    let id = input.profile_id();
    info!("Fetching profile for student ID: {}", id);

    let fetched = state.client.get_profile(&id).await?;
    list.clear();

    match fetched {
        Fetched::Success(record) => {
            let lines = record.detail_lines();
            let rendered = lines.len();
            for line in lines {
                list.append(line);
            }
            Ok(Outcome::Succeeded { rendered })
        }
        Fetched::Failed { status } => {
            warn!("Profile {} lookup failed with status {}", id, status);
            notifier.notify(PROFILE_NOT_FOUND);
            Ok(Outcome::Rejected { status })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::memory::{MemoryForm, MemoryList, MemoryNotifier};
    use crate::test_support::FakeBackend;

    #[tokio::test]
    async fn test_renders_profile_details() {
        let backend = FakeBackend::start().await;
        backend.respond_json(
            "/profile/1",
            200,
            r#"{"id":1,"name":"Ana","age":16,"currentClass":"11","currentStream":"Science",
                "subjects":["Physics"],"location":"Pune","examScores":{}}"#,
        );
        let state = AppState::new(backend.client());
        let input = MemoryForm::new().with_profile_id("1");
        let list = MemoryList::with_lines(&["old"]);
        let notifier = MemoryNotifier::default();

        let outcome = show_profile(&state, &input, &list, &notifier)
            .await
            .unwrap();

        let lines = list.lines();
        assert_eq!(outcome, Outcome::Succeeded { rendered: lines.len() });
        assert_eq!(lines[0], "1: Ana (Science, 11)");
        assert!(lines.contains(&"Location: Pune".to_string()));
        assert_eq!(backend.requests()[0].method, "GET");
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_id_notifies_not_found() {
        let backend = FakeBackend::start().await;
        let state = AppState::new(backend.client());
        let input = MemoryForm::new().with_profile_id("999");
        let list = MemoryList::with_lines(&["old"]);
        let notifier = MemoryNotifier::default();

        let outcome = show_profile(&state, &input, &list, &notifier)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Rejected { status: 404 });
        assert!(list.lines().is_empty());
        assert_eq!(notifier.messages(), vec![PROFILE_NOT_FOUND]);
    }
}
