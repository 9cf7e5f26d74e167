use tracing::{debug, info, warn};

use crate::api_client::Fetched;
use crate::errors::ClientError;
use crate::models::recommendation::Recommendation;
use crate::operations::guard::InFlight;
use crate::operations::Outcome;
use crate::ports::{IdInputPort, ListRenderPort, NotifyPort};
use crate::state::AppState;

pub const NO_RECOMMENDATIONS: &str = "No recommendations found or error occurred.";

/// Which backend endpoint produces the recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationSource {
    /// `POST /recommendations/{id}`
    Generated,
    /// `GET /recommendations/basic/{id}`
    Basic,
}

/// Asks the backend to generate recommendations for the id in `input`.
pub async fn fetch_recommendations(
    state: &AppState,
    input: &dyn IdInputPort,
    list: &dyn ListRenderPort,
    notifier: &dyn NotifyPort,
) -> Result<Outcome, ClientError> {
    run(
        state,
        &state.recommend_guard,
        RecommendationSource::Generated,
        input,
        list,
        notifier,
    )
    .await
}

/// Same contract as [`fetch_recommendations`], against the rule-based endpoint.
pub async fn fetch_basic_recommendations(
    state: &AppState,
    input: &dyn IdInputPort,
    list: &dyn ListRenderPort,
    notifier: &dyn NotifyPort,
) -> Result<Outcome, ClientError> {
    run(
        state,
        &state.basic_guard,
        RecommendationSource::Basic,
        input,
        list,
        notifier,
    )
    .await
}

async fn run(
    state: &AppState,
    guard: &InFlight,
    source: RecommendationSource,
    input: &dyn IdInputPort,
    list: &dyn ListRenderPort,
    notifier: &dyn NotifyPort,
) -> Result<Outcome, ClientError> {
    let Some(_ticket) = guard.try_begin() else {
        debug!("{:?} recommendations already in flight, ignoring", source);
        return Ok(Outcome::Skipped);
    };

    let id = input.profile_id();
    info!("Fetching {:?} recommendations for student ID: {}", source, id);

    let fetched = match source {
        RecommendationSource::Generated => state.client.generate_recommendations(&id).await,
        RecommendationSource::Basic => state.client.basic_recommendations(&id).await,
    };

    // Once the backend has answered the list is cleared, even if the body
    // later fails to arrive or decode.
    let answered = match &fetched {
        Ok(_) => true,
        Err(err) => err.after_response(),
    };
    if answered {
        list.clear();
    }

    match fetched? {
        Fetched::Success(recommendations) => Ok(render(list, recommendations)),
        Fetched::Failed { status } => {
            warn!("Recommendations for {} failed with status {}", id, status);
            notifier.notify(NO_RECOMMENDATIONS);
            Ok(Outcome::Rejected { status })
        }
    }
}

fn render(list: &dyn ListRenderPort, recommendations: Vec<Recommendation>) -> Outcome {
    let rendered = recommendations.len();
    for recommendation in recommendations {
        list.append(recommendation.line());
    }
    Outcome::Succeeded { rendered }
}
