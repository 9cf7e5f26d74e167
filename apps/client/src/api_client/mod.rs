/// Career API client: the single point of entry for backend calls.
///
/// Operations never build requests themselves; every endpoint goes through
/// `CareerApiClient`. There is no retry, no timeout and no caching: one call,
/// one request.
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::errors::ClientError;
use crate::models::profile::{Profile, ProfileRecord, ProfileSummary};
use crate::models::recommendation::Recommendation;
use crate::models::stream::EducationStream;

/// Result of a call that reached the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    /// 2xx status with a decoded body.
    Success(T),
    /// Any other status. The body is not read.
    Failed { status: u16 },
}

#[derive(Clone)]
pub struct CareerApiClient {
    client: Client,
    base_url: String,
}

impl CareerApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// POST /profile. Only the status matters; the echoed profile is ignored.
    pub async fn create_profile(&self, profile: &Profile) -> Result<StatusCode, ClientError> {
        let response = self
            .client
            .post(self.url("/profile"))
            .header("content-type", "application/json")
            .json(profile)
            .send()
            .await?;

        let status = response.status();
        debug!("POST /profile returned {}", status);
        Ok(status)
    }

    /// GET /profile/{id}
    pub async fn get_profile(&self, id: &str) -> Result<Fetched<ProfileRecord>, ClientError> {
        let url = self.url(&format!("/profile/{id}"));
        self.fetch_json(self.client.get(url)).await
    }

    /// PUT /profile/{id}. Like creation, only the status matters.
    pub async fn update_profile(
        &self,
        id: &str,
        profile: &Profile,
    ) -> Result<StatusCode, ClientError> {
        let response = self
            .client
            .put(self.url(&format!("/profile/{id}")))
            .header("content-type", "application/json")
            .json(profile)
            .send()
            .await?;

        let status = response.status();
        debug!("PUT /profile/{} returned {}", id, status);
        Ok(status)
    }

    /// GET /profiles
    pub async fn list_profiles(&self) -> Result<Fetched<Vec<ProfileSummary>>, ClientError> {
        self.fetch_json(self.client.get(self.url("/profiles"))).await
    }

    /// POST /recommendations/{id} with an empty body.
    ///
    /// `id` is placed into the path as typed.
    pub async fn generate_recommendations(
        &self,
        id: &str,
    ) -> Result<Fetched<Vec<Recommendation>>, ClientError> {
        let url = self.url(&format!("/recommendations/{id}"));
        self.fetch_json(self.client.post(url)).await
    }

    /// GET /recommendations/basic/{id}
    pub async fn basic_recommendations(
        &self,
        id: &str,
    ) -> Result<Fetched<Vec<Recommendation>>, ClientError> {
        let url = self.url(&format!("/recommendations/basic/{id}"));
        self.fetch_json(self.client.get(url)).await
    }

    /// GET /streams
    pub async fn list_streams(&self) -> Result<Fetched<Vec<EducationStream>>, ClientError> {
        self.fetch_json(self.client.get(self.url("/streams"))).await
    }

    /// GET /streams/level/{level}
    pub async fn streams_by_level(
        &self,
        level: &str,
    ) -> Result<Fetched<Vec<EducationStream>>, ClientError> {
        let url = self.url(&format!("/streams/level/{}", urlencoding::encode(level)));
        self.fetch_json(self.client.get(url)).await
    }

    /// GET /exams/{streamName}. Stream names carry spaces and parentheses,
    /// so the segment is percent-encoded.
    pub async fn exams_for_stream(
        &self,
        stream_name: &str,
    ) -> Result<Fetched<Vec<String>>, ClientError> {
        let url = self.url(&format!("/exams/{}", urlencoding::encode(stream_name)));
        self.fetch_json(self.client.get(url)).await
    }

    /// GET /health. The body is plain text.
    pub async fn health(&self) -> Result<Fetched<String>, ClientError> {
        let response = self.client.get(self.url("/health")).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("GET /health returned {}", status);
            return Ok(Fetched::Failed {
                status: status.as_u16(),
            });
        }
        let text = response.text().await.map_err(ClientError::Body)?;
        Ok(Fetched::Success(text))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Fetched<T>, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        let url = response.url().path().to_string();

        if !status.is_success() {
            warn!("{} returned {}", url, status);
            return Ok(Fetched::Failed {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(ClientError::Body)?;
        let decoded = serde_json::from_str(&body)?;
        debug!("{} returned {} ({} bytes)", url, status, body.len());
        Ok(Fetched::Success(decoded))
    }
}
