use async_trait::async_trait;
use reqwest::{Client, Url};
use std::fmt;
use std::time::Duration;
use tracing::{debug, error};

use crate::auth::application::domain::entities::AuthState;
use crate::profile::application::ports::outgoing::{ProfileApi, ProfileApiError};
use crate::profile::domain::entities::ProfileRecord;

#[derive(Debug, Clone)]
pub struct ProfileApiConfig {
    /// Root of the profile backend API, e.g. `http://localhost:8082/api`.
    pub base_url: String,
    pub timeout: Duration,
}

/// `ProfileApi` over the backend's REST endpoints:
/// `GET {base}/profile` (bearer auth) and `GET {base}/profile/user/{username}`.
#[derive(Clone)]
pub struct ProfileApiHttp {
    client: Client,
    base_url: Url,
}

impl fmt::Debug for ProfileApiHttp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileApiHttp")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl ProfileApiHttp {
    pub fn new(config: &ProfileApiConfig) -> Result<Self, ProfileApiError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ProfileApiError::Request(format!("invalid base url: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ProfileApiError::Request(format!(
                "invalid base url: {}",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProfileApiError::Request(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ProfileApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ProfileApiError::Request(format!("invalid base url: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch(
        &self,
        url: Url,
        bearer: Option<&str>,
    ) -> Result<Option<ProfileRecord>, ProfileApiError> {
        debug!("GET {}", url);

        let mut request = self.client.get(url);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(map_send_error)?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ProfileApiError::NoResponse(e.to_string()))?;

        if !status.is_success() {
            return Err(ProfileApiError::Status {
                status: status.as_u16(),
                body: serde_json::from_slice(&body).ok(),
            });
        }

        decode_payload(&body)
    }
}

fn map_send_error(e: reqwest::Error) -> ProfileApiError {
    if e.is_builder() {
        error!("Could not build profile request: {}", e);
        ProfileApiError::Request(e.to_string())
    } else {
        ProfileApiError::NoResponse(e.to_string())
    }
}

/// Empty body or JSON `null` means no payload.
fn decode_payload(body: &[u8]) -> Result<Option<ProfileRecord>, ProfileApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<ProfileRecord>>(body)
        .map_err(|e| ProfileApiError::Request(format!("invalid profile payload: {}", e)))
}

#[async_trait]
impl ProfileApi for ProfileApiHttp {
    async fn get_current_profile(
        &self,
        auth: &AuthState,
    ) -> Result<Option<ProfileRecord>, ProfileApiError> {
        let url = self.endpoint(&["profile"])?;
        self.fetch(url, auth.access_token.as_deref()).await
    }

    async fn get_profile_by_username(
        &self,
        username: &str,
    ) -> Result<Option<ProfileRecord>, ProfileApiError> {
        let url = self.endpoint(&["profile", "user", username])?;
        self.fetch(url, None).await
    }
}
