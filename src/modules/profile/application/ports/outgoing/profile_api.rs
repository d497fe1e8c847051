// profile_api.rs
use async_trait::async_trait;
use serde_json::Value;

use crate::auth::application::domain::entities::AuthState;
use crate::profile::domain::entities::ProfileRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileApiError {
    /// The backend answered with a non-success status.
    #[error("Profile backend responded with status {status}")]
    Status { status: u16, body: Option<Value> },

    /// The request went out but nothing came back (refused, reset, timed out).
    #[error("No response from profile backend: {0}")]
    NoResponse(String),

    /// The call could not be made or its answer could not be read.
    #[error("Profile request failed: {0}")]
    Request(String),
}

/// Profile backend. `Ok(None)` means the call succeeded but carried no
/// profile payload.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    async fn get_current_profile(
        &self,
        auth: &AuthState,
    ) -> Result<Option<ProfileRecord>, ProfileApiError>;

    async fn get_profile_by_username(
        &self,
        username: &str,
    ) -> Result<Option<ProfileRecord>, ProfileApiError>;
}
