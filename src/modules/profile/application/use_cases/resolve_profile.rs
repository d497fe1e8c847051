use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::auth::application::domain::entities::AuthState;
use crate::profile::domain::entities::ProfileRecord;

//
// ──────────────────────────────────────────────────────────
// Outcome
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FetchStrategy {
    OwnProfile,
    PublicProfile,
    Demo,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResolveStatus {
    Success,
    Demo,
    NotFound,
    ServerError,
    ClientError,
    EmptyResponse,
}

impl ResolveStatus {
    /// Statuses shown to the user as an error with a "try again" action.
    pub fn is_visible_error(self) -> bool {
        matches!(
            self,
            ResolveStatus::NotFound
                | ResolveStatus::ServerError
                | ResolveStatus::ClientError
                | ResolveStatus::EmptyResponse
        )
    }
}

/// Why a resolution ended in demo mode.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DemoFallback {
    NoIdentity,
    Unauthenticated,
    NetworkUnreachable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub status: ResolveStatus,
    pub strategy: FetchStrategy,
    pub record: Option<ProfileRecord>,
    pub error_message: String,
    pub fallback: Option<DemoFallback>,
    pub resolved_at: DateTime<Utc>,
}

impl Resolution {
    pub fn success(strategy: FetchStrategy, record: ProfileRecord) -> Self {
        Self::new(ResolveStatus::Success, strategy, Some(record), String::new(), None)
    }

    pub fn demo(strategy: FetchStrategy, fallback: DemoFallback) -> Self {
        Self::new(ResolveStatus::Demo, strategy, None, String::new(), Some(fallback))
    }

    pub fn failed(strategy: FetchStrategy, status: ResolveStatus, message: String) -> Self {
        Self::new(status, strategy, None, message, None)
    }

    fn new(
        status: ResolveStatus,
        strategy: FetchStrategy,
        record: Option<ProfileRecord>,
        error_message: String,
        fallback: Option<DemoFallback>,
    ) -> Self {
        Self {
            status,
            strategy,
            record,
            error_message,
            fallback,
            resolved_at: Utc::now(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

/// Resolution never fails: every backend failure is classified into the
/// returned `Resolution`.
#[async_trait]
pub trait ResolveProfileUseCase: Send + Sync {
    async fn resolve(&self, identity: Option<&str>, auth: &AuthState) -> Resolution;
}
