use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::auth::application::domain::entities::AuthState;
use crate::profile::application::ports::outgoing::{ProfileApi, ProfileApiError};
use crate::profile::application::use_cases::resolve_profile::{
    DemoFallback, FetchStrategy, Resolution, ResolveProfileUseCase, ResolveStatus,
};

/// Picks the fetch path for a profile request and classifies its outcome.
pub struct ProfileResolver<A>
where
    A: ProfileApi,
{
    api: A,
}

impl<A> ProfileResolver<A>
where
    A: ProfileApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

/// Strategy for `identity` under `auth`; first matching rule wins.
pub fn select_strategy(identity: Option<&str>, auth: &AuthState) -> FetchStrategy {
    let identity = normalize(identity);
    match identity {
        None if auth.is_authenticated => FetchStrategy::OwnProfile,
        Some(name) if auth.is_self(name) => FetchStrategy::OwnProfile,
        Some(_) => FetchStrategy::PublicProfile,
        None => FetchStrategy::Demo,
    }
}

fn normalize(identity: Option<&str>) -> Option<&str> {
    identity.filter(|name| !name.is_empty())
}

/// Map a backend failure onto a renderable resolution.
pub fn classify_failure(
    strategy: FetchStrategy,
    target: &str,
    error: ProfileApiError,
) -> Resolution {
    match error {
        ProfileApiError::Status { status: 404, .. } => Resolution::failed(
            strategy,
            ResolveStatus::NotFound,
            format!("No profile found for {}.", target),
        ),
        ProfileApiError::Status { status: 401, .. } => {
            warn!("Profile backend rejected credentials for {}, using demo mode", target);
            Resolution::demo(strategy, DemoFallback::Unauthenticated)
        }
        ProfileApiError::Status { status, body } => Resolution::failed(
            strategy,
            ResolveStatus::ServerError,
            format!("Server error ({}): {}", status, error_detail(body.as_ref())),
        ),
        ProfileApiError::NoResponse(msg) => {
            warn!("Profile backend unreachable ({}), using demo mode", msg);
            Resolution::demo(strategy, DemoFallback::NetworkUnreachable)
        }
        ProfileApiError::Request(msg) => Resolution::failed(
            strategy,
            ResolveStatus::ClientError,
            format!("Error fetching profile: {}", msg),
        ),
    }
}

fn error_detail(body: Option<&Value>) -> String {
    body.and_then(|b| {
        ["error", "message"]
            .iter()
            .find_map(|key| b.get(*key).and_then(Value::as_str).filter(|s| !s.is_empty()))
    })
    .unwrap_or("Unknown error")
    .to_string()
}

#[async_trait]
impl<A> ResolveProfileUseCase for ProfileResolver<A>
where
    A: ProfileApi + Send + Sync,
{
    async fn resolve(&self, identity: Option<&str>, auth: &AuthState) -> Resolution {
        let identity = normalize(identity);
        let strategy = select_strategy(identity, auth);

        let (target, outcome) = match strategy {
            FetchStrategy::Demo => {
                debug!("No identity and no session, resolving to demo mode");
                return Resolution::demo(strategy, DemoFallback::NoIdentity);
            }
            FetchStrategy::OwnProfile => {
                let target = identity
                    .or(auth.current_username.as_deref())
                    .unwrap_or("your account");
                info!("Fetching own profile for {}", target);
                (target, self.api.get_current_profile(auth).await)
            }
            FetchStrategy::PublicProfile => {
                // select_strategy only picks the public path with an identity
                let target = identity.unwrap_or_default();
                info!("Fetching public profile for {}", target);
                (target, self.api.get_profile_by_username(target).await)
            }
        };

        match outcome {
            Ok(Some(record)) => Resolution::success(strategy, record),
            Ok(None) => {
                warn!("Profile backend returned no payload for {}", target);
                Resolution::failed(
                    strategy,
                    ResolveStatus::EmptyResponse,
                    "No profile data received from server.".to_string(),
                )
            }
            Err(e) => classify_failure(strategy, target, e),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Unit tests (service only)
// ──────────────────────────────────────────────────────────
//
