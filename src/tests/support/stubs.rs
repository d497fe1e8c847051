use std::sync::Mutex;

use async_trait::async_trait;

use crate::auth::application::domain::entities::AuthState;
use crate::profile::application::use_cases::resolve_profile::{
    DemoFallback, FetchStrategy, Resolution, ResolveProfileUseCase, ResolveStatus,
};
use crate::profile::domain::entities::ProfileRecord;

/// Returns a canned resolution and remembers the identity it was asked for.
pub struct StubResolveProfileUseCase {
    pub result: Resolution,
    last_identity: Mutex<Option<String>>,
}

impl StubResolveProfileUseCase {
    fn with(result: Resolution) -> Self {
        Self {
            result,
            last_identity: Mutex::new(None),
        }
    }

    pub fn success(record: ProfileRecord) -> Self {
        Self::with(Resolution::success(FetchStrategy::PublicProfile, record))
    }

    pub fn demo() -> Self {
        Self::with(Resolution::demo(FetchStrategy::Demo, DemoFallback::NoIdentity))
    }

    pub fn not_found(identity: &str) -> Self {
        Self::with(Resolution::failed(
            FetchStrategy::PublicProfile,
            ResolveStatus::NotFound,
            format!("No profile found for {}.", identity),
        ))
    }

    pub fn last_identity(&self) -> Option<String> {
        self.last_identity.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResolveProfileUseCase for StubResolveProfileUseCase {
    async fn resolve(&self, identity: Option<&str>, _auth: &AuthState) -> Resolution {
        *self.last_identity.lock().unwrap() = identity.map(str::to_string);
        self.result.clone()
    }
}
