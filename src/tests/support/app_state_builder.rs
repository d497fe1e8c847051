use crate::profile::application::use_cases::resolve_profile::ResolveProfileUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    resolve_profile: Option<Arc<dyn ResolveProfileUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            resolve_profile: Some(Arc::new(StubResolveProfileUseCase::demo())),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_resolve_profile(mut self, uc: Arc<dyn ResolveProfileUseCase + Send + Sync>) -> Self {
        self.resolve_profile = Some(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            resolve_profile_use_case: self
                .resolve_profile
                .expect("resolve_profile_use_case not set"),
        })
    }
}
