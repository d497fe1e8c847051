use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::domain::entities::AuthState;
use crate::auth::application::ports::outgoing::token_provider::TokenVerifier;

/// Caller identity for endpoints that serve both signed-in and anonymous
/// visitors.
///
/// Never rejects a request: a missing, malformed or expired bearer token
/// yields an anonymous `AuthState`.
#[derive(Debug, Clone)]
pub struct OptionalAuth(pub AuthState);

impl OptionalAuth {
    pub fn into_inner(self) -> AuthState {
        self.0
    }
}

impl FromRequest for OptionalAuth {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => return ready(Ok(OptionalAuth(AuthState::anonymous()))),
        };

        let verifier = match req.app_data::<web::Data<Arc<dyn TokenVerifier + Send + Sync>>>() {
            Some(verifier) => verifier,
            None => {
                tracing::error!("No token verifier registered, treating request as anonymous");
                return ready(Ok(OptionalAuth(AuthState::anonymous())));
            }
        };

        match verifier.verify_token(&token) {
            Ok(claims) => ready(Ok(OptionalAuth(AuthState::authenticated(claims.sub, token)))),
            Err(e) => {
                tracing::debug!("Ignoring bearer token: {}", e);
                ready(Ok(OptionalAuth(AuthState::anonymous())))
            }
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
