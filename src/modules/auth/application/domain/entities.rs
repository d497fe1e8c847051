use serde::Serialize;

/// Who is asking, as far as profile resolution cares.
///
/// Built per request by the bearer extractor and handed to the resolver as a
/// plain value; nothing downstream reads ambient auth state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub current_username: Option<String>,
    #[serde(skip)]
    pub access_token: Option<String>,
}

impl AuthState {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(username: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            is_authenticated: true,
            current_username: Some(username.into()),
            access_token: Some(access_token.into()),
        }
    }

    /// True when `identity` names the signed-in user.
    pub fn is_self(&self, identity: &str) -> bool {
        self.is_authenticated && self.current_username.as_deref() == Some(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_is_never_self() {
        assert!(!AuthState::anonymous().is_self("anyone"));
    }

    #[test]
    fn authenticated_matches_only_own_username() {
        let auth = AuthState::authenticated("drsmith", "token");

        assert!(auth.is_self("drsmith"));
        assert!(!auth.is_self("drjones"));
    }

    #[test]
    fn username_without_authentication_is_not_self() {
        let auth = AuthState {
            is_authenticated: false,
            current_username: Some("drsmith".to_string()),
            access_token: None,
        };

        assert!(!auth.is_self("drsmith"));
    }
}
