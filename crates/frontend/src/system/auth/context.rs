use contracts::enums::UserRole;
use contracts::system::auth::UserInfo;
use leptos::prelude::*;

use super::storage;
use crate::shared::api_client::ApiClient;
use crate::shared::api_utils::api_base;

/// Process-wide request configuration: backend URL, bearer token and the
/// signed-in user. Built at login/restore, dropped at logout, and passed
/// explicitly to API clients and controllers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthContext {
    pub base_url: String,
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

impl AuthContext {
    pub fn anonymous(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            user: None,
        }
    }

    pub fn authenticated(base_url: impl Into<String>, token: String, user: UserInfo) -> Self {
        Self {
            base_url: base_url.into(),
            token: Some(token),
            user: Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// `Authorization` header value, if a token is present
    pub fn bearer_header(&self) -> Option<String> {
        self.token
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(|t| format!("Bearer {}", t))
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let base_url = api_base();
    let restored = match storage::load_session() {
        Some((token, user)) => AuthContext::authenticated(base_url, token, user),
        None => AuthContext::anonymous(base_url),
    };
    let auth = RwSignal::new(restored);

    provide_context(auth);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthContext> {
    use_context::<RwSignal<AuthContext>>().expect("AuthProvider not found in component tree")
}

/// API client for the session held in `auth`.
///
/// Pages call [`use_auth`] while rendering and build clients inside event
/// handlers, where the context is no longer reachable.
pub fn api_client(auth: RwSignal<AuthContext>) -> ApiClient {
    ApiClient::new(auth.get_untracked())
}

/// Helper: role of the signed-in user
pub fn current_role() -> Option<UserRole> {
    use_auth().with_untracked(|a| a.role())
}

/// Helper: Perform logout
pub fn do_logout(auth: RwSignal<AuthContext>) {
    storage::clear_session();
    let base_url = auth.with_untracked(|a| a.base_url.clone());
    auth.set(AuthContext::anonymous(base_url));
    log::info!("signed out");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole) -> UserInfo {
        UserInfo {
            id: 3,
            username: "amal".to_string(),
            full_name: None,
            email: None,
            role,
        }
    }

    #[test]
    fn test_bearer_header() {
        let auth = AuthContext::authenticated("http://h/api", "abc".to_string(), user(UserRole::Translator));
        assert_eq!(auth.bearer_header().as_deref(), Some("Bearer abc"));
        assert!(auth.is_authenticated());
        assert_eq!(auth.role(), Some(UserRole::Translator));
        assert_eq!(auth.user_id(), Some(3));
    }

    #[test]
    fn test_anonymous_and_empty_token() {
        let anon = AuthContext::anonymous("http://h/api");
        assert!(anon.bearer_header().is_none());
        assert!(!anon.is_authenticated());

        let empty = AuthContext {
            token: Some(String::new()),
            ..anon
        };
        assert!(empty.bearer_header().is_none());
        assert!(!empty.is_authenticated());
    }
}
