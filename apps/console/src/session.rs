use dioxus::prelude::*;

use crate::api::{ClientError, ClientResult};
use crate::models::{LoginRequest, Role, User};

/// Where the session currently stands. `Unknown` holds from process start
/// until `initialize` has resolved once; route guards render a neutral shell
/// while it lasts.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AuthStatus {
    #[default]
    Unknown,
    Authenticated(AuthSession),
    Anonymous,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub status: AuthStatus,
}

impl SessionState {
    /// Invariant: an authenticated session always carries a non-empty token.
    /// A blank token resolves to anonymous instead.
    pub fn resolve_authenticated(&mut self, user: User, token: String) {
        if token.trim().is_empty() {
            self.status = AuthStatus::Anonymous;
        } else {
            self.status = AuthStatus::Authenticated(AuthSession { user, token });
        }
    }

    pub fn resolve_anonymous(&mut self) {
        self.status = AuthStatus::Anonymous;
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self.status, AuthStatus::Unknown)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.status, AuthStatus::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match &self.status {
            AuthStatus::Authenticated(session) => Some(&session.user),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match &self.status {
            AuthStatus::Authenticated(session) => Some(session.token.as_str()),
            _ => None,
        }
    }

    /// Safe on any status: an unresolved or anonymous session is never admin.
    pub fn is_admin(&self) -> bool {
        matches!(
            &self.status,
            AuthStatus::Authenticated(session) if session.user.role == Role::Admin
        )
    }
}

/// Durable client state: exactly two keys, an opaque bearer token and the
/// serialized identity record, always cleared together.
pub mod storage {
    use crate::models::User;

    pub const TOKEN_KEY: &str = "token";
    pub const USER_KEY: &str = "user";

    #[cfg(target_arch = "wasm32")]
    mod backend {
        use gloo_storage::{LocalStorage, Storage};

        use super::{TOKEN_KEY, USER_KEY};
        use crate::models::User;

        pub fn stored_token() -> Option<String> {
            LocalStorage::get::<String>(TOKEN_KEY).ok()
        }

        pub fn persist_token(token: &str) {
            if let Err(err) = LocalStorage::set(TOKEN_KEY, token) {
                tracing::warn!("failed to persist token: {err}");
            }
        }

        pub fn persist_user(user: &User) {
            if let Err(err) = LocalStorage::set(USER_KEY, user) {
                tracing::warn!("failed to persist user record: {err}");
            }
        }

        pub fn clear() {
            LocalStorage::delete(TOKEN_KEY);
            LocalStorage::delete(USER_KEY);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod backend {
        use crate::models::User;

        pub fn stored_token() -> Option<String> {
            None
        }

        pub fn persist_token(_token: &str) {}

        pub fn persist_user(_user: &User) {}

        pub fn clear() {}
    }

    pub fn stored_token() -> Option<String> {
        backend::stored_token()
    }

    pub fn persist_token(token: &str) {
        backend::persist_token(token);
    }

    pub fn persist(token: &str, user: &User) {
        backend::persist_token(token);
        backend::persist_user(user);
    }

    pub fn clear() {
        backend::clear();
    }
}

/// Session operations over the shared signal. Constructed wherever the
/// signal is in scope; cheap to clone.
#[derive(Clone, Copy)]
pub struct SessionActions {
    state: Signal<SessionState>,
}

impl SessionActions {
    pub fn new(state: Signal<SessionState>) -> Self {
        Self { state }
    }

    /// Startup path: restore a persisted session if the backend still
    /// accepts the stored token. Never fails; any problem resolves the
    /// session to anonymous with storage cleared.
    pub async fn initialize(&self) {
        let Some(token) = storage::stored_token() else {
            self.resolve_anonymous();
            return;
        };

        if token.trim().is_empty() {
            storage::clear();
            self.resolve_anonymous();
            return;
        }

        let Some(client) = crate::API_CLIENT.get() else {
            storage::clear();
            self.resolve_anonymous();
            return;
        };

        match client.get_profile().await {
            Ok(profile) => {
                storage::persist(&token, &profile.user);
                self.resolve_authenticated(profile.user, token);
            }
            Err(err) => {
                tracing::warn!("stored session rejected: {err}");
                storage::clear();
                self.resolve_anonymous();
            }
        }
    }

    pub async fn login(&self, credentials: &LoginRequest) -> ClientResult<()> {
        let client = crate::API_CLIENT.get().ok_or(ClientError::NotConfigured)?;
        let response = client.post_login(credentials).await?;
        storage::persist(&response.token, &response.user);
        self.resolve_authenticated(response.user, response.token);
        Ok(())
    }

    /// OAuth-callback path: the token was obtained externally. Persist it,
    /// then run the same profile fetch as `initialize`. Resolves only after
    /// the session is populated, so the caller can navigate on `Ok`.
    pub async fn login_with_token(&self, token: &str) -> ClientResult<()> {
        storage::persist_token(token);

        let client = crate::API_CLIENT.get().ok_or(ClientError::NotConfigured)?;
        match client.get_profile().await {
            Ok(profile) => {
                storage::persist(token, &profile.user);
                self.resolve_authenticated(profile.user, token.to_string());
                Ok(())
            }
            Err(err) => {
                storage::clear();
                self.resolve_anonymous();
                Err(err)
            }
        }
    }

    /// Pure client-side invalidation; the server is not told.
    pub fn logout(&self) {
        storage::clear();
        self.resolve_anonymous();
    }

    pub fn is_admin(&self) -> bool {
        self.state.read().is_admin()
    }

    fn resolve_authenticated(&self, user: User, token: String) {
        let mut state = self.state;
        state.write().resolve_authenticated(user, token);
    }

    fn resolve_anonymous(&self) {
        let mut state = self.state;
        state.write().resolve_anonymous();
    }
}

pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

pub fn use_session_actions() -> SessionActions {
    SessionActions::new(use_session())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str) -> User {
        User {
            id: "u-1".to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            role: Role::Member,
            avatar_url: None,
        }
    }

    fn admin(name: &str) -> User {
        User {
            role: Role::Admin,
            ..member(name)
        }
    }

    #[test]
    fn starts_unknown_and_resolves() {
        let mut state = SessionState::default();
        assert!(!state.is_resolved());
        assert!(!state.is_authenticated());

        state.resolve_anonymous();
        assert!(state.is_resolved());
        assert!(!state.is_authenticated());

        state.resolve_authenticated(member("Jane"), "tok-1".to_string());
        assert!(state.is_authenticated());
        assert_eq!(state.token(), Some("tok-1"));
        assert_eq!(state.user().map(|u| u.name.as_str()), Some("Jane"));
    }

    #[test]
    fn blank_token_never_authenticates() {
        let mut state = SessionState::default();
        state.resolve_authenticated(member("Jane"), "   ".to_string());
        assert!(!state.is_authenticated());
        assert!(state.is_resolved());
        assert_eq!(state.token(), None);
    }

    #[test]
    fn is_admin_is_safe_on_every_status() {
        let mut state = SessionState::default();
        assert!(!state.is_admin());

        state.resolve_anonymous();
        assert!(!state.is_admin());

        state.resolve_authenticated(member("Jane"), "tok".to_string());
        assert!(!state.is_admin());

        state.resolve_authenticated(admin("Ada"), "tok".to_string());
        assert!(state.is_admin());
    }

    #[test]
    fn storage_contract_is_exactly_two_keys() {
        assert_eq!(storage::TOKEN_KEY, "token");
        assert_eq!(storage::USER_KEY, "user");
    }

    #[test]
    fn logout_transition_drops_the_session() {
        let mut state = SessionState::default();
        state.resolve_authenticated(admin("Ada"), "tok".to_string());
        assert!(state.is_authenticated());

        state.resolve_anonymous();
        assert!(!state.is_authenticated());
        assert!(!state.is_admin());
        assert_eq!(state.user(), None);
    }
}
