//! Authentication store.

use zeroize::Zeroize;

use crate::{
    api::AuthApi,
    auth::{AuthError, Credentials, Registration, Session, User},
    status::Status,
};

/// State container for the current session.
///
/// Authentication is derived from session presence, so "authenticated with
/// no user" and "user with no token" cannot be represented. The UI guard
/// observes [`AuthStore::is_authenticated`] and redirects to the login flow
/// whenever it is false.
#[derive(Debug)]
pub struct AuthStore<A> {
    api: A,
    session: Option<Session>,
    status: Status,
}

impl<A> AuthStore<A> {
    /// Create a signed-out store backed by the given auth client.
    pub fn new(api: A) -> Self {
        Self {
            api,
            session: None,
            status: Status::default(),
        }
    }

    /// Create a store with a previously persisted session, if any. Used by
    /// rehydration at process start.
    pub fn with_session(api: A, session: Option<Session>) -> Self {
        Self {
            api,
            session,
            status: Status::default(),
        }
    }

    /// Whether a session is present.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|session| &session.user)
    }

    /// The current session, if any.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Lifecycle of the most recent auth operation.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Destroy the session, wiping the token before dropping it.
    ///
    /// Clearing the cart and navigating to the login screen are cross-store
    /// side effects orchestrated by the caller, not by this store.
    pub fn logout(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.token.zeroize();
            tracing::info!(user_id = session.user.id, "signed out");
        }

        self.status = Status::Idle;
    }

    /// Reset a recorded failure after the UI has surfaced it.
    pub fn clear_error(&mut self) {
        self.status.clear_error();
    }
}

impl<A: AuthApi> AuthStore<A> {
    /// Submit credentials to the remote auth endpoint.
    ///
    /// On success the profile and token are stored and the store becomes
    /// authenticated. On failure the server's message (or a generic
    /// fallback) is recorded and the store stays signed out.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<(), AuthError> {
        self.status = Status::Pending;

        match self.api.login(credentials).await {
            Ok(session) => {
                tracing::info!(user_id = session.user.id, "signed in");
                self.session = Some(session);
                self.status = Status::Succeeded;
                Ok(())
            }
            Err(error) => {
                let message = error.to_string();
                tracing::warn!(%message, "login failed");
                self.status = Status::Failed(message.clone());
                Err(AuthError::Rejected(message))
            }
        }
    }

    /// Create an account and sign into it.
    ///
    /// Whether this hits the network depends on the configured
    /// [`RegisterMode`](crate::config::RegisterMode); the default local mode
    /// always succeeds.
    pub async fn register(&mut self, registration: &Registration) -> Result<(), AuthError> {
        self.status = Status::Pending;

        match self.api.register(registration).await {
            Ok(session) => {
                tracing::info!(user_id = session.user.id, "registered");
                self.session = Some(session);
                self.status = Status::Succeeded;
                Ok(())
            }
            Err(error) => {
                let message = error.to_string();
                tracing::warn!(%message, "registration failed");
                self.status = Status::Failed(message.clone());
                Err(AuthError::Rejected(message))
            }
        }
    }
}
