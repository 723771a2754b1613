//! Process-wide session state. The store is an explicitly owned handle
//! passed to whatever needs it, so initialization and teardown stay
//! visible and testable. The transport reads the token from here for
//! auth-header injection; only the sign-in flow writes it.

use crate::features::auth::types::Session;
use secrecy::SecretString;
use std::sync::{Arc, PoisonError, RwLock};

/// Shared handle to the current session. Cloning yields another handle to
/// the same record, which is written exactly once per successful sign-in.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    session: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the session after a successful sign-in.
    pub fn set_session(&self, session: Session) {
        *self
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(session);
    }

    /// Clears the session, typically on logout.
    pub fn clear_session(&self) {
        *self
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Snapshot of the current session.
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Credential token for auth-header injection.
    #[must_use]
    pub fn token(&self) -> Option<SecretString> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|session| session.token.clone())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
