//! Headless sign-in flow. The form owns the field values, the submitting
//! flag, and the displayable error; rendering is up to the embedding UI.
//!
//! State machine: Idle → Submitting → (Success | Failed) → Idle. While a
//! submission is pending the submit control and the input fields are
//! disabled, so a second submission is a no-op rather than a duplicate
//! request. On success the session is persisted to the store and the
//! caller receives the landing destination; on failure the error message
//! is kept for display and nothing is persisted.

use crate::{
    client::ApiClient,
    errors::ApiError,
    features::auth::{
        client,
        guards::{Destination, destination_for},
        state::SessionStore,
        types::LoginRequest,
    },
};
use secrecy::{ExposeSecret, SecretString};
use std::sync::{
    PoisonError, RwLock,
    atomic::{AtomicBool, Ordering},
};

/// Shown when a sign-in failure carries no message of its own.
pub const GENERIC_SIGN_IN_ERROR: &str = "Unable to sign in. Please try again.";

const MISSING_FIELDS_ERROR: &str = "Email and password are required.";

#[derive(Default)]
pub struct SignInForm {
    email: RwLock<String>,
    password: RwLock<SecretString>,
    submitting: AtomicBool,
    error: RwLock<Option<String>>,
}

impl SignInForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn email(&self) -> String {
        self.email
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Updates the email field. Ignored while a submission is pending, the
    /// inputs are disabled.
    pub fn set_email(&self, value: impl Into<String>) {
        if self.is_submitting() {
            return;
        }
        *self.email.write().unwrap_or_else(PoisonError::into_inner) = value.into();
    }

    /// Updates the password field. Ignored while a submission is pending.
    pub fn set_password(&self, value: SecretString) {
        if self.is_submitting() {
            return;
        }
        *self
            .password
            .write()
            .unwrap_or_else(PoisonError::into_inner) = value;
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    /// Error text to display, if the last submission failed.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.error
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Submits the form. Returns the landing destination on success and
    /// `None` otherwise; failure details are available through
    /// [`SignInForm::error`].
    ///
    /// Re-invoking while a submission is pending is a no-op, the
    /// disabled-state flag stands in for the disabled submit control.
    pub async fn submit(
        &self,
        api: &ApiClient,
        store: &SessionStore,
    ) -> Option<Destination> {
        if self
            .submitting
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return None;
        }

        self.set_error(None);

        let email = self.email().trim().to_string();
        let password = self
            .password
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        if email.is_empty() || password.expose_secret().trim().is_empty() {
            self.set_error(Some(MISSING_FIELDS_ERROR.to_string()));
            self.submitting.store(false, Ordering::SeqCst);
            return None;
        }

        let request = LoginRequest {
            email,
            password: password.expose_secret().to_string(),
        };

        let result = client::login(api, &request).await;

        // Leave the submitting state on every outcome so the form stays
        // editable.
        self.submitting.store(false, Ordering::SeqCst);

        match result {
            Ok(session) => {
                let destination = destination_for(&session.user.user_type);
                store.set_session(session);
                Some(destination)
            }
            Err(err) => {
                self.set_error(Some(display_message(&err)));
                None
            }
        }
    }

    fn set_error(&self, value: Option<String>) {
        *self.error.write().unwrap_or_else(PoisonError::into_inner) = value;
    }
}

fn display_message(err: &ApiError) -> String {
    err.user_message()
        .map_or_else(|| GENERIC_SIGN_IN_ERROR.to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use secrecy::SecretString;
    use serde_json::json;
    use std::net::TcpListener;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn client_for(server: &MockServer, store: &SessionStore) -> ApiClient {
        ApiClient::new(&ClientConfig::new(server.uri()), store.clone())
            .expect("client should build")
    }

    fn form_with(email: &str, password: &str) -> SignInForm {
        let form = SignInForm::new();
        form.set_email(email);
        form.set_password(SecretString::from(password.to_string()));
        form
    }

    fn login_body(user_type: &str) -> serde_json::Value {
        json!({
            "token": "token-123",
            "user": {
                "id": "u-1",
                "email": "user@example.com",
                "user_type": user_type,
                "full_name": "Test User"
            }
        })
    }

    #[tokio::test]
    async fn successful_sign_in_persists_session_and_routes_by_role() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(login_body("official")))
            .expect(1)
            .mount(&server)
            .await;

        let store = SessionStore::new();
        let api = client_for(&server, &store);
        let form = form_with("user@example.com", "hunter2");

        let destination = form.submit(&api, &store).await;

        assert_eq!(destination, Some(Destination::AdminHome));
        assert!(store.is_authenticated());
        assert!(form.error().is_none());
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn citizen_sign_in_routes_to_dashboard() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(login_body("citizen")))
            .mount(&server)
            .await;

        let store = SessionStore::new();
        let api = client_for(&server, &store);
        let form = form_with("user@example.com", "hunter2");

        let destination = form.submit(&api, &store).await;

        assert_eq!(destination, Some(Destination::Dashboard));
    }

    #[tokio::test]
    async fn failed_sign_in_shows_server_message_and_persists_nothing() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "message": "Invalid credentials"
            })))
            .mount(&server)
            .await;

        let store = SessionStore::new();
        let api = client_for(&server, &store);
        let form = form_with("user@example.com", "wrong");

        let destination = form.submit(&api, &store).await;

        assert_eq!(destination, None);
        assert_eq!(form.error().as_deref(), Some("Invalid credentials"));
        assert!(!store.is_authenticated());
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn failed_sign_in_without_message_shows_generic_fallback() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(500).set_body_string(""))
            .mount(&server)
            .await;

        let store = SessionStore::new();
        let api = client_for(&server, &store);
        let form = form_with("user@example.com", "hunter2");

        let destination = form.submit(&api, &store).await;

        assert_eq!(destination, None);
        assert_eq!(form.error().as_deref(), Some(GENERIC_SIGN_IN_ERROR));
    }

    #[tokio::test]
    async fn resubmitting_while_pending_is_a_no_op() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(login_body("citizen"))
                    .set_delay(Duration::from_millis(200)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let store = SessionStore::new();
        let api = client_for(&server, &store);
        let form = form_with("user@example.com", "hunter2");

        let (first, second) = tokio::join!(form.submit(&api, &store), form.submit(&api, &store));

        assert_eq!(first, Some(Destination::Dashboard));
        assert_eq!(second, None);
    }

    #[tokio::test]
    async fn fields_are_frozen_while_pending() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(login_body("citizen"))
                    .set_delay(Duration::from_millis(200)),
            )
            .mount(&server)
            .await;

        let store = SessionStore::new();
        let api = client_for(&server, &store);
        let form = form_with("user@example.com", "hunter2");

        let (destination, ()) = tokio::join!(form.submit(&api, &store), async {
            // The submission above is polled first, so by now the form is
            // in the submitting state and edits are ignored.
            assert!(form.is_submitting());
            form.set_email("intruder@example.com");
            assert_eq!(form.email(), "user@example.com");
        });

        assert!(destination.is_some());
    }

    #[tokio::test]
    async fn blank_fields_short_circuit_without_a_request() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        let store = SessionStore::new();
        let api = client_for(&server, &store);
        let form = form_with("", "");

        let destination = form.submit(&api, &store).await;

        assert_eq!(destination, None);
        assert_eq!(form.error().as_deref(), Some(MISSING_FIELDS_ERROR));
        assert!(!form.is_submitting());
        let requests = server.received_requests().await.expect("requests recorded");
        assert!(requests.is_empty());
    }
}
