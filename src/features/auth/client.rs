//! Client wrapper for the authentication endpoint.

use crate::{
    client::{ApiClient, RequestDescriptor},
    errors::ApiError,
    features::auth::types::{LoginRequest, Session},
};

/// Signs in with email and password, returning the credential token and
/// user record. The request payload must never be logged.
/// # Errors
/// Returns an error if the request fails; failures propagate to the caller.
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<Session, ApiError> {
    client
        .send_json(RequestDescriptor::post_json("/api/auth/login", request)?)
        .await
}
