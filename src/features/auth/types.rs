//! Request and response types for the authentication endpoint. The login
//! payload carries credentials and must never be logged.

use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};

/// Credentials sent to the sign-in endpoint. No `Debug` on purpose.
#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Signed-in user record. `user_type` is an open string; routing only
/// recognizes the exact values "official" and "admin".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub user_type: String,
    pub full_name: String,
}

/// Session returned by the sign-in endpoint: an opaque credential token
/// plus the user record. Held by the session store for the process
/// lifetime.
#[derive(Clone, Debug, Deserialize)]
pub struct Session {
    #[serde(deserialize_with = "secret_string")]
    pub token: SecretString,
    pub user: User,
}

fn secret_string<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}
