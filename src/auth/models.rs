//! Auth models.

use serde::{Deserialize, Serialize};

/// Authenticated user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Account identifier.
    pub id: u64,

    /// Account email address.
    pub email: String,

    /// Given name.
    pub first_name: String,

    /// Family name.
    pub last_name: String,

    /// Self-reported gender.
    pub gender: String,

    /// Avatar image URI.
    pub image: String,
}

/// Authenticated identity plus its opaque session token.
///
/// Created on successful login or registration, destroyed on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The signed-in user.
    pub user: User,

    /// Opaque bearer token for subsequent requests.
    pub token: String,
}

/// Login form payload.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Account username.
    pub username: String,

    /// Account password.
    pub password: String,
}

/// Registration form payload.
#[derive(Debug, Clone)]
pub struct Registration {
    /// Account email address.
    pub email: String,

    /// Account password.
    pub password: String,

    /// Given name.
    pub first_name: String,

    /// Family name.
    pub last_name: String,
}
