//! Authentication client.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    api::ApiError,
    auth::{Credentials, Registration, Session, User},
    config::{ApiConfig, RegisterMode},
};

/// Remote authentication endpoint.
#[automock]
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a user profile and session token.
    async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError>;

    /// Create an account and return a session for it.
    async fn register(&self, registration: &Registration) -> Result<Session, ApiError>;
}

/// HTTP client for the auth endpoints.
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    config: ApiConfig,
    http: Client,
}

impl HttpAuthApi {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    id: u64,
    email: String,
    first_name: String,
    last_name: String,
    gender: String,
    image: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct RegisterResponse {
    id: u64,
    #[serde(default)]
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
}

const DEFAULT_AVATAR: &str = "https://dummyjson.com/icon/default/128";

fn mock_token(millis: i64) -> String {
    format!("mock-jwt-token-{millis}")
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let url = format!("{}/auth/login", self.config.base_url);

        let body = serde_json::json!({
            "username": credentials.username,
            "password": credentials.password,
            "expiresInMins": self.config.expires_in_mins,
        });

        let response = self.http.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            // The server's message body is surfaced verbatim when present.
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| "Login failed".to_owned());

            return Err(ApiError::Api(message));
        }

        let parsed: LoginResponse = response.json().await?;

        tracing::debug!(user_id = parsed.id, "login succeeded");

        Ok(Session {
            user: User {
                id: parsed.id,
                email: parsed.email,
                first_name: parsed.first_name,
                last_name: parsed.last_name,
                gender: parsed.gender,
                image: parsed.image,
            },
            token: parsed.token,
        })
    }

    async fn register(&self, registration: &Registration) -> Result<Session, ApiError> {
        let millis = Timestamp::now().as_millisecond();

        match self.config.register_mode {
            RegisterMode::Local => {
                // Offline stub carried over from the reference app: no
                // network call, a synthesized user and a fake token.
                Ok(Session {
                    user: User {
                        id: u64::try_from(millis).unwrap_or_default(),
                        email: registration.email.clone(),
                        first_name: registration.first_name.clone(),
                        last_name: registration.last_name.clone(),
                        gender: "male".to_owned(),
                        image: DEFAULT_AVATAR.to_owned(),
                    },
                    token: mock_token(millis),
                })
            }
            RegisterMode::Remote => {
                let url = format!("{}/users/add", self.config.base_url);

                let body = serde_json::json!({
                    "email": registration.email,
                    "password": registration.password,
                    "firstName": registration.first_name,
                    "lastName": registration.last_name,
                });

                let response = self.http.post(&url).json(&body).send().await?;

                if !response.status().is_success() {
                    let message = response
                        .json::<ErrorResponse>()
                        .await
                        .map(|body| body.message)
                        .unwrap_or_else(|_| "Registration failed".to_owned());

                    return Err(ApiError::Api(message));
                }

                let parsed: RegisterResponse = response.json().await?;

                // The users endpoint creates the account but does not open a
                // session, so a local token is synthesized either way.
                Ok(Session {
                    user: User {
                        id: parsed.id,
                        email: registration.email.clone(),
                        first_name: registration.first_name.clone(),
                        last_name: registration.last_name.clone(),
                        gender: "male".to_owned(),
                        image: DEFAULT_AVATAR.to_owned(),
                    },
                    token: parsed.token.unwrap_or_else(|| mock_token(millis)),
                })
            }
        }
    }
}
