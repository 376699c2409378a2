//! Remote API configuration.

/// How [`register`](crate::api::AuthApi::register) is fulfilled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RegisterMode {
    /// Synthesize a local user record and session token without a network
    /// call. This mirrors the demo/offline behaviour of the reference app.
    #[default]
    Local,

    /// Submit the registration to the remote users endpoint.
    Remote,
}

/// Configuration shared by the catalog and auth clients.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL for all endpoints, e.g. `"https://dummyjson.com"`.
    pub base_url: String,

    /// Requested session lifetime sent with login requests, in minutes.
    pub expires_in_mins: u32,

    /// Registration behaviour.
    pub register_mode: RegisterMode,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://dummyjson.com".to_owned(),
            expires_in_mins: 30,
            register_mode: RegisterMode::default(),
        }
    }
}
