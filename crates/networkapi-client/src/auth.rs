//! Request authentication
//!
//! The server authenticates with two custom headers carrying the username and
//! password in clear text. That wire contract is kept, but every client goes
//! through `RequestAuthenticator`, so another scheme can be plugged in without
//! touching the clients.

use reqwest::RequestBuilder;
use std::fmt;

/// Header carrying the username
pub const USERNAME_HEADER: &str = "NETWORKAPI_USERNAME";
/// Header carrying the password
pub const PASSWORD_HEADER: &str = "NETWORKAPI_PASSWORD";

/// Attaches authentication to an outgoing request
pub trait RequestAuthenticator: fmt::Debug + Send + Sync {
    /// Decorate the request with whatever the server needs to authenticate it
    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder;
}

/// Username/password sent as `NETWORKAPI_USERNAME` / `NETWORKAPI_PASSWORD` headers
#[derive(Clone)]
pub struct HeaderCredentials {
    username: String,
    password: String,
}

impl HeaderCredentials {
    /// Create credentials for header authentication
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Get the username
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl RequestAuthenticator for HeaderCredentials {
    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(USERNAME_HEADER, &self.username)
            .header(PASSWORD_HEADER, &self.password)
    }
}

impl fmt::Debug for HeaderCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
