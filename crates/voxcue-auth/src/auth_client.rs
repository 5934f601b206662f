use std::fmt;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    api::{LoginApiRequest, LoginApiResponse},
    ClientSettings, Credentials, HttpTransport, LoginError, TransportError, TransportResponse,
};

/// Outcome of one credential exchange.
pub type AuthResult = Result<SessionToken, LoginError>;

/// Opaque session token issued by the authentication service.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    #[allow(missing_docs)]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[allow(missing_docs)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&"********").finish()
    }
}

/// Client for the VoxCue login endpoint.
///
/// Stateless between calls: the same credentials against an unchanged service classify the
/// same way every time, and a failed attempt leaves nothing behind.
pub struct AuthClient<T> {
    transport: T,
    settings: ClientSettings,
}

impl<T: HttpTransport> AuthClient<T> {
    #[allow(missing_docs)]
    pub fn new(transport: T, settings: ClientSettings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    /// Exchanges credentials for a session token with a single request.
    ///
    /// The caller is expected to have rejected blank fields with [`Credentials::validate`]
    /// already; this method sends whatever it is given.
    pub async fn authenticate(&self, credentials: &Credentials) -> AuthResult {
        let body = LoginApiRequest::from(credentials).to_json();

        debug!(url = %self.settings.auth_url, "Sending login request");

        let response = self
            .transport
            .post_json(&self.settings.auth_url, body)
            .await
            .map_err(|e| {
                warn!(error = %e, "Login request failed before a response was received");
                LoginError::Network(e)
            })?;

        classify(response)
    }
}

/// Classifies a raw response, in order: unparseable body, rejection, success.
fn classify(response: TransportResponse) -> AuthResult {
    let body: Value = serde_json::from_str(&response.body).map_err(|e| {
        warn!(status = response.status, "Login response body is not JSON");
        LoginError::Network(TransportError::MalformedBody(e))
    })?;
    let LoginApiResponse { token, error } = LoginApiResponse::from(&body);

    match token {
        Some(token) if response.is_success() => {
            info!(status = response.status, "Login successful");
            Ok(SessionToken(token))
        }
        _ => {
            warn!(
                status = response.status,
                has_error_message = error.is_some(),
                "Login rejected"
            );
            Err(LoginError::rejected(response.status, error))
        }
    }
}
