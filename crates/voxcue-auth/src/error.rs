use thiserror::Error;

use crate::TransportError;

/// Shown for every failure to get a usable answer from the login endpoint.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";
pub(crate) const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid login credentials!";

/// Why a login attempt did not produce a token.
///
/// The `Display` output is the message shown to the user.
#[derive(Debug, Error)]
pub enum LoginError {
    /// The request never got a usable answer: it was not sent, the body could not be read,
    /// or the body was not JSON.
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Network(#[source] TransportError),

    /// The service answered but did not hand out a token. `message` is the service supplied
    /// `error`, or a fixed fallback.
    #[error("{message}")]
    Rejected {
        /// HTTP status of the response.
        status: u16,
        /// User facing reason.
        message: String,
    },
}

impl LoginError {
    pub(crate) fn rejected(status: u16, message: Option<String>) -> Self {
        LoginError::Rejected {
            status,
            message: message.unwrap_or_else(|| INVALID_CREDENTIALS_MESSAGE.to_owned()),
        }
    }
}
