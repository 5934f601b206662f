use thiserror::Error;
use voxcue_auth::{LoginError, TransportError, ValidationError, NETWORK_ERROR_MESSAGE};
use voxcue_bridge::BridgeError;

/// Every way an attempt can end without handing off a token. The `Display` output is what the
/// view shows in its error field.
#[derive(Debug, Error)]
pub enum HandoffError {
    /// A required field was blank. No request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No usable response from the authentication service.
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Network(#[source] TransportError),

    /// The authentication service declined to issue a token.
    #[error("{message}")]
    AuthRejected {
        /// HTTP status of the response.
        status: u16,
        /// Server supplied reason, or a fixed fallback.
        message: String,
    },

    /// A token was issued but there is no host bridge to hand it to.
    #[error("Telegram is not available. Please reopen this page from inside the Telegram app.")]
    BridgeUnavailable,

    /// A token was issued but the host refused the message carrying it.
    #[error("Could not pass the login to Telegram. Please reopen this page from inside the Telegram app.")]
    HandoffRejected(#[source] BridgeError),
}

impl From<LoginError> for HandoffError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::Network(source) => HandoffError::Network(source),
            LoginError::Rejected { status, message } => {
                HandoffError::AuthRejected { status, message }
            }
        }
    }
}

impl HandoffError {
    /// Whether submitting again from this view can succeed.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            HandoffError::BridgeUnavailable | HandoffError::HandoffRejected(_)
        )
    }
}
