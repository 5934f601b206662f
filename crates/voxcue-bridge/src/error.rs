use thiserror::Error;

/// Largest string the host accepts through `sendData`, in bytes.
pub const MAX_SEND_DATA_BYTES: usize = 4096;

/// The host did not take the handoff message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// Refused before reaching the host.
    #[error("Handoff message is {size} bytes, the host accepts at most {limit}")]
    PayloadTooLarge {
        /// Encoded size of the message.
        size: usize,
        /// What the host accepts.
        limit: usize,
    },

    /// The host threw when handed the message.
    #[error("Host rejected the message: {0}")]
    Rejected(String),
}
