#![doc = include_str!("../README.md")]

mod auth_client;
mod credentials;
mod error;
mod settings;
mod transport;

pub(crate) mod api; // keep internal to crate

pub use auth_client::{AuthClient, AuthResult, SessionToken};
pub use credentials::{Credentials, ValidationError};
pub use error::{LoginError, NETWORK_ERROR_MESSAGE};
pub use settings::ClientSettings;
pub use transport::{HttpTransport, ReqwestTransport, TransportError, TransportResponse};
