use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Returned when a required credential field is blank. Handled locally, no request is made.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Please enter both username and password")]
pub struct ValidationError;

/// Username and password as typed into the login view.
///
/// Only lives as long as the view state holding it. The password is wiped from memory when
/// the value is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    /// Account name.
    pub username: String,
    /// Plaintext password. Sent as-is to the authentication service over TLS.
    pub password: String,
}

impl Credentials {
    #[allow(missing_docs)]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Rejects a blank username or password. Whitespace-only input counts as blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() || self.password.trim().is_empty() {
            return Err(ValidationError);
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}
