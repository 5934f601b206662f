use serde::Serialize;

use crate::Credentials;

/// JSON body of `POST /auth/login`.
///
/// Borrows from [`Credentials`] so the password is never copied into a second buffer that
/// would escape zeroization.
#[derive(Serialize, Debug)]
pub(crate) struct LoginApiRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a Credentials> for LoginApiRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            username: &credentials.username,
            password: &credentials.password,
        }
    }
}

impl LoginApiRequest<'_> {
    pub(crate) fn to_json(&self) -> String {
        serde_json::to_string(self).expect("Serialize should be infallible")
    }
}
