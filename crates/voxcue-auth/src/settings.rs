use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use {tsify::Tsify, wasm_bindgen::prelude::*};

/// Basic client behavior settings. These settings specify the endpoint used for the
/// credential exchange.
///
/// Defaults to
///
/// ```
/// # use voxcue_auth::ClientSettings;
/// let settings = ClientSettings {
///     auth_url: "https://api.voxcue.com/auth/login".to_string(),
/// };
/// let default = ClientSettings::default();
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
#[cfg_attr(feature = "wasm", derive(Tsify), tsify(into_wasm_abi, from_wasm_abi))]
pub struct ClientSettings {
    /// Absolute URL of the login endpoint. Defaults to `https://api.voxcue.com/auth/login`
    pub auth_url: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            auth_url: "https://api.voxcue.com/auth/login".to_string(),
        }
    }
}
