use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use {tsify::Tsify, wasm_bindgen::prelude::*};

#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "wasm", derive(Tsify), tsify(into_wasm_abi, from_wasm_abi))]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    /// Parses the host supplied value. Anything but `"light"` or `"dark"` is unknown.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ColorScheme::Light),
            "dark" => Some(ColorScheme::Dark),
            _ => None,
        }
    }
}

/// What the host told the view about itself at startup. Captured once, never changed.
///
/// When the bridge is unavailable every accessor other than [`PlatformContext::available`]
/// returns `None`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "wasm", derive(Tsify), tsify(into_wasm_abi, from_wasm_abi))]
pub struct PlatformContext {
    available: bool,
    color_scheme: Option<ColorScheme>,
    user_id: Option<i64>,
    init_data: Option<String>,
}

impl PlatformContext {
    /// Context for a view running outside the host.
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub(crate) fn detected(
        color_scheme: Option<ColorScheme>,
        user_id: Option<i64>,
        init_data: Option<String>,
    ) -> Self {
        Self {
            available: true,
            color_scheme,
            user_id,
            init_data,
        }
    }

    /// Whether a host bridge exists.
    pub fn available(&self) -> bool {
        self.available
    }

    #[allow(missing_docs)]
    pub fn color_scheme(&self) -> Option<ColorScheme> {
        self.color_scheme.filter(|_| self.available)
    }

    /// Numeric id of the Telegram user the view was opened for.
    pub fn user_id(&self) -> Option<i64> {
        self.user_id.filter(|_| self.available)
    }

    /// The raw signed `initData` string, for the backend to verify.
    pub fn init_data(&self) -> Option<&str> {
        self.init_data.as_deref().filter(|_| self.available)
    }
}
