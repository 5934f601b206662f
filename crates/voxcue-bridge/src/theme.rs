use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use {tsify::Tsify, wasm_bindgen::prelude::*};

use crate::{ColorScheme, PlatformContext};

/// Colors for the login view, resolved once from the host's color scheme.
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "wasm", derive(Tsify), tsify(into_wasm_abi, from_wasm_abi))]
pub struct Theme {
    pub color_scheme: ColorScheme,
    pub background: String,
    pub text: String,
    pub accent: String,
    pub error: String,
}

impl Theme {
    #[allow(missing_docs)]
    pub fn for_scheme(color_scheme: ColorScheme) -> Self {
        let (background, text, accent, error) = match color_scheme {
            ColorScheme::Light => ("#f4f4f4", "#000000", "#007bff", "#ff0000"),
            ColorScheme::Dark => ("#1c1c1e", "#ffffff", "#2ea6ff", "#ff453a"),
        };

        Self {
            color_scheme,
            background: background.to_owned(),
            text: text.to_owned(),
            accent: accent.to_owned(),
            error: error.to_owned(),
        }
    }
}

impl From<&PlatformContext> for Theme {
    /// Light unless the host reported a dark scheme.
    fn from(context: &PlatformContext) -> Self {
        Theme::for_scheme(context.color_scheme().unwrap_or(ColorScheme::Light))
    }
}
