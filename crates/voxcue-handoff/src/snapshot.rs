use serde::{Deserialize, Serialize};
use voxcue_bridge::Theme;
#[cfg(feature = "wasm")]
use {tsify::Tsify, wasm_bindgen::prelude::*};

use crate::FlowState;

/// Everything the presentation layer needs to render the login view.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "wasm", derive(Tsify), tsify(into_wasm_abi, from_wasm_abi))]
pub struct ViewSnapshot {
    #[allow(missing_docs)]
    pub state: FlowState,
    /// The single user visible error message, replaced by every failure.
    pub error: Option<String>,
    #[allow(missing_docs)]
    pub theme: Theme,
    /// Non-fatal warning shown when the view runs outside Telegram.
    pub host_warning: Option<String>,
}
