use std::time::Duration;

use serde::{Deserialize, Serialize};
use voxcue_bridge::PayloadShape;
#[cfg(feature = "wasm")]
use {tsify::Tsify, wasm_bindgen::prelude::*};

/// Behavior of the handoff once a token has been issued.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
#[cfg_attr(feature = "wasm", derive(Tsify), tsify(into_wasm_abi, from_wasm_abi))]
pub struct HandoffSettings {
    /// Milliseconds to wait between sending the payload and closing the view. Defaults to `300`
    pub close_delay_ms: u32,
    /// Fields included in the payload. Defaults to [`PayloadShape::TokenWithIdentity`]
    pub payload_shape: PayloadShape,
    /// Also show failed login attempts through the host's native alert. Defaults to `false`
    pub alert_on_failure: bool,
}

impl Default for HandoffSettings {
    fn default() -> Self {
        Self {
            close_delay_ms: 300,
            payload_shape: PayloadShape::default(),
            alert_on_failure: false,
        }
    }
}

impl HandoffSettings {
    #[allow(missing_docs)]
    pub fn close_delay(&self) -> Duration {
        Duration::from_millis(self.close_delay_ms.into())
    }
}
