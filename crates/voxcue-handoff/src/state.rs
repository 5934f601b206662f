use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use {tsify::Tsify, wasm_bindgen::prelude::*};

/// Where the login view is in its flow.
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "state", content = "reason", rename_all = "camelCase")]
#[cfg_attr(feature = "wasm", derive(Tsify), tsify(into_wasm_abi, from_wasm_abi))]
pub enum FlowState {
    Idle,
    Validating,
    Submitting,
    HandoffPending,
    /// The token was handed to the host and the view closed.
    Closed,
    /// The flow cannot continue in this view.
    Failed(String),
}

impl FlowState {
    /// Only an idle flow starts a new attempt.
    pub fn accepts_submit(&self) -> bool {
        matches!(self, FlowState::Idle)
    }

    /// No transition leaves this state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlowState::Closed | FlowState::Failed(_))
    }
}
