use voxcue_auth::{AuthClient, ClientSettings, Credentials, ReqwestTransport};
use voxcue_bridge::{BridgeDetector, PlatformContext};
use voxcue_handoff::{HandoffController, HandoffSettings, ViewSnapshot};
use wasm_bindgen::prelude::*;

use crate::telegram::TelegramBridge;

/// The login view's state machine, exported to JavaScript. Create one per page load.
#[wasm_bindgen]
pub struct LoginViewClient(HandoffController<ReqwestTransport, TelegramBridge>);

#[wasm_bindgen]
impl LoginViewClient {
    /// Detects the Telegram host and prepares an idle login flow.
    #[wasm_bindgen(constructor)]
    pub fn new(settings: Option<ClientSettings>, handoff: Option<HandoffSettings>) -> Self {
        let platform = BridgeDetector::detect(TelegramBridge::locate());
        let auth = AuthClient::new(ReqwestTransport::default(), settings.unwrap_or_default());

        Self(HandoffController::new(
            auth,
            platform,
            handoff.unwrap_or_default(),
        ))
    }

    /// Current state, error message, theme and host warning for rendering.
    pub fn snapshot(&self) -> ViewSnapshot {
        self.0.snapshot()
    }

    /// What the host reported at startup.
    pub fn context(&self) -> PlatformContext {
        self.0.context().clone()
    }

    /// Submits the login form. Resolves with the view state once the attempt is over; calls
    /// made while an attempt is in flight resolve immediately with the unchanged state.
    pub async fn submit(&self, username: String, password: String) -> ViewSnapshot {
        self.0.submit(Credentials::new(username, password)).await;
        self.0.snapshot()
    }
}
