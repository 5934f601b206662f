use tracing::warn;
use voxcue_bridge::{BridgeError, HostBridge};
use wasm_bindgen::{prelude::*, JsCast};

#[wasm_bindgen]
extern "C" {
    /// The `window.Telegram.WebApp` object injected by the Telegram client.
    #[wasm_bindgen(js_name = WebApp)]
    pub type TelegramWebApp;

    #[wasm_bindgen(catch, method, structural)]
    fn ready(this: &TelegramWebApp) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, method, structural)]
    fn expand(this: &TelegramWebApp) -> Result<(), JsValue>;

    #[wasm_bindgen(method, getter, structural, js_name = colorScheme)]
    fn color_scheme(this: &TelegramWebApp) -> Option<String>;

    #[wasm_bindgen(method, getter, structural, js_name = initData)]
    fn init_data(this: &TelegramWebApp) -> Option<String>;

    #[wasm_bindgen(catch, method, structural, js_name = sendData)]
    fn send_data(this: &TelegramWebApp, data: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, method, structural)]
    fn close(this: &TelegramWebApp) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, method, structural, js_name = showAlert)]
    fn show_alert(this: &TelegramWebApp, message: &str) -> Result<(), JsValue>;
}

/// [`HostBridge`] over the Telegram WebApp JavaScript API.
///
/// A `sendData` that throws is reported to the caller. Every other call that throws is
/// logged and otherwise ignored.
pub struct TelegramBridge(TelegramWebApp);

impl TelegramBridge {
    /// Looks up `globalThis.Telegram.WebApp`. `None` when the page is not running inside
    /// Telegram or the script providing the object was not loaded.
    pub fn locate() -> Option<Self> {
        let telegram = lookup(&js_sys::global(), "Telegram")?;
        let web_app = lookup(&telegram, "WebApp")?;

        Some(Self(web_app.unchecked_into()))
    }
}

fn lookup(target: &JsValue, key: &str) -> Option<JsValue> {
    js_sys::Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(JsValue::is_object)
}

fn log_js_error(method: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        warn!(method, error = ?e, "Telegram WebApp call threw");
    }
}

/// Telegram throws `Error("WebAppDataInvalid")` and friends, keep just the message.
fn js_error_message(error: &JsValue) -> String {
    error
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| error.as_string())
        .unwrap_or_else(|| format!("{error:?}"))
}

impl HostBridge for TelegramBridge {
    fn ready(&self) {
        log_js_error("ready", self.0.ready());
    }

    fn expand(&self) {
        log_js_error("expand", self.0.expand());
    }

    fn color_scheme(&self) -> Option<String> {
        self.0.color_scheme()
    }

    fn init_data(&self) -> Option<String> {
        self.0.init_data()
    }

    fn send_data(&self, data: &str) -> Result<(), BridgeError> {
        self.0
            .send_data(data)
            .map_err(|e| BridgeError::Rejected(js_error_message(&e)))
    }

    fn close(&self) {
        log_js_error("close", self.0.close());
    }

    fn show_alert(&self, message: &str) {
        log_js_error("showAlert", self.0.show_alert(message));
    }
}
