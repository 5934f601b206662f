use tracing::info;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};
use tracing_web::MakeWebConsoleWriter;
use wasm_bindgen::prelude::*;

/// Crates whose events follow the requested level. Everything else only reports warnings.
const VIEW_CRATES: [&str; 4] = [
    "voxcue_auth",
    "voxcue_bridge",
    "voxcue_handoff",
    "voxcue_wasm",
];

/// Verbosity of the login view's own logging.
#[allow(missing_docs)]
#[wasm_bindgen]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

fn view_filter(level: &LogLevel) -> EnvFilter {
    let directives = VIEW_CRATES
        .iter()
        .map(|name| format!("{name}={}", level.directive()))
        .fold(String::from("warn"), |acc, directive| acc + "," + &directive);

    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Installs the panic hook and routes `tracing` output to the browser console. Call once,
/// before constructing a [`crate::LoginViewClient`]. Later calls keep the first setup.
#[wasm_bindgen]
pub fn init_sdk(log_level: Option<LogLevel>) {
    console_error_panic_hook::set_once();

    let level = log_level.unwrap_or(LogLevel::Info);

    let console = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_writer(MakeWebConsoleWriter::new());

    let installed = tracing_subscriber::registry()
        .with(view_filter(&level))
        .with(console)
        .try_init()
        .is_ok();

    if installed {
        info!(
            version = env!("CARGO_PKG_VERSION"),
            level = level.directive(),
            "Login view logging started"
        );
    }
}
