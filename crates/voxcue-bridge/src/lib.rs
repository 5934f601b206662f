#![doc = include_str!("../README.md")]

mod bridge;
mod context;
mod detector;
mod error;
mod identity;
mod payload;
mod theme;

pub use bridge::HostBridge;
pub use context::{ColorScheme, PlatformContext};
pub use detector::{BridgeDetector, HostPlatform};
pub use error::{BridgeError, MAX_SEND_DATA_BYTES};
pub use payload::{HandoffPayload, PayloadShape};
pub use theme::Theme;
