//! Shared test doubles for the voxcue crates.

#![allow(missing_docs)]

mod api;
mod bridge;
mod transport;

pub use api::start_auth_mock;
pub use bridge::{BridgeCall, RecordingBridge};
pub use transport::ScriptedTransport;
