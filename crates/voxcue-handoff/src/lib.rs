#![doc = include_str!("../README.md")]

mod controller;
mod error;
mod settings;
mod snapshot;
mod state;
mod time;

pub use controller::{HandoffController, SubmitOutcome};
pub use error::HandoffError;
pub use settings::HandoffSettings;
pub use snapshot::ViewSnapshot;
pub use state::FlowState;
