use std::{cell::RefCell, rc::Rc};

use voxcue_bridge::{BridgeError, HostBridge};

/// A call made on a [`RecordingBridge`], in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeCall {
    Ready,
    Expand,
    SendData(String),
    Close,
    ShowAlert(String),
}

/// A mock implementation of the [`HostBridge`] trait that records every call.
///
/// Clones share the same call log, so a test can keep one clone while the code under test owns
/// another.
#[derive(Debug, Clone, Default)]
pub struct RecordingBridge {
    color_scheme: Option<String>,
    init_data: Option<String>,
    send_failure: Option<String>,
    calls: Rc<RefCell<Vec<BridgeCall>>>,
}

impl RecordingBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color_scheme(mut self, color_scheme: &str) -> Self {
        self.color_scheme = Some(color_scheme.to_owned());
        self
    }

    pub fn with_init_data(mut self, init_data: &str) -> Self {
        self.init_data = Some(init_data.to_owned());
        self
    }

    /// Make every `send_data` call throw with `reason`, the way the host does for data it
    /// refuses. The call is still recorded.
    pub fn failing_send(mut self, reason: &str) -> Self {
        self.send_failure = Some(reason.to_owned());
        self
    }

    /// Every call so far.
    pub fn calls(&self) -> Vec<BridgeCall> {
        self.calls.borrow().clone()
    }

    /// The strings passed to `send_data`.
    pub fn sent_data(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                BridgeCall::SendData(data) => Some(data.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn was_closed(&self) -> bool {
        self.calls.borrow().contains(&BridgeCall::Close)
    }

    fn record(&self, call: BridgeCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl HostBridge for RecordingBridge {
    fn ready(&self) {
        self.record(BridgeCall::Ready);
    }

    fn expand(&self) {
        self.record(BridgeCall::Expand);
    }

    fn color_scheme(&self) -> Option<String> {
        self.color_scheme.clone()
    }

    fn init_data(&self) -> Option<String> {
        self.init_data.clone()
    }

    fn send_data(&self, data: &str) -> Result<(), BridgeError> {
        self.record(BridgeCall::SendData(data.to_owned()));

        match &self.send_failure {
            Some(reason) => Err(BridgeError::Rejected(reason.clone())),
            None => Ok(()),
        }
    }

    fn close(&self) {
        self.record(BridgeCall::Close);
    }

    fn show_alert(&self, message: &str) {
        self.record(BridgeCall::ShowAlert(message.to_owned()));
    }
}
