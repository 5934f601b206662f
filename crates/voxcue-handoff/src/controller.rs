use std::cell::RefCell;

use tracing::{debug, info, warn};
use voxcue_auth::{AuthClient, Credentials, HttpTransport, SessionToken};
use voxcue_bridge::{HostBridge, HostPlatform, PlatformContext, Theme};

use crate::{time::sleep, FlowState, HandoffError, HandoffSettings, ViewSnapshot};

const HOST_UNAVAILABLE_WARNING: &str =
    "Telegram WebApp is not available. Host features are disabled.";

/// What a call to [`HandoffController::submit`] did.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The flow was not idle, nothing happened.
    Ignored,
    /// The token was sent to the host and the view closed.
    Closed,
    /// The attempt ended with an error, which is also in the view's error field.
    Failed(HandoffError),
}

#[derive(Debug)]
struct Flow {
    state: FlowState,
    error: Option<String>,
}

/// Owns the login view's state machine.
///
/// The controller is single threaded and suspends only while the login request is in flight
/// and during the delay before closing. State is never borrowed across those suspension
/// points, so [`HandoffController::submit`] may be called again at any time; it is ignored
/// unless the flow is [`FlowState::Idle`].
pub struct HandoffController<T, B> {
    auth: AuthClient<T>,
    context: PlatformContext,
    bridge: Option<B>,
    theme: Theme,
    settings: HandoffSettings,
    flow: RefCell<Flow>,
}

impl<T: HttpTransport, B: HostBridge> HandoffController<T, B> {
    /// Creates an idle controller for a detected host.
    pub fn new(auth: AuthClient<T>, platform: HostPlatform<B>, settings: HandoffSettings) -> Self {
        let (context, bridge) = platform.into_parts();
        let theme = Theme::from(&context);

        Self {
            auth,
            context,
            bridge,
            theme,
            settings,
            flow: RefCell::new(Flow {
                state: FlowState::Idle,
                error: None,
            }),
        }
    }

    #[allow(missing_docs)]
    pub fn state(&self) -> FlowState {
        self.flow.borrow().state.clone()
    }

    #[allow(missing_docs)]
    pub fn error(&self) -> Option<String> {
        self.flow.borrow().error.clone()
    }

    #[allow(missing_docs)]
    pub fn context(&self) -> &PlatformContext {
        &self.context
    }

    #[allow(missing_docs)]
    pub fn snapshot(&self) -> ViewSnapshot {
        let flow = self.flow.borrow();
        ViewSnapshot {
            state: flow.state.clone(),
            error: flow.error.clone(),
            theme: self.theme.clone(),
            host_warning: (!self.context.available())
                .then(|| HOST_UNAVAILABLE_WARNING.to_owned()),
        }
    }

    /// Runs one attempt: validate, authenticate, hand off.
    pub async fn submit(&self, credentials: Credentials) -> SubmitOutcome {
        if let Err(outcome) = self.begin_attempt(&credentials) {
            return outcome;
        }

        let token = match self.auth.authenticate(&credentials).await {
            Ok(token) => token,
            Err(error) => {
                let error = HandoffError::from(error);
                self.end_attempt(&error);
                return SubmitOutcome::Failed(error);
            }
        };

        self.transition(FlowState::HandoffPending);
        self.handoff(token).await
    }

    /// Gates on `Idle` and validates, moving to `Submitting` on success.
    fn begin_attempt(&self, credentials: &Credentials) -> Result<(), SubmitOutcome> {
        let mut flow = self.flow.borrow_mut();

        if !flow.state.accepts_submit() {
            debug!(state = ?flow.state, "Ignoring submit, flow is not idle");
            return Err(SubmitOutcome::Ignored);
        }

        flow.state = FlowState::Validating;
        if let Err(error) = credentials.validate() {
            flow.state = FlowState::Idle;
            flow.error = Some(error.to_string());
            return Err(SubmitOutcome::Failed(error.into()));
        }

        flow.state = FlowState::Submitting;
        flow.error = None;
        Ok(())
    }

    /// Returns to `Idle` after a failed credential exchange.
    fn end_attempt(&self, error: &HandoffError) {
        let message = error.to_string();

        {
            let mut flow = self.flow.borrow_mut();
            flow.state = FlowState::Idle;
            flow.error = Some(message.clone());
        }

        if self.settings.alert_on_failure {
            if let Some(bridge) = &self.bridge {
                bridge.show_alert(&message);
            }
        }
    }

    async fn handoff(&self, token: SessionToken) -> SubmitOutcome {
        let Some(bridge) = &self.bridge else {
            warn!("Login succeeded but no host bridge is available, the token was not transmitted");
            return self.fail(HandoffError::BridgeUnavailable);
        };

        let sent = self
            .settings
            .payload_shape
            .build(token.as_str(), &self.context)
            .to_bridge_string()
            .and_then(|data| bridge.send_data(&data));

        if let Err(e) = sent {
            warn!(error = %e, "Login succeeded but the host refused the handoff message");
            return self.fail(HandoffError::HandoffRejected(e));
        }

        info!(
            shape = ?self.settings.payload_shape,
            delay_ms = self.settings.close_delay_ms,
            "Handoff payload sent, closing view"
        );

        // No delivery acknowledgment exists, give the host time to flush the message.
        sleep(self.settings.close_delay()).await;

        bridge.close();
        self.transition(FlowState::Closed);
        SubmitOutcome::Closed
    }

    /// Ends the flow for good after a token could not be handed off.
    fn fail(&self, error: HandoffError) -> SubmitOutcome {
        let message = error.to_string();

        let mut flow = self.flow.borrow_mut();
        flow.state = FlowState::Failed(message.clone());
        flow.error = Some(message);
        SubmitOutcome::Failed(error)
    }

    fn transition(&self, state: FlowState) {
        self.flow.borrow_mut().state = state;
    }
}
