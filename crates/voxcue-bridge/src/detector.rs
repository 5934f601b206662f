use tracing::{debug, info, warn};

use crate::{identity::Identity, ColorScheme, HostBridge, PlatformContext};

/// The host as seen by the view after startup: the captured context plus the bridge handle,
/// if there is one.
///
/// `bridge` is `Some` exactly when `context.available()` is true.
#[derive(Debug)]
pub struct HostPlatform<B> {
    context: PlatformContext,
    bridge: Option<B>,
}

impl<B> HostPlatform<B> {
    #[allow(missing_docs)]
    pub fn context(&self) -> &PlatformContext {
        &self.context
    }

    #[allow(missing_docs)]
    pub fn bridge(&self) -> Option<&B> {
        self.bridge.as_ref()
    }

    #[allow(missing_docs)]
    pub fn into_parts(self) -> (PlatformContext, Option<B>) {
        (self.context, self.bridge)
    }
}

/// Detects the host bridge once, at view initialization.
pub struct BridgeDetector;

impl BridgeDetector {
    /// Takes ownership of the probed bridge, signals the host that the view is ready and
    /// captures the [`PlatformContext`].
    ///
    /// A missing bridge is not an error: the view stays usable for input, and the handoff
    /// fails later with a bridge-unavailable error.
    pub fn detect<B: HostBridge>(bridge: Option<B>) -> HostPlatform<B> {
        let Some(bridge) = bridge else {
            warn!("Telegram WebApp is not available. The user may not be in the Telegram app.");
            return HostPlatform {
                context: PlatformContext::unavailable(),
                bridge: None,
            };
        };

        bridge.ready();
        bridge.expand();

        let color_scheme = bridge.color_scheme().as_deref().and_then(ColorScheme::parse);
        let identity = bridge.init_data().as_deref().and_then(Identity::parse);
        if identity.is_none() {
            debug!("Host did not provide a usable identity payload");
        }

        info!(
            ?color_scheme,
            has_identity = identity.is_some(),
            "Telegram WebApp detected"
        );

        let (user_id, init_data) = match identity {
            Some(Identity { user_id, init_data }) => (Some(user_id), Some(init_data)),
            None => (None, None),
        };

        HostPlatform {
            context: PlatformContext::detected(color_scheme, user_id, init_data),
            bridge: Some(bridge),
        }
    }
}
