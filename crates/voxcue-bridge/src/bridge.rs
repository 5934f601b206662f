use crate::BridgeError;

/// This trait defines the surface of the host platform's in-view bridge that the login view
/// uses. It is up to the platform to implement it; in the browser this wraps the
/// `Telegram.WebApp` object.
///
/// Absence of a bridge is expressed as `Option::<impl HostBridge>::None`, never through the
/// methods of this trait.
pub trait HostBridge {
    /// Tells the host the view has loaded. Idempotent.
    fn ready(&self);

    /// Asks the host to give the view its full height. Idempotent.
    fn expand(&self);

    /// Raw color scheme reported by the host, normally `"light"` or `"dark"`.
    fn color_scheme(&self) -> Option<String>;

    /// Raw signed identity string the host launched the view with.
    fn init_data(&self) -> Option<String>;

    /// Hands a single string to the host. An `Ok` only means the host accepted the call:
    /// there is no delivery acknowledgment, and the host may drop the message if the view
    /// closes too early.
    fn send_data(&self, data: &str) -> Result<(), BridgeError>;

    /// Closes the view.
    fn close(&self);

    /// Shows a native alert with the given message.
    fn show_alert(&self, message: &str);
}
