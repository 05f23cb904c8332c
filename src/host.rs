//! Capabilities the embedding shell provides to the catalog front end.

/// What the front end needs from its host: a camera and a way to tell the
/// user something.
pub trait Host {
    /// Raw bytes of a captured photo, or `None` if the user cancelled or
    /// there is no camera.
    fn capture_image(&mut self) -> Option<Vec<u8>>;

    fn notify(&mut self, message: &str);
}

/// Host for a plain terminal. Messages go to stderr; there is no camera.
#[derive(Debug, Default)]
pub struct TerminalHost;

impl Host for TerminalHost {
    fn capture_image(&mut self) -> Option<Vec<u8>> {
        tracing::debug!("camera capture requested on a terminal host");
        None
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{message}");
    }
}
